pub mod config;
pub mod export;
pub mod filter;
pub mod finding;
pub mod ingest;
pub mod report;
pub mod session;
