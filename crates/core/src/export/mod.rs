pub mod csv;

pub use self::csv::{report_filename, to_csv, CSV_HEADER};
