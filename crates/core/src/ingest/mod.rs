pub mod lift;
pub mod normalize;

pub use lift::lift_finding;
pub use normalize::{normalize, ParseError};
