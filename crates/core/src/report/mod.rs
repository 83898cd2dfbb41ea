pub mod charts;
pub mod stats;
pub mod tally;

pub use charts::{ChartSeries, RegionBar, ServiceBar, SeveritySlice, CHART_LIMIT};
pub use stats::{distinct_regions, AggregateStats, ScoreRating};
pub use tally::Tally;
