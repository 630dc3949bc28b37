mod aggregator;
pub mod views;

pub use aggregator::aggregate;
pub use views::{CompanyCount, MonthCount, MonthKey, TrackerStats};
