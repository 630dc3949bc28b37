use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Calendar month key, displayed and serialized as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Most frequent company together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyCount {
    pub name: String,
    pub count: usize,
}

/// Busiest calendar month together with its occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: MonthKey,
    pub count: usize,
}

/// Aggregated statistics over one owner's applications and interviews.
/// Absent values are explicit `None`s, never sentinel zeros or empty
/// strings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrackerStats {
    pub total: usize,
    pub waiting: usize,
    pub interview: usize,
    pub rejected: usize,
    pub other: usize,
    /// Rounded percentage of applications that reached interview status.
    pub conversion_rate: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_company: Option<CompanyCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_active_month: Option<MonthCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_application: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_completed_interview: Option<NaiveDateTime>,
    /// Whole days between the earliest application date and `now`, floored
    /// and never negative.
    pub days_in_use: i64,
    pub skipped_interviews: usize,
}
