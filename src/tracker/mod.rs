//! Reminder classification and statistics aggregation for job-application
//! tracking, plus the repository seam, service layer, HTTP routes, and CSV
//! seeding that surround the pure core.

pub mod domain;
pub mod import;
pub mod reminders;
pub mod repository;
pub mod router;
pub mod sample;
pub mod service;
pub mod stats;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationId, ApplicationRecord, ApplicationStatus, InterviewId, InterviewRecord,
    InterviewStatus, InterviewType, OwnerId,
};
pub use import::CsvImportError;
pub use reminders::{InterviewReminderView, ReminderDigest};
pub use repository::{MemoryStore, RepositoryError, TrackerRepository};
pub use router::tracker_router;
pub use service::{TrackerService, TrackerServiceError};
pub use stats::{CompanyCount, MonthCount, MonthKey, TrackerStats};
