use chrono::{NaiveDate, NaiveDateTime};

use crate::tracker::domain::{
    ApplicationId, ApplicationRecord, ApplicationStatus, InterviewId, InterviewRecord,
    InterviewStatus, InterviewType, OwnerId,
};
use crate::tracker::repository::{RepositoryError, TrackerRepository};

pub(super) const OWNER: OwnerId = OwnerId(7);

/// The reference instant used throughout the bucketing tests:
/// Monday 2024-01-29, 10:00.
pub(super) fn reference_now() -> NaiveDateTime {
    datetime(2024, 1, 29, 10, 0)
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("valid time")
}

pub(super) fn application(id: u64, company: &str, applied_on: NaiveDate) -> ApplicationRecord {
    application_with_status(id, company, applied_on, ApplicationStatus::Waiting)
}

pub(super) fn application_with_status(
    id: u64,
    company: &str,
    applied_on: NaiveDate,
    status: ApplicationStatus,
) -> ApplicationRecord {
    ApplicationRecord {
        id: ApplicationId(id),
        owner: OWNER,
        name: format!("Role at {company}"),
        company: company.to_string(),
        role: "Engineer".to_string(),
        applied_on,
        status,
        success_chance: Some(50),
    }
}

pub(super) fn scheduled_interview(
    id: u64,
    application_id: u64,
    scheduled_at: NaiveDateTime,
) -> InterviewRecord {
    interview_with_status(id, application_id, scheduled_at, InterviewStatus::Scheduled)
}

pub(super) fn interview_with_status(
    id: u64,
    application_id: u64,
    scheduled_at: NaiveDateTime,
    status: InterviewStatus,
) -> InterviewRecord {
    InterviewRecord {
        id: InterviewId(id),
        application_id: ApplicationId(application_id),
        scheduled_at,
        interview_type: InterviewType::Video,
        status,
        interviewer_name: None,
        duration_minutes: Some(45),
        self_rating: None,
        meeting_link: None,
        notes: None,
    }
}

/// Repository stub that always fails, for error-path coverage.
pub(super) struct UnavailableRepository;

impl TrackerRepository for UnavailableRepository {
    fn applications_for(
        &self,
        _owner: OwnerId,
    ) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }

    fn interviews_for(&self, _owner: OwnerId) -> Result<Vec<InterviewRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }
}
