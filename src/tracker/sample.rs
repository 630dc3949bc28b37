use chrono::{Duration, NaiveDateTime};

use super::domain::{
    ApplicationId, ApplicationRecord, ApplicationStatus, InterviewId, InterviewRecord,
    InterviewStatus, InterviewType, OwnerId,
};

/// Built-in dataset for demos and default server wiring: a small pipeline
/// with interviews spread across the reminder buckets, anchored to `now`
/// so the demo output stays interesting regardless of the actual date.
pub fn records(
    owner: OwnerId,
    now: NaiveDateTime,
) -> (Vec<ApplicationRecord>, Vec<InterviewRecord>) {
    let today = now.date();

    let applications = vec![
        application(
            1,
            owner,
            "Backend Engineer",
            "Acme",
            "Engineering",
            today - Duration::days(36),
            ApplicationStatus::Interview,
            Some(70),
        ),
        application(
            2,
            owner,
            "Platform Engineer",
            "Acme",
            "Engineering",
            today - Duration::days(31),
            ApplicationStatus::Interview,
            Some(55),
        ),
        application(
            3,
            owner,
            "Data Engineer",
            "Globex",
            "Data",
            today - Duration::days(9),
            ApplicationStatus::Waiting,
            Some(40),
        ),
        application(
            4,
            owner,
            "SRE",
            "Initech",
            "Operations",
            today - Duration::days(20),
            ApplicationStatus::Rejected,
            None,
        ),
    ];

    let at = |days: i64, hour: u32| {
        (today + Duration::days(days))
            .and_hms_opt(hour, 0, 0)
            .unwrap_or(now)
    };

    let interviews = vec![
        interview(
            1,
            1,
            at(0, 15),
            InterviewType::Technical,
            InterviewStatus::Scheduled,
            Some("Dana"),
        ),
        interview(
            2,
            2,
            at(1, 9),
            InterviewType::Video,
            InterviewStatus::Scheduled,
            Some("Sam"),
        ),
        interview(
            3,
            2,
            at(5, 14),
            InterviewType::Behavioral,
            InterviewStatus::Scheduled,
            None,
        ),
        interview(
            4,
            1,
            at(-7, 10),
            InterviewType::Phone,
            InterviewStatus::Completed,
            Some("Dana"),
        ),
        interview(
            5,
            3,
            at(2, 11),
            InterviewType::Hr,
            InterviewStatus::Cancelled,
            None,
        ),
    ];

    (applications, interviews)
}

#[allow(clippy::too_many_arguments)]
fn application(
    id: u64,
    owner: OwnerId,
    name: &str,
    company: &str,
    role: &str,
    applied_on: chrono::NaiveDate,
    status: ApplicationStatus,
    success_chance: Option<u8>,
) -> ApplicationRecord {
    ApplicationRecord {
        id: ApplicationId(id),
        owner,
        name: name.to_string(),
        company: company.to_string(),
        role: role.to_string(),
        applied_on,
        status,
        success_chance,
    }
}

fn interview(
    id: u64,
    application_id: u64,
    scheduled_at: NaiveDateTime,
    interview_type: InterviewType,
    status: InterviewStatus,
    interviewer: Option<&str>,
) -> InterviewRecord {
    InterviewRecord {
        id: InterviewId(id),
        application_id: ApplicationId(application_id),
        scheduled_at,
        interview_type,
        status,
        interviewer_name: interviewer.map(str::to_string),
        duration_minutes: Some(60),
        self_rating: None,
        meeting_link: None,
        notes: None,
    }
}
