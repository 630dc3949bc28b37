use std::collections::HashMap;

use chrono::NaiveDateTime;

use super::super::domain::{ApplicationId, ApplicationRecord, InterviewRecord, InterviewStatus};
use super::views::{InterviewReminderView, ReminderDigest};

/// Partition scheduled interviews into today / tomorrow / this-week buckets
/// relative to `now`, using viewer-local calendar days.
///
/// Only interviews in status `Scheduled` participate. A scheduled interview
/// whose instant is already behind `now` is stale and lands in no bucket.
/// Interviews whose application reference does not resolve are skipped and
/// counted rather than failing the whole classification.
pub fn classify(
    applications: &[ApplicationRecord],
    interviews: &[InterviewRecord],
    now: NaiveDateTime,
) -> ReminderDigest {
    let by_id: HashMap<ApplicationId, &ApplicationRecord> = applications
        .iter()
        .map(|application| (application.id, application))
        .collect();

    let mut digest = ReminderDigest::default();
    let today = now.date();

    for interview in interviews {
        if interview.status != InterviewStatus::Scheduled {
            continue;
        }
        if interview.scheduled_at < now {
            continue;
        }

        let Some(application) = by_id.get(&interview.application_id) else {
            digest.skipped_orphans += 1;
            continue;
        };

        // Calendar-day offset, not a rolling 24-hour window: an interview
        // belongs to the day it starts.
        let offset = (interview.scheduled_at.date() - today).num_days();
        let bucket = match offset {
            0 => &mut digest.today,
            1 => &mut digest.tomorrow,
            2..=7 => &mut digest.this_week,
            _ => continue,
        };

        bucket.push(to_view(interview, application));
    }

    for bucket in [
        &mut digest.today,
        &mut digest.tomorrow,
        &mut digest.this_week,
    ] {
        bucket.sort_by_key(|view| view.scheduled_at);
    }

    digest.total_count = digest.today.len() + digest.tomorrow.len() + digest.this_week.len();
    digest
}

fn to_view(interview: &InterviewRecord, application: &ApplicationRecord) -> InterviewReminderView {
    InterviewReminderView {
        interview_id: interview.id,
        application_id: interview.application_id,
        application_name: application.name.clone(),
        company: application.company.clone(),
        scheduled_at: interview.scheduled_at,
        interview_type: interview.interview_type,
        type_label: interview.interview_type.label(),
        interviewer_name: interview.interviewer_name.clone(),
        duration_minutes: interview.duration_minutes,
        meeting_link: interview.meeting_link.clone(),
    }
}
