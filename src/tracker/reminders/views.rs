use chrono::NaiveDateTime;
use serde::Serialize;

use super::super::domain::{ApplicationId, InterviewId, InterviewType};

/// Denormalized interview entry ready for notification rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewReminderView {
    pub interview_id: InterviewId,
    pub application_id: ApplicationId,
    pub application_name: String,
    pub company: String,
    pub scheduled_at: NaiveDateTime,
    pub interview_type: InterviewType,
    pub type_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviewer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
}

/// Classification output: three disjoint buckets ordered by scheduled
/// instant, plus the combined count and the number of interviews skipped
/// because their application reference did not resolve.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReminderDigest {
    pub today: Vec<InterviewReminderView>,
    pub tomorrow: Vec<InterviewReminderView>,
    pub this_week: Vec<InterviewReminderView>,
    pub total_count: usize,
    pub skipped_orphans: usize,
}

impl ReminderDigest {
    /// Session-start reminder line. Today's interviews win over tomorrow's;
    /// nothing is produced when both buckets are empty.
    pub fn login_reminder(&self) -> Option<String> {
        fn pluralize(count: usize) -> &'static str {
            if count == 1 {
                "interview"
            } else {
                "interviews"
            }
        }

        if !self.today.is_empty() {
            let count = self.today.len();
            Some(format!("You have {} {} today", count, pluralize(count)))
        } else if !self.tomorrow.is_empty() {
            let count = self.tomorrow.len();
            Some(format!("You have {} {} tomorrow", count, pluralize(count)))
        } else {
            None
        }
    }
}
