use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for the authenticated user owning a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub u64);

/// Identifier wrapper for tracked job applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub u64);

/// Identifier wrapper for interview events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterviewId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Waiting,
    Interview,
    Rejected,
    /// Catch-all for status strings outside the known set; counted
    /// separately rather than rejected at the boundary.
    Other,
}

impl ApplicationStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Waiting, Self::Interview, Self::Rejected]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Interview => "interview",
            Self::Rejected => "rejected",
            Self::Other => "other",
        }
    }

    pub fn from_raw(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "waiting" => Self::Waiting,
            "interview" => Self::Interview,
            "rejected" => Self::Rejected,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewType {
    Phone,
    Video,
    InPerson,
    Technical,
    Behavioral,
    Hr,
    Other,
}

impl InterviewType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Phone => "Phone",
            Self::Video => "Video",
            Self::InPerson => "In Person",
            Self::Technical => "Technical",
            Self::Behavioral => "Behavioral",
            Self::Hr => "HR",
            Self::Other => "Other",
        }
    }

    pub fn from_raw(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "phone" => Self::Phone,
            "video" => Self::Video,
            "in_person" | "in person" => Self::InPerson,
            "technical" => Self::Technical,
            "behavioral" => Self::Behavioral,
            "hr" => Self::Hr,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
    Rescheduled,
    Other,
}

impl InterviewStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Rescheduled => "rescheduled",
            Self::Other => "other",
        }
    }

    pub fn from_raw(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Self::Scheduled,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            "rescheduled" => Self::Rescheduled,
            _ => Self::Other,
        }
    }
}

/// A tracked job application, always scoped to one owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub owner: OwnerId,
    pub name: String,
    pub company: String,
    pub role: String,
    pub applied_on: NaiveDate,
    pub status: ApplicationStatus,
    /// Estimated success chance in percent, clamped to 0..=100 at the
    /// boundary; absent when never estimated.
    pub success_chance: Option<u8>,
}

/// An interview event tied to one application. The scheduled instant is a
/// viewer-local naive datetime; calendar-day bucketing works on its date
/// component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRecord {
    pub id: InterviewId,
    pub application_id: ApplicationId,
    pub scheduled_at: NaiveDateTime,
    pub interview_type: InterviewType,
    pub status: InterviewStatus,
    pub interviewer_name: Option<String>,
    pub duration_minutes: Option<u32>,
    /// Self rating after the interview, clamped to 1..=5 at the boundary.
    pub self_rating: Option<u8>,
    pub meeting_link: Option<String>,
    pub notes: Option<String>,
}

/// Clamp a raw success-chance estimate into the documented 0..=100 range.
pub fn clamp_chance(raw: i64) -> u8 {
    raw.clamp(0, 100) as u8
}

/// Clamp a raw self rating into the documented 1..=5 range.
pub fn clamp_rating(raw: i64) -> u8 {
    raw.clamp(1, 5) as u8
}
