use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use super::domain::{
    clamp_chance, clamp_rating, ApplicationId, ApplicationRecord, ApplicationStatus, InterviewId,
    InterviewRecord, InterviewStatus, InterviewType, OwnerId,
};

/// Error raised while importing seed data from CSV exports.
#[derive(Debug, thiserror::Error)]
pub enum CsvImportError {
    #[error("failed to read csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("row {row}: unparseable date '{value}'")]
    InvalidDate { row: usize, value: String },
}

/// Parse application records from a CSV export. Columns: Name, Company,
/// Role, Applied On, Status, Chance. Unknown status strings degrade to the
/// `Other` variant; chance values are clamped into range. Ids are assigned
/// sequentially in row order.
pub fn applications_from_reader<R: Read>(
    reader: R,
    owner: OwnerId,
) -> Result<Vec<ApplicationRecord>, CsvImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<ApplicationRow>().enumerate() {
        let row = row?;
        let applied_on = parse_date(&row.applied_on).ok_or_else(|| CsvImportError::InvalidDate {
            row: index + 1,
            value: row.applied_on.clone(),
        })?;

        records.push(ApplicationRecord {
            id: ApplicationId(index as u64 + 1),
            owner,
            name: row.name,
            company: row.company,
            role: row.role,
            applied_on,
            status: row
                .status
                .as_deref()
                .map(ApplicationStatus::from_raw)
                .unwrap_or(ApplicationStatus::Waiting),
            success_chance: row.chance.map(clamp_chance),
        });
    }

    Ok(records)
}

/// Parse interview records from a CSV export. Columns: Application Id,
/// Scheduled At, Type, Status, Interviewer, Duration Minutes, Self Rating,
/// Meeting Link.
pub fn interviews_from_reader<R: Read>(reader: R) -> Result<Vec<InterviewRecord>, CsvImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<InterviewRow>().enumerate() {
        let row = row?;
        let scheduled_at =
            parse_datetime(&row.scheduled_at).ok_or_else(|| CsvImportError::InvalidDate {
                row: index + 1,
                value: row.scheduled_at.clone(),
            })?;

        records.push(InterviewRecord {
            id: InterviewId(index as u64 + 1),
            application_id: ApplicationId(row.application_id),
            scheduled_at,
            interview_type: row
                .interview_type
                .as_deref()
                .map(InterviewType::from_raw)
                .unwrap_or(InterviewType::Other),
            status: row
                .status
                .as_deref()
                .map(InterviewStatus::from_raw)
                .unwrap_or(InterviewStatus::Scheduled),
            interviewer_name: row.interviewer,
            duration_minutes: row.duration_minutes,
            self_rating: row.self_rating.map(clamp_rating),
            meeting_link: row.meeting_link,
            notes: None,
        });
    }

    Ok(records)
}

pub fn applications_from_path(
    path: &Path,
    owner: OwnerId,
) -> Result<Vec<ApplicationRecord>, CsvImportError> {
    let file = std::fs::File::open(path).map_err(|source| CsvImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    applications_from_reader(file, owner)
}

pub fn interviews_from_path(path: &Path) -> Result<Vec<InterviewRecord>, CsvImportError> {
    let file = std::fs::File::open(path).map_err(|source| CsvImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    interviews_from_reader(file)
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Role", default)]
    role: String,
    #[serde(rename = "Applied On")]
    applied_on: String,
    #[serde(rename = "Status", default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(rename = "Chance", default)]
    chance: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct InterviewRow {
    #[serde(rename = "Application Id")]
    application_id: u64,
    #[serde(rename = "Scheduled At")]
    scheduled_at: String,
    #[serde(rename = "Type", default, deserialize_with = "empty_string_as_none")]
    interview_type: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(
        rename = "Interviewer",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    interviewer: Option<String>,
    #[serde(rename = "Duration Minutes", default)]
    duration_minutes: Option<u32>,
    #[serde(rename = "Self Rating", default)]
    self_rating: Option<i64>,
    #[serde(
        rename = "Meeting Link",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    meeting_link: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(trimmed).map(|dt| dt.date()))
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}
