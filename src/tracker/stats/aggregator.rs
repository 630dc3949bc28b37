use std::collections::HashMap;

use chrono::NaiveDateTime;

use super::super::domain::{
    ApplicationId, ApplicationRecord, ApplicationStatus, InterviewRecord, InterviewStatus,
};
use super::views::{CompanyCount, MonthCount, MonthKey, TrackerStats};

/// Compute summary statistics over one owner's full record sets.
///
/// Pure and deterministic: identical inputs and `now` produce identical
/// output, with frequency ties broken by first occurrence in input order.
pub fn aggregate(
    applications: &[ApplicationRecord],
    interviews: &[InterviewRecord],
    now: NaiveDateTime,
) -> TrackerStats {
    let mut stats = TrackerStats {
        total: applications.len(),
        ..TrackerStats::default()
    };

    for application in applications {
        match application.status {
            ApplicationStatus::Waiting => stats.waiting += 1,
            ApplicationStatus::Interview => stats.interview += 1,
            ApplicationStatus::Rejected => stats.rejected += 1,
            ApplicationStatus::Other => stats.other += 1,
        }
    }

    if stats.total > 0 {
        let rate = (stats.interview as f64 / stats.total as f64) * 100.0;
        stats.conversion_rate = rate.round().clamp(0.0, 100.0) as u8;
    }

    stats.top_company = most_frequent(
        applications.iter().map(|application| &application.company),
    )
    .map(|(company, count)| CompanyCount {
        name: company.clone(),
        count,
    });

    stats.most_active_month = most_frequent(
        applications
            .iter()
            .map(|application| MonthKey::of(application.applied_on)),
    )
    .map(|(month, count)| MonthCount { month, count });

    stats.earliest_application = applications
        .iter()
        .map(|application| application.applied_on)
        .min();

    let known: std::collections::HashSet<ApplicationId> = applications
        .iter()
        .map(|application| application.id)
        .collect();
    for interview in interviews {
        if !known.contains(&interview.application_id) {
            stats.skipped_interviews += 1;
            continue;
        }
        if interview.status != InterviewStatus::Completed {
            continue;
        }
        let latest = stats
            .latest_completed_interview
            .get_or_insert(interview.scheduled_at);
        if interview.scheduled_at > *latest {
            *latest = interview.scheduled_at;
        }
    }

    if let Some(earliest) = stats.earliest_application {
        // Clamp to zero when the earliest record post-dates "now" (clock
        // skew or hand-edited data).
        stats.days_in_use = (now.date() - earliest).num_days().max(0);
    }

    stats
}

/// Most frequent value in the sequence and its count, breaking ties by the
/// value's first occurrence. `None` on an empty sequence.
fn most_frequent<T, I>(values: I) -> Option<(T, usize)>
where
    T: Clone + Eq + std::hash::Hash,
    I: Iterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();

    for value in values {
        let entry = counts.entry(value.clone()).or_insert(0);
        if *entry == 0 {
            order.push(value);
        }
        *entry += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for value in order {
        let count = counts[&value];
        match &best {
            Some((_, best_count)) if *best_count >= count => {}
            _ => best = Some((value, count)),
        }
    }

    best
}
