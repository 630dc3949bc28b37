use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::warn;

use super::domain::OwnerId;
use super::reminders::{self, ReminderDigest};
use super::repository::{RepositoryError, TrackerRepository};
use super::stats::{self, TrackerStats};

/// Service composing the repository seam with the pure reminder and stats
/// computations, scoped per owner. The clock is always supplied by the
/// caller; this layer never reads it directly.
pub struct TrackerService<R> {
    repository: Arc<R>,
}

impl<R> TrackerService<R>
where
    R: TrackerRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Classify the owner's upcoming interviews into reminder buckets.
    pub fn reminders(
        &self,
        owner: OwnerId,
        now: NaiveDateTime,
    ) -> Result<ReminderDigest, TrackerServiceError> {
        let applications = self.repository.applications_for(owner)?;
        let interviews = self.repository.interviews_for(owner)?;

        let digest = reminders::classify(&applications, &interviews, now);
        if digest.skipped_orphans > 0 {
            warn!(
                owner = owner.0,
                skipped = digest.skipped_orphans,
                "excluded interviews with unresolvable application references"
            );
        }

        Ok(digest)
    }

    /// Aggregate summary statistics over the owner's record sets.
    pub fn stats(
        &self,
        owner: OwnerId,
        now: NaiveDateTime,
    ) -> Result<TrackerStats, TrackerServiceError> {
        let applications = self.repository.applications_for(owner)?;
        let interviews = self.repository.interviews_for(owner)?;

        let stats = stats::aggregate(&applications, &interviews, now);
        if stats.skipped_interviews > 0 {
            warn!(
                owner = owner.0,
                skipped = stats.skipped_interviews,
                "excluded interviews with unresolvable application references"
            );
        }

        Ok(stats)
    }
}

/// Error raised by the tracker service.
#[derive(Debug, thiserror::Error)]
pub enum TrackerServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
