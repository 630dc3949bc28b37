use std::sync::Mutex;

use super::domain::{ApplicationRecord, InterviewRecord, OwnerId};

/// Read-only storage seam so the service layer can be exercised in
/// isolation. Record mutation lives with the external persistence
/// collaborator and is intentionally absent here.
pub trait TrackerRepository: Send + Sync {
    fn applications_for(&self, owner: OwnerId) -> Result<Vec<ApplicationRecord>, RepositoryError>;
    fn interviews_for(&self, owner: OwnerId) -> Result<Vec<InterviewRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// In-memory store backing tests, the demo CLI, and default server wiring.
/// Interviews are scoped through their application's owner.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryStoreInner>,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    applications: Vec<ApplicationRecord>,
    interviews: Vec<InterviewRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(
        applications: Vec<ApplicationRecord>,
        interviews: Vec<InterviewRecord>,
    ) -> Self {
        Self {
            inner: Mutex::new(MemoryStoreInner {
                applications,
                interviews,
            }),
        }
    }

    pub fn push_application(&self, record: ApplicationRecord) {
        let mut inner = self.inner.lock().expect("memory store poisoned");
        inner.applications.push(record);
    }

    pub fn push_interview(&self, record: InterviewRecord) {
        let mut inner = self.inner.lock().expect("memory store poisoned");
        inner.interviews.push(record);
    }
}

impl TrackerRepository for MemoryStore {
    fn applications_for(&self, owner: OwnerId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let inner = self.inner.lock().expect("memory store poisoned");
        Ok(inner
            .applications
            .iter()
            .filter(|application| application.owner == owner)
            .cloned()
            .collect())
    }

    fn interviews_for(&self, owner: OwnerId) -> Result<Vec<InterviewRecord>, RepositoryError> {
        let inner = self.inner.lock().expect("memory store poisoned");
        let owned: Vec<_> = inner
            .applications
            .iter()
            .filter(|application| application.owner == owner)
            .map(|application| application.id)
            .collect();
        Ok(inner
            .interviews
            .iter()
            .filter(|interview| owned.contains(&interview.application_id))
            .cloned()
            .collect())
    }
}
