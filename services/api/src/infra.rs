use jobmatch::matching::{ProfileRecord, ProfileRepository, RepositoryError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Session-scoped profile store. Holds at most one active record; a new
/// upload replaces the previous one.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    record: Arc<Mutex<Option<ProfileRecord>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
    fn replace_active(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        let mut guard = self.record.lock().expect("repository mutex poisoned");
        *guard = Some(record.clone());
        Ok(record)
    }

    fn active(&self) -> Result<Option<ProfileRecord>, RepositoryError> {
        let guard = self.record.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }

    fn update(&self, record: ProfileRecord) -> Result<(), RepositoryError> {
        let mut guard = self.record.lock().expect("repository mutex poisoned");
        match guard.as_ref() {
            Some(active) if active.profile_id == record.profile_id => {
                *guard = Some(record);
                Ok(())
            }
            _ => Err(RepositoryError::NotFound),
        }
    }
}
