use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use permit_portal::portal::submission::{
    DraftId, DraftRecord, DraftRepository, NoticeError, NoticePublisher, PortalNotice,
    RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryDraftRepository {
    records: Arc<Mutex<HashMap<DraftId, DraftRecord>>>,
}

impl DraftRepository for InMemoryDraftRepository {
    fn insert(&self, record: DraftRecord) -> Result<DraftRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: DraftRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &DraftId) -> Result<Option<DraftRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryNoticePublisher {
    events: Arc<Mutex<Vec<PortalNotice>>>,
}

impl NoticePublisher for InMemoryNoticePublisher {
    fn publish(&self, notice: PortalNotice) -> Result<(), NoticeError> {
        let mut guard = self.events.lock().expect("notice mutex poisoned");
        guard.push(notice);
        Ok(())
    }
}

impl InMemoryNoticePublisher {
    pub(crate) fn events(&self) -> Vec<PortalNotice> {
        self.events.lock().expect("notice mutex poisoned").clone()
    }
}
