use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::{DataError, StorageError};
use crate::storage::KeyValueStore;
use crate::stores::Collection;
use crate::types::{NewReport, Report, ReportPatch};

/// ReportStore manages field reports and their moderation state
pub struct ReportStore {
    collection: Collection<Report>,
}

impl ReportStore {
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        Ok(Self {
            collection: Collection::load(kv)?,
        })
    }

    pub fn list(&self) -> &[Report] {
        self.collection.list()
    }

    pub fn get(&self, id: &str) -> Option<&Report> {
        self.collection.get(id)
    }

    pub fn create(&mut self, draft: NewReport) -> Result<Report, StorageError> {
        let now = Utc::now();
        let report = Report {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            status: draft.status,
            created_at: now,
            updated_at: now,
        };
        self.collection.insert(report.clone())?;
        Ok(report)
    }

    /// Shallow-merge a patch (including status transitions) and refresh
    /// `updated_at`. Transition legality is a caller concern.
    pub fn update(&mut self, id: &str, patch: ReportPatch) -> Result<Report, DataError> {
        self.collection.update_with("report", id, |report| {
            patch.apply(report);
            report.updated_at = Utc::now();
        })
    }

    pub fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        self.collection.remove(id)
    }
}
