use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::keys;
use crate::types::{Record, User};

/// Field report moderation state
///
/// DRAFT and SUBMITTED are author-writable; moving to APPROVED or REJECTED
/// is an admin decision. The generic update operation does not forbid other
/// transitions; callers gate them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

/// Field report filed by an agent or researcher
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Byline snapshot of the filing account.
    pub author: User,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Report {
    const STORE_KEY: &'static str = keys::REPORTS;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Draft for a new report; system fields are assigned by the store.
#[derive(Clone, Debug)]
pub struct NewReport {
    pub title: String,
    pub content: String,
    pub author: User,
    pub status: ReportStatus,
}

/// Editable report fields; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default)]
pub struct ReportPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<ReportStatus>,
}

impl ReportPatch {
    pub(crate) fn apply(self, report: &mut Report) {
        if let Some(title) = self.title {
            report.title = title;
        }
        if let Some(content) = self.content {
            report.content = content;
        }
        if let Some(status) = self.status {
            report.status = status;
        }
    }
}
