use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::keys;
use crate::types::{Record, User};

/// News bulletin published on the portal front page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Byline snapshot of the publishing account.
    pub author: User,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for News {
    const STORE_KEY: &'static str = keys::NEWS;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Draft for a new bulletin; system fields are assigned by the store.
#[derive(Clone, Debug)]
pub struct NewNews {
    pub title: String,
    pub content: String,
    pub author: User,
}

/// Editable bulletin fields; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default)]
pub struct NewsPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NewsPatch {
    pub(crate) fn apply(self, news: &mut News) {
        if let Some(title) = self.title {
            news.title = title;
        }
        if let Some(content) = self.content {
            news.content = content;
        }
    }
}
