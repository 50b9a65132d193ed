use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::{DataError, StorageError};
use crate::storage::KeyValueStore;
use crate::stores::Collection;
use crate::types::{NewNews, News, NewsPatch};

/// NewsStore manages front-page bulletins
pub struct NewsStore {
    collection: Collection<News>,
}

impl NewsStore {
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        Ok(Self {
            collection: Collection::load(kv)?,
        })
    }

    pub fn list(&self) -> &[News] {
        self.collection.list()
    }

    pub fn get(&self, id: &str) -> Option<&News> {
        self.collection.get(id)
    }

    pub fn create(&mut self, draft: NewNews) -> Result<News, StorageError> {
        let now = Utc::now();
        let news = News {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created_at: now,
            updated_at: now,
        };
        self.collection.insert(news.clone())?;
        Ok(news)
    }

    pub fn update(&mut self, id: &str, patch: NewsPatch) -> Result<News, DataError> {
        self.collection.update_with("news item", id, |news| {
            patch.apply(news);
            news.updated_at = Utc::now();
        })
    }

    pub fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        self.collection.remove(id)
    }
}
