use std::sync::Arc;

use crate::{
    repositories::document_store::DocumentStore,
    utils::{collections::Collections, errors::store_error::StoreError},
};

/// Named handle on one collection of the course content database.
pub struct CollectionHandle {
    name: &'static str,
    store: Arc<dyn DocumentStore>,
}

impl CollectionHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub async fn count_documents(&self) -> Result<u64, StoreError> {
        self.store.count_documents(self.name).await
    }
}

/// Access to the collections backing the course pages.
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn DocumentStore>,
}

impl ContentService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn content(&self) -> CollectionHandle {
        self.collection(Collections::CONTENT)
    }

    pub fn user_stats(&self) -> CollectionHandle {
        self.collection(Collections::USER_STATS)
    }

    pub fn user_progress(&self) -> CollectionHandle {
        self.collection(Collections::USER_PROGRESS)
    }

    fn collection(&self, name: &'static str) -> CollectionHandle {
        CollectionHandle {
            name,
            store: self.store.clone(),
        }
    }
}
