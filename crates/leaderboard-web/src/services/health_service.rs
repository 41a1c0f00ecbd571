use std::{any::Any, panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use tracing::debug;

use crate::{
    repositories::document_store::DocumentStore, utils::errors::store_error::StoreError,
};

use super::content_service::{CollectionHandle, ContentService};

/// Message reported when a failure carries no usable description.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionReport {
    pub name: String,
    pub documents: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoHealthReport {
    pub database: String,
    pub content: CollectionReport,
    pub user_stats: CollectionReport,
    pub user_progress: CollectionReport,
}

#[derive(Debug, thiserror::Error)]
pub enum HealthCheckError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("health probe panicked: {0}")]
    Panicked(String),
}

impl HealthCheckError {
    /// Text safe to hand back to the caller. Panics are not errors and only
    /// ever report [`UNKNOWN_ERROR`].
    pub fn public_message(&self) -> String {
        match self {
            HealthCheckError::Store(e) => {
                let message = e.to_string();
                if message.trim().is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    message
                }
            }
            HealthCheckError::Panicked(_) => UNKNOWN_ERROR.to_string(),
        }
    }
}

pub struct HealthService {
    store: Arc<dyn DocumentStore>,
    content_service: ContentService,
}

impl HealthService {
    pub fn new(store: Arc<dyn DocumentStore>, content_service: ContentService) -> Self {
        Self {
            store,
            content_service,
        }
    }

    /// Pings the database, then counts the course collections one after the
    /// other. Stops at the first failure.
    pub async fn check_mongodb(&self) -> Result<MongoHealthReport, HealthCheckError> {
        match AssertUnwindSafe(self.probe()).catch_unwind().await {
            Ok(result) => result.map_err(HealthCheckError::from),
            Err(payload) => Err(HealthCheckError::Panicked(panic_message(payload.as_ref()))),
        }
    }

    async fn probe(&self) -> Result<MongoHealthReport, StoreError> {
        self.store.ping().await?;

        let content = count(self.content_service.content()).await?;
        let user_stats = count(self.content_service.user_stats()).await?;
        let user_progress = count(self.content_service.user_progress()).await?;

        Ok(MongoHealthReport {
            database: self.store.database_name().to_string(),
            content,
            user_stats,
            user_progress,
        })
    }
}

async fn count(collection: CollectionHandle) -> Result<CollectionReport, StoreError> {
    let documents = collection.count_documents().await?;
    debug!(collection = collection.name(), documents, "Counted documents");
    Ok(CollectionReport {
        name: collection.name().to_string(),
        documents,
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
