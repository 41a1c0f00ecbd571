use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::health_service::{CollectionReport, MongoHealthReport};

pub const MONGO_CONNECTED_MESSAGE: &str = "Successfully connected to MongoDB";
pub const MONGO_FAILED_MESSAGE: &str = "Failed to connect to MongoDB";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CollectionCount {
    /// Collection name.
    pub name: String,
    /// Number of documents in the collection.
    pub documents: u64,
}

impl From<CollectionReport> for CollectionCount {
    fn from(report: CollectionReport) -> Self {
        CollectionCount {
            name: report.name,
            documents: report.documents,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCollections {
    pub content: CollectionCount,
    pub user_stats: CollectionCount,
    pub user_progress: CollectionCount,
}

/// Body of a successful connectivity check.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MongoHealthSuccess {
    pub success: bool,
    pub message: String,
    pub database: String,
    pub collections: HealthCollections,
    pub timestamp: DateTime<Utc>,
}

impl From<MongoHealthReport> for MongoHealthSuccess {
    fn from(report: MongoHealthReport) -> Self {
        MongoHealthSuccess {
            success: true,
            message: MONGO_CONNECTED_MESSAGE.to_string(),
            database: report.database,
            collections: HealthCollections {
                content: report.content.into(),
                user_stats: report.user_stats.into(),
                user_progress: report.user_progress.into(),
            },
            timestamp: Utc::now(),
        }
    }
}

/// Body of a failed connectivity check.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MongoHealthFailure {
    pub success: bool,
    pub error: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl MongoHealthFailure {
    pub fn new(error: String) -> Self {
        MongoHealthFailure {
            success: false,
            error,
            message: MONGO_FAILED_MESSAGE.to_string(),
            timestamp: Utc::now(),
        }
    }
}
