/// Failures raised by the document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Ping failed: {0}")]
    PingFailed(String),

    #[error("Database unavailable: {0}")]
    Unavailable(String),
}
