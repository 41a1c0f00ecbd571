use async_trait::async_trait;
use mongodb::{
    bson::{doc, Bson, Document},
    Client, Database,
};
use tracing::{debug, info};

use crate::utils::errors::store_error::StoreError;

/// Handle on the backing document database.
///
/// Opened once at startup, shared by every request and closed after the
/// server stops.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    fn database_name(&self) -> &str;

    /// Round-trips a `ping` command to the server.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn count_documents(&self, collection: &str) -> Result<u64, StoreError>;

    async fn close(&self);
}

pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, StoreError> {
        if uri.trim().is_empty() {
            return Err(StoreError::Unavailable("MONGODB_URI is empty".to_string()));
        }
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(database_name);
        info!(database = database_name, "MongoDB client created");
        Ok(Self { client, database })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn database_name(&self) -> &str {
        self.database.name()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let reply = self.database.run_command(doc! { "ping": 1 }).await?;
        if !ping_succeeded(&reply) {
            return Err(StoreError::PingFailed(format!(
                "unexpected reply {}",
                reply
            )));
        }
        debug!(database = self.database.name(), "MongoDB ping succeeded");
        Ok(())
    }

    async fn count_documents(&self, collection: &str) -> Result<u64, StoreError> {
        let count = self
            .database
            .collection::<Document>(collection)
            .count_documents(doc! {})
            .await?;
        Ok(count)
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        info!("MongoDB client closed");
    }
}

/// Servers answer `ping` with `ok: 1`, encoded as a double or an integer
/// depending on the version.
fn ping_succeeded(reply: &Document) -> bool {
    match reply.get("ok") {
        Some(Bson::Double(ok)) => *ok == 1.0,
        Some(Bson::Int32(ok)) => *ok == 1,
        Some(Bson::Int64(ok)) => *ok == 1,
        _ => false,
    }
}
