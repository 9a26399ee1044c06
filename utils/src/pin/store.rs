use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use sockbot_db::db::{ClassChannel, ClassPin};
use sockbot_db::SockbotDB;
use tracing::error;

use super::traits::{ChannelRegistry, PinStore};

/// `ChannelRegistry` and `PinStore` over the SQLite database. Every query runs
/// on tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct DbStore {
    db: Arc<SockbotDB>,
}

impl DbStore {
    pub fn new(db: Arc<SockbotDB>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Arc<SockbotDB> {
        &self.db
    }

    async fn blocking<T, F>(&self, f: F) -> anyhow::Result<T>
    where
        F: FnOnce(&SockbotDB) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || f(&db))
            .await
            .map_err(|e| {
                error!(target: "SockbotDB", "spawn_blocking join error: {}", e);
                anyhow!("Database task failed, {e}")
            })?
    }
}

#[async_trait]
impl ChannelRegistry for DbStore {
    async fn search_class_by_channel(&self, channel_id: u64) -> anyhow::Result<Option<ClassChannel>> {
        self.blocking(move |db| db.search_class_by_channel(channel_id))
            .await
    }
}

#[async_trait]
impl PinStore for DbStore {
    async fn get_pin_from_user(&self, message_id: u64) -> anyhow::Result<Option<ClassPin>> {
        self.blocking(move |db| db.get_pin_from_user(message_id)).await
    }

    async fn insert_pin(&self, pin: &ClassPin) -> anyhow::Result<bool> {
        let pin = pin.clone();
        self.blocking(move |db| db.insert_pin(&pin)).await
    }
}
