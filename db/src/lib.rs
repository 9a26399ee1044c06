pub mod db;
pub mod migrations;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use anyhow::anyhow;
use chrono::Utc;
use db::{ClassChannel, ClassPin};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct SockbotDB {
    pub conn: Option<Mutex<Connection>>,
}

impl SockbotDB {
    pub fn new_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let conn = Connection::open(path)?;
        // WAL mode for concurrent reads
        conn.pragma_update(None, "journal_mode", "WAL")?;
        info!(target: "SockbotDB", "Database opened at {}", path.display());
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> anyhow::Result<Self> {
        migrations::run(&conn)?;
        Ok(Self {
            conn: Some(Mutex::new(conn)),
        })
    }

    // -- Class channels --

    pub fn register_class(
        &self,
        channel_id: u64,
        class_name: &str,
        archived: bool,
    ) -> anyhow::Result<ClassChannel> {
        self.conn()?.execute(
            "INSERT INTO class_channels (channel_id, class_name, class_archived)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(channel_id) DO UPDATE SET
                class_name = excluded.class_name,
                class_archived = excluded.class_archived",
            params![channel_id as i64, class_name, archived],
        )?;
        Ok(ClassChannel {
            channel_id,
            class_name: class_name.to_string(),
            class_archived: archived,
        })
    }

    /// Returns `false` when the channel is not registered.
    pub fn set_archived(&self, channel_id: u64, archived: bool) -> anyhow::Result<bool> {
        let changed = self.conn()?.execute(
            "UPDATE class_channels SET class_archived = ?2 WHERE channel_id = ?1",
            params![channel_id as i64, archived],
        )?;
        Ok(changed == 1)
    }

    pub fn search_class_by_channel(&self, channel_id: u64) -> anyhow::Result<Option<ClassChannel>> {
        self.conn()?
            .query_row(
                "SELECT channel_id, class_name, class_archived
                 FROM class_channels WHERE channel_id = ?1",
                [channel_id as i64],
                ClassChannel::from_row,
            )
            .optional()
            .map_err(anyhow::Error::from)
    }

    // -- Class pins --

    /// Looks up the pin request opened for the given target message.
    pub fn get_pin_from_user(&self, message_id: u64) -> anyhow::Result<Option<ClassPin>> {
        self.conn()?
            .query_row(
                "SELECT sockbot_message_id, message_id, channel_id, pin_owner, pin_requester, requested_at
                 FROM class_pins WHERE message_id = ?1",
                [message_id as i64],
                ClassPin::from_row,
            )
            .optional()
            .map_err(anyhow::Error::from)
    }

    /// Looks up a pin request by the bot message users react to.
    pub fn get_pin_by_request(&self, sockbot_message_id: u64) -> anyhow::Result<Option<ClassPin>> {
        self.conn()?
            .query_row(
                "SELECT sockbot_message_id, message_id, channel_id, pin_owner, pin_requester, requested_at
                 FROM class_pins WHERE sockbot_message_id = ?1",
                [sockbot_message_id as i64],
                ClassPin::from_row,
            )
            .optional()
            .map_err(anyhow::Error::from)
    }

    /// Inserts the pin request. Returns `false` without writing when a request
    /// for the same target message already exists.
    pub fn insert_pin(&self, pin: &ClassPin) -> anyhow::Result<bool> {
        let inserted = self.conn()?.execute(
            "INSERT OR IGNORE INTO class_pins
                (sockbot_message_id, message_id, channel_id, pin_owner, pin_requester, requested_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                pin.sockbot_message_id as i64,
                pin.message_id as i64,
                pin.channel_id as i64,
                pin.pin_owner as i64,
                pin.pin_requester as i64,
                pin.requested_at,
            ],
        )?;
        if inserted == 0 {
            debug!(target: "SockbotDB", "Pin request for message {} already stored", pin.message_id);
        }
        Ok(inserted == 1)
    }

    pub fn delete_pin(&self, message_id: u64) -> anyhow::Result<bool> {
        let deleted = self.conn()?.execute(
            "DELETE FROM class_pins WHERE message_id = ?1",
            [message_id as i64],
        )?;
        Ok(deleted == 1)
    }

    pub fn count_pins(&self) -> anyhow::Result<u64> {
        let count: i64 = self
            .conn()?
            .query_row("SELECT COUNT(*) FROM class_pins", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn conn(&self) -> anyhow::Result<MutexGuard<'_, Connection>> {
        if let Some(conn) = &self.conn {
            conn.lock().map_err(|e| anyhow!("DB lock poisoned: {e}"))
        } else {
            Err(anyhow!("Error, db is not available!"))
        }
    }
}

impl ClassPin {
    pub fn new(
        sockbot_message_id: u64,
        message_id: u64,
        channel_id: u64,
        pin_owner: u64,
        pin_requester: u64,
    ) -> Self {
        Self {
            sockbot_message_id,
            message_id,
            channel_id,
            pin_owner,
            pin_requester,
            requested_at: Utc::now().timestamp(),
        }
    }
}
