use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

// Discord ids are stored as the bit pattern of the u64 snowflake.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS class_channels (
            channel_id      INTEGER PRIMARY KEY,
            class_name      TEXT NOT NULL,
            class_archived  INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS class_pins (
            sockbot_message_id  INTEGER PRIMARY KEY,
            message_id          INTEGER NOT NULL UNIQUE,
            channel_id          INTEGER NOT NULL,
            pin_owner           INTEGER NOT NULL,
            pin_requester       INTEGER NOT NULL,
            requested_at        INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_class_pins_channel
            ON class_pins(channel_id);
        ",
    )?;

    info!(target: "SockbotDB", "Database migrations complete");
    Ok(())
}
