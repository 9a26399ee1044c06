use rusqlite::Row;

/// A pending pin request.
///
/// `sockbot_message_id` is the bot message users react to, `message_id` the
/// message that gets pinned once the request is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPin {
    pub sockbot_message_id: u64,
    pub message_id: u64,
    pub channel_id: u64,
    pub pin_owner: u64,
    pub pin_requester: u64,
    pub requested_at: i64,
}

impl ClassPin {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            sockbot_message_id: row.get::<_, i64>(0)? as u64,
            message_id: row.get::<_, i64>(1)? as u64,
            channel_id: row.get::<_, i64>(2)? as u64,
            pin_owner: row.get::<_, i64>(3)? as u64,
            pin_requester: row.get::<_, i64>(4)? as u64,
            requested_at: row.get(5)?,
        })
    }
}
