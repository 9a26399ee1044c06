use rusqlite::Row;

/// A chat channel registered as belonging to a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassChannel {
    pub channel_id: u64,
    pub class_name: String,
    pub class_archived: bool,
}

impl ClassChannel {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            channel_id: row.get::<_, i64>(0)? as u64,
            class_name: row.get(1)?,
            class_archived: row.get(2)?,
        })
    }
}
