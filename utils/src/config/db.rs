use core::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sockbot_db::SockbotDB;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DbConfig {
    /// SQLite file. An in-memory database is used when unset.
    pub path: Option<String>,
}

impl DbConfig {
    pub fn connect(&self) -> anyhow::Result<SockbotDB> {
        match &self.path {
            Some(path) => SockbotDB::open(Path::new(path)),
            None => SockbotDB::new_memory(),
        }
    }
}

impl fmt::Display for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "Database: {path}"),
            None => write!(f, "Database: in-memory"),
        }
    }
}
