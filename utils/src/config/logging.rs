use core::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub path: String,
    pub error_file: String,
    pub log_file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".into(),
            path: "logs".into(),
            error_file: "error.log".into(),
            log_file: "sockbot.log".into(),
        }
    }
}

impl LoggingConfig {
    pub fn error_log_path(&self) -> String {
        format!("{}/{}", self.path, self.error_file)
    }

    pub fn log_path(&self) -> String {
        format!("{}/{}", self.path, self.log_file)
    }
}

impl fmt::Display for LoggingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Path: {}", self.path)?;
        writeln!(f, "Files: {}, {}", self.log_file, self.error_file)?;
        writeln!(f, "Log Level: {}", self.level)
    }
}
