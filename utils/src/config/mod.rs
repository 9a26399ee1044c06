use anyhow::anyhow;
use notify::RecommendedWatcher;
use serde::{Deserialize, Serialize};
use std::fs::{read_to_string, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::info;

pub use notify::{RecursiveMode, Watcher};

pub mod notifications;
pub use crate::config::notifications::Load;

#[cfg(feature = "logging")]
pub mod logging;
#[cfg(feature = "logging")]
pub use crate::config::logging::LoggingConfig;

#[cfg(feature = "pin")]
pub mod emojis;
#[cfg(feature = "pin")]
pub use crate::config::emojis::{Emoji, EmojiConfig};

#[cfg(feature = "pin")]
pub mod pins;
#[cfg(feature = "pin")]
pub use crate::config::pins::PinConfig;

#[cfg(feature = "pin")]
pub mod db;
#[cfg(feature = "pin")]
pub use crate::config::db::DbConfig;
#[cfg(feature = "pin")]
pub use sockbot_db::SockbotDB;

pub const CONFIG: &str = "Config.toml";

#[derive(Debug, Clone, Default)]
pub struct Config {
    inner: Arc<Mutex<InnerConfig>>,
    path: PathBuf,
    #[cfg(feature = "pin")]
    db: Arc<SockbotDB>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct InnerConfig {
    #[cfg(feature = "pin")]
    pub pins: PinConfig,
    #[cfg(feature = "pin")]
    pub emojis: EmojiConfig,
    #[cfg(feature = "pin")]
    pub db: DbConfig,
    #[cfg(feature = "logging")]
    pub logs: LoggingConfig,
}

// Impls
impl Load for InnerConfig {
    /// Reads the config file, writing the defaults out first if it does not exist.
    fn load_from(path: &Path) -> anyhow::Result<Self> {
        match read_to_string(path) {
            Ok(s) => toml::from_str(&s).map_err(|e| anyhow!(e)),
            Err(_) => {
                let config = Self::default();
                let mut f = File::create(path)?;
                f.write_all(toml::to_string(&config)?.as_bytes())?;
                info!(target: "Config", "Wrote default configuration to {}", path.display());
                Ok(config)
            }
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let inner_config = InnerConfig::load_from(&path)?;
        #[cfg(feature = "pin")]
        let db = Arc::new(inner_config.db.connect()?);
        Ok(Self {
            inner: Arc::new(Mutex::new(inner_config)),
            path,
            #[cfg(feature = "pin")]
            db,
        })
    }

    /// Returns a watcher that hot-reloads the configuration. The database
    /// connection is not reopened on reload.
    pub fn init(&self) -> anyhow::Result<RecommendedWatcher> {
        notifications::initialize(Arc::clone(&self.inner), self.path.clone())
    }

    pub fn watch(&self) -> anyhow::Result<RecommendedWatcher> {
        let mut watcher = self.init()?;
        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;
        Ok(watcher)
    }

    pub fn arc_clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            path: self.path.clone(),
            #[cfg(feature = "pin")]
            db: Arc::clone(&self.db),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(feature = "pin")]
    pub fn pins(&self) -> anyhow::Result<PinConfig> {
        let inner = self.inner.lock().map_err(|e| anyhow!("Error, {e}"))?;
        Ok(inner.pins.clone())
    }

    #[cfg(feature = "pin")]
    pub fn emojis(&self) -> anyhow::Result<EmojiConfig> {
        let inner = self.inner.lock().map_err(|e| anyhow!("Error, {e}"))?;
        Ok(inner.emojis.clone())
    }

    #[cfg(feature = "logging")]
    pub fn logs(&self) -> anyhow::Result<LoggingConfig> {
        let inner = self.inner.lock().map_err(|e| anyhow!("Error, {e}"))?;
        Ok(inner.logs.clone())
    }

    #[cfg(feature = "pin")]
    pub fn db(&self) -> Arc<SockbotDB> {
        Arc::clone(&self.db)
    }

    #[cfg(feature = "pin")]
    pub fn db_config(&self) -> anyhow::Result<DbConfig> {
        let inner = self.inner.lock().map_err(|e| anyhow!("Error, {e}"))?;
        Ok(inner.db.clone())
    }
}
