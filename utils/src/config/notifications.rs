use anyhow::anyhow;
use notify::{Config as NotifyConfig, Event, RecommendedWatcher, Watcher};
use std::{
    fmt::Debug,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration,
};
use tracing::{debug, error};

pub trait Load: Default + Send + Debug {
    fn load_from(path: &Path) -> anyhow::Result<Self>;
}

/// Builds a watcher that reloads `target` from `path` whenever the file is modified.
/// The caller still has to `watch` the path on the returned watcher.
pub fn initialize<T: Load + 'static>(
    target: Arc<Mutex<T>>,
    path: PathBuf,
) -> anyhow::Result<RecommendedWatcher> {
    let t_clone = Arc::clone(&target);
    RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if event.kind.is_modify() {
                    match T::load_from(&path) {
                        Ok(config) => match t_clone.lock() {
                            Ok(mut guard) => {
                                *guard = config;
                                debug!(target: "Notify", "New configuration loaded, {:?}", *guard);
                            }
                            Err(e) => error!(target: "Notify", "Config lock poisoned, {}", e),
                        },
                        Err(e) => error!(target: "Notify", "Error loading config, {}", e),
                    }
                }
            }
            Err(e) => error!(target: "Notify", "Error processing notify event: {}", e),
        },
        NotifyConfig::default()
            .with_poll_interval(Duration::from_secs(2))
            .with_compare_contents(true),
    )
    .map_err(|e| anyhow!("Error creating notification watcher, {e}"))
}
