use super::StorageWatcherConfig;
use crate::{
    service::notification_store::NotificationStore,
    storage::{KeyVersion, KeyVersions},
};
use std::sync::Arc;
use tokio::{
    sync::Notify,
    time::{interval, Interval, MissedTickBehavior},
};

///
/// Detects writes made by other processes sharing the same storage
/// and reports them to the notification store.
///
/// Writes made by this process are reported as well.
///
pub struct StorageWatcher {
    key_versions: Arc<dyn KeyVersions>,
    notification_store: Arc<dyn NotificationStore>,

    interval: Interval,
    versions: Vec<(String, Option<KeyVersion>)>,
}

impl StorageWatcher {
    pub fn new(
        config: StorageWatcherConfig,
        key_versions: Arc<dyn KeyVersions>,
        notification_store: Arc<dyn NotificationStore>,
    ) -> Self {
        let mut interval = interval(config.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let versions = config
            .keys
            .into_iter()
            .map(|key| {
                let version = key_versions.version(&key).unwrap_or_else(|err| {
                    tracing::warn!(%key, %err, "cannot read key version");
                    None
                });
                (key, version)
            })
            .collect();

        Self {
            key_versions,
            notification_store,
            interval,
            versions,
        }
    }

    ///
    /// Compares current versions of watched keys with the last seen ones.
    ///
    /// ### Returns
    /// Number of changed keys
    ///
    pub fn poll(&mut self) -> usize {
        let mut changed_keys = Vec::new();
        let mut removed_keys = 0;

        for (key, last_version) in self.versions.iter_mut() {
            let version = match self.key_versions.version(key) {
                Ok(version) => version,
                Err(err) => {
                    tracing::warn!(%key, %err, "cannot read key version");
                    continue;
                }
            };

            if version != *last_version {
                if version.is_none() {
                    removed_keys += 1;
                }
                *last_version = version;
                changed_keys.push(key.clone());
            }
        }

        if changed_keys.is_empty() {
            return 0;
        }

        if removed_keys == self.versions.len() {
            self.notification_store.handle_storage_cleared();
        } else {
            for key in &changed_keys {
                self.notification_store.handle_storage_change(key);
            }
        }

        changed_keys.len()
    }

    #[tracing::instrument(name = "Storage Watcher", skip_all)]
    pub async fn run(mut self, close_notify: Arc<Notify>) {
        tokio::select! {
            biased;

            // Wait for signal to close
            _ = close_notify.notified() => {},

            // Compare versions on every tick until closed
            _ = async { loop {
                self.interval.tick().await;

                let changed = self.poll();
                if changed > 0 {
                    tracing::debug!(changed, "storage changed");
                }
            }} => {}
        }

        tracing::info!("storage watcher stopped");
    }
}
