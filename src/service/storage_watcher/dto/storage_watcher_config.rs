use std::time::Duration;

pub struct StorageWatcherConfig {
    pub poll_interval: Duration,
    /// Keys reported to the notification store when they change
    pub keys: Vec<String>,
}
