pub const DEFAULT_MAX_NOTIFICATIONS: usize = 120;
pub const DEFAULT_MAX_DEDUPE_KEYS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationStoreConfig {
    /// Oldest notifications beyond this count are dropped
    pub max_notifications: usize,
    /// Oldest dedupe keys beyond this count are dropped
    pub max_dedupe_keys: usize,
}

impl Default for NotificationStoreConfig {
    fn default() -> Self {
        Self {
            max_notifications: DEFAULT_MAX_NOTIFICATIONS,
            max_dedupe_keys: DEFAULT_MAX_DEDUPE_KEYS,
        }
    }
}
