pub const DEFAULT_NOTIFICATIONS_KEY: &str = "pet-care.notifications";
pub const DEFAULT_DEDUPE_KEY: &str = "pet-care.notification-dedupe";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationsRepositoryConfig {
    /// Key holding the notification log
    pub notifications_key: String,
    /// Key holding the dedupe registry
    pub dedupe_key: String,
}

impl Default for NotificationsRepositoryConfig {
    fn default() -> Self {
        Self {
            notifications_key: DEFAULT_NOTIFICATIONS_KEY.to_string(),
            dedupe_key: DEFAULT_DEDUPE_KEY.to_string(),
        }
    }
}
