use crate::dto::{Audience, NotificationType, ProviderType};
use time::OffsetDateTime;

///
/// Notification to be added to the store.
///
/// Only `title` and `message` are required, see [NewNotification::new].
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNotification {
    /// Generated when not supplied
    pub id: Option<String>,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub audience: Audience,
    pub provider_type: Option<ProviderType>,
    pub link: Option<String>,
    /// Notification is created only once for the same key
    pub dedupe_key: Option<String>,
    /// Defaults to current time
    pub created_at: Option<OffsetDateTime>,
    /// Also request an OS level popup
    pub push_to_browser: bool,
}

impl NewNotification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn notification_type(mut self, notification_type: NotificationType) -> Self {
        self.notification_type = notification_type;
        self
    }

    pub fn audience(mut self, audience: Audience) -> Self {
        self.audience = audience;
        self
    }

    pub fn provider_type(mut self, provider_type: ProviderType) -> Self {
        self.provider_type = Some(provider_type);
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn dedupe_key(mut self, dedupe_key: impl Into<String>) -> Self {
        self.dedupe_key = Some(dedupe_key.into());
        self
    }

    pub fn push_to_browser(mut self) -> Self {
        self.push_to_browser = true;
        self
    }
}
