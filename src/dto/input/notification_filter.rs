use crate::dto::{output::Notification, Audience, ProviderType};

///
/// Selects notifications for reading, counting, marking and clearing.
///
/// A notification addressed to `all` matches every audience filter.
/// A `provider_type` filter only narrows provider notifications
/// that carry a provider type.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationFilter {
    pub audience: Option<Audience>,
    pub provider_type: Option<ProviderType>,
}

impl NotificationFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn audience(audience: Audience) -> Self {
        Self {
            audience: Some(audience),
            provider_type: None,
        }
    }

    pub fn provider(provider_type: ProviderType) -> Self {
        Self {
            audience: Some(Audience::Provider),
            provider_type: Some(provider_type),
        }
    }

    pub fn with_provider_type(mut self, provider_type: ProviderType) -> Self {
        self.provider_type = Some(provider_type);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.audience.is_none() && self.provider_type.is_none()
    }

    pub fn matches(&self, notification: &Notification) -> bool {
        self.matches_audience(notification) && self.matches_provider_type(notification)
    }

    fn matches_audience(&self, notification: &Notification) -> bool {
        match self.audience {
            None | Some(Audience::All) => true,
            Some(audience) => {
                notification.audience == Audience::All || notification.audience == audience
            }
        }
    }

    fn matches_provider_type(&self, notification: &Notification) -> bool {
        let Some(provider_type) = self.provider_type else {
            return true;
        };
        if notification.audience != Audience::Provider {
            return true;
        }

        match notification.provider_type {
            None => true,
            Some(notification_provider_type) => notification_provider_type == provider_type,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dto::NotificationType;
    use time::OffsetDateTime;

    fn notification(audience: Audience, provider_type: Option<ProviderType>) -> Notification {
        Notification {
            id: "1".to_string(),
            title: "title".to_string(),
            message: "message".to_string(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            notification_type: NotificationType::General,
            audience,
            provider_type,
            read: false,
            link: None,
        }
    }

    #[test]
    fn vet_notification_visibility() {
        let vet = notification(Audience::Provider, Some(ProviderType::Vet));

        assert!(NotificationFilter::provider(ProviderType::Vet).matches(&vet));
        assert!(NotificationFilter::audience(Audience::Provider).matches(&vet));
        assert!(NotificationFilter::audience(Audience::All).matches(&vet));
        assert!(NotificationFilter::all().matches(&vet));
        assert!(!NotificationFilter::provider(ProviderType::Shop).matches(&vet));
        assert!(!NotificationFilter::audience(Audience::User).matches(&vet));
    }

    #[test]
    fn all_audience_matches_every_filter() {
        let broadcast = notification(Audience::All, None);

        assert!(NotificationFilter::audience(Audience::User).matches(&broadcast));
        assert!(NotificationFilter::provider(ProviderType::Shop).matches(&broadcast));
    }

    #[test]
    fn provider_notification_without_type_matches_any_provider_type() {
        let provider = notification(Audience::Provider, None);

        assert!(NotificationFilter::provider(ProviderType::Babysitter).matches(&provider));
    }

    #[test]
    fn provider_type_ignored_for_user_notifications() {
        // provider type on a user notification does not narrow it
        let user = notification(Audience::User, Some(ProviderType::Vet));

        let filter =
            NotificationFilter::audience(Audience::User).with_provider_type(ProviderType::Shop);

        assert!(filter.matches(&user));
    }

    #[test]
    fn provider_type_without_audience() {
        let vet = notification(Audience::Provider, Some(ProviderType::Vet));
        let filter = NotificationFilter {
            audience: None,
            provider_type: Some(ProviderType::Shop),
        };

        assert!(!filter.matches(&vet));
    }
}
