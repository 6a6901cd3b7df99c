use super::{ChangeListeners, Listener, NotificationStore, NotificationStoreConfig, Subscription};
use crate::{
    clock::Clock,
    dto::{
        input::{NewNotification, NotificationFilter},
        output::Notification,
    },
    popup::{Popup, PopupNotifier, PopupPermission},
    repository::NotificationsRepository,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use time::OffsetDateTime;
use uuid::Uuid;

pub struct NotificationStoreImpl {
    config: NotificationStoreConfig,
    repository: Arc<dyn NotificationsRepository>,
    popup_notifier: Arc<dyn PopupNotifier>,
    clock: Arc<dyn Clock>,
    listeners: ChangeListeners,

    // Serializes read-modify-write cycles within the process
    write_lock: Mutex<()>,
}

impl NotificationStoreImpl {
    pub fn new(
        config: NotificationStoreConfig,
        repository: Arc<dyn NotificationsRepository>,
        popup_notifier: Arc<dyn PopupNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            repository,
            popup_notifier,
            clock,
            listeners: ChangeListeners::new(),
            write_lock: Mutex::new(()),
        }
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self) -> Option<Vec<Notification>> {
        match self.repository.find_all() {
            Ok(notifications) => Some(notifications),
            Err(err) => {
                tracing::warn!(%err, "cannot read notifications");
                None
            }
        }
    }

    fn save(&self, notifications: &[Notification]) -> bool {
        match self.repository.save_all(notifications) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "cannot save notifications");
                false
            }
        }
    }

    ///
    /// Registers dedupe key.
    ///
    /// ### Returns
    /// false when key was already registered or registry cannot be saved
    ///
    fn register_dedupe_key(&self, dedupe_key: &str, now: OffsetDateTime) -> bool {
        let mut registry = match self.repository.find_dedupe_registry() {
            Ok(registry) => registry,
            Err(err) => {
                tracing::warn!(%err, "cannot read dedupe registry");
                return false;
            }
        };

        if registry.contains(dedupe_key) {
            tracing::debug!("notification already created for dedupe key");
            return false;
        }

        registry.register(dedupe_key, now);
        let removed_entries = registry.trim(self.config.max_dedupe_keys);
        if removed_entries > 0 {
            tracing::debug!(removed_entries, "trimmed dedupe registry");
        }

        match self.repository.save_dedupe_registry(&registry) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "cannot save dedupe registry");
                false
            }
        }
    }

    fn show_popup(&self, notification: &Notification) {
        let permission = self.popup_notifier.permission();
        if permission != PopupPermission::Granted {
            tracing::trace!(%permission, "popup skipped");
            return;
        }

        let popup = Popup {
            title: notification.title.clone(),
            body: notification.message.clone(),
            tag: notification.id.clone(),
        };
        if let Err(err) = self.popup_notifier.show(&popup) {
            tracing::debug!(%err, "popup not shown");
        }
    }

    fn generate_id(now: OffsetDateTime) -> String {
        let millis = now.unix_timestamp_nanos() / 1_000_000;
        let suffix = Uuid::new_v4().simple().to_string();

        format!("{millis}-{}", &suffix[..8])
    }
}

impl NotificationStore for NotificationStoreImpl {
    fn notifications(&self, filter: NotificationFilter) -> Vec<Notification> {
        self.load()
            .unwrap_or_default()
            .into_iter()
            .filter(|notification| filter.matches(notification))
            .collect()
    }

    #[tracing::instrument(
        name = "Add notification",
        skip_all,
        fields(
            dedupe_key = notification.dedupe_key.as_deref(),
        )
    )]
    fn add(&self, notification: NewNotification) -> Option<Notification> {
        let NewNotification {
            id,
            title,
            message,
            notification_type,
            audience,
            provider_type,
            link,
            dedupe_key,
            created_at,
            push_to_browser,
        } = notification;

        let now = self.clock.now();
        let notification = {
            let _guard = self.lock_writes();

            if let Some(dedupe_key) = &dedupe_key {
                if !self.register_dedupe_key(dedupe_key, now) {
                    return None;
                }
            }

            let mut notifications = self.load()?;
            let notification = Notification {
                id: id.unwrap_or_else(|| Self::generate_id(now)),
                title,
                message,
                created_at: created_at.unwrap_or(now),
                notification_type,
                audience,
                provider_type,
                read: false,
                link,
            };

            notifications.insert(0, notification.clone());
            notifications.truncate(self.config.max_notifications);
            if !self.save(&notifications) {
                return None;
            }

            notification
        };

        tracing::debug!(id = notification.id, "added notification");
        self.listeners.notify();

        if push_to_browser {
            self.show_popup(&notification);
        }

        Some(notification)
    }

    fn mark_read(&self, id: &str) -> bool {
        {
            let _guard = self.lock_writes();

            let Some(mut notifications) = self.load() else {
                return false;
            };
            let Some(notification) = notifications
                .iter_mut()
                .find(|notification| notification.id == id)
            else {
                tracing::debug!(id, "notification to mark read not found");
                return false;
            };

            if notification.read {
                return true;
            }
            notification.read = true;

            if !self.save(&notifications) {
                return false;
            }
        }

        self.listeners.notify();
        true
    }

    fn mark_all_read(&self, filter: NotificationFilter) -> usize {
        let changed = {
            let _guard = self.lock_writes();

            let Some(mut notifications) = self.load() else {
                return 0;
            };
            let mut changed = 0;
            for notification in notifications
                .iter_mut()
                .filter(|notification| !notification.read && filter.matches(notification))
            {
                notification.read = true;
                changed += 1;
            }

            if changed == 0 || !self.save(&notifications) {
                return 0;
            }

            changed
        };

        tracing::debug!(changed, "marked notifications read");
        self.listeners.notify();
        changed
    }

    fn clear(&self, filter: NotificationFilter) -> usize {
        let removed = {
            let _guard = self.lock_writes();

            let Some(mut notifications) = self.load() else {
                return 0;
            };

            if filter.is_empty() {
                if let Err(err) = self.repository.delete_all() {
                    tracing::warn!(%err, "cannot delete notifications");
                    return 0;
                }

                notifications.len()
            } else {
                let len_before = notifications.len();
                notifications.retain(|notification| !filter.matches(notification));
                let removed = len_before - notifications.len();

                if removed == 0 || !self.save(&notifications) {
                    return 0;
                }

                removed
            }
        };

        tracing::debug!(removed, "cleared notifications");
        self.listeners.notify();
        removed
    }

    fn count_unread(&self, filter: NotificationFilter) -> usize {
        self.load()
            .unwrap_or_default()
            .iter()
            .filter(|notification| !notification.read && filter.matches(notification))
            .count()
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.listeners.subscribe(listener)
    }

    fn handle_storage_change(&self, key: &str) {
        if self.repository.owns_key(key) {
            tracing::trace!(key, "storage changed externally");
            self.listeners.notify();
        }
    }

    fn handle_storage_cleared(&self) {
        tracing::trace!("storage cleared externally");
        self.listeners.notify();
    }

    fn request_popup_permission(&self) -> PopupPermission {
        self.popup_notifier.request_permission()
    }
}
