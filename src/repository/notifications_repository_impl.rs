use super::{
    entity::DedupeRegistryEntity, DedupeRegistry, Error, NotificationsRepository,
    NotificationsRepositoryConfig,
};
use crate::{dto::output::Notification, storage::KeyValueStore};
use std::sync::Arc;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

pub struct NotificationsRepositoryImpl {
    config: NotificationsRepositoryConfig,
    store: Arc<dyn KeyValueStore>,
}

impl NotificationsRepositoryImpl {
    pub fn new(config: NotificationsRepositoryConfig, store: Arc<dyn KeyValueStore>) -> Self {
        Self { config, store }
    }
}

impl NotificationsRepository for NotificationsRepositoryImpl {
    fn find_all(&self) -> Result<Vec<Notification>, Error> {
        let Some(json) = self.store.get(&self.config.notifications_key)? else {
            return Ok(Vec::new());
        };

        let entries = match serde_json::from_str::<Vec<serde_json::Value>>(&json) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(%err, "stored notifications malformed, treating as empty");
                return Ok(Vec::new());
            }
        };

        let notifications = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<Notification>(entry) {
                Ok(notification) => Some(notification),
                Err(err) => {
                    tracing::warn!(%err, "dropping malformed notification");
                    None
                }
            })
            .collect();

        Ok(notifications)
    }

    fn save_all(&self, notifications: &[Notification]) -> Result<(), Error> {
        let json = serde_json::to_string(notifications)?;
        self.store.set(&self.config.notifications_key, &json)?;

        Ok(())
    }

    fn delete_all(&self) -> Result<(), Error> {
        self.store.remove(&self.config.notifications_key)?;

        Ok(())
    }

    fn find_dedupe_registry(&self) -> Result<DedupeRegistry, Error> {
        let Some(json) = self.store.get(&self.config.dedupe_key)? else {
            return Ok(DedupeRegistry::new());
        };

        let entity = match serde_json::from_str::<DedupeRegistryEntity>(&json) {
            Ok(entity) => entity,
            Err(err) => {
                tracing::warn!(%err, "stored dedupe registry malformed, treating as empty");
                return Ok(DedupeRegistry::new());
            }
        };

        let registry = entity
            .entries
            .into_iter()
            .filter_map(|(key, at)| match OffsetDateTime::parse(&at, &Rfc3339) {
                Ok(at) => Some((key, at)),
                Err(err) => {
                    tracing::warn!(key, %err, "dropping dedupe entry with malformed timestamp");
                    None
                }
            })
            .collect();

        Ok(registry)
    }

    fn save_dedupe_registry(&self, registry: &DedupeRegistry) -> Result<(), Error> {
        let mut entity = DedupeRegistryEntity::default();
        for (key, at) in registry.iter() {
            let at = at
                .format(&Rfc3339)
                .map_err(|err| Error::Serialization(serde::ser::Error::custom(err)))?;
            entity.entries.insert(key.to_string(), at);
        }

        let json = serde_json::to_string(&entity)?;
        self.store.set(&self.config.dedupe_key, &json)?;

        Ok(())
    }

    fn owns_key(&self, key: &str) -> bool {
        key == self.config.notifications_key || key == self.config.dedupe_key
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        dto::{Audience, NotificationType},
        repository::{DEFAULT_DEDUPE_KEY, DEFAULT_NOTIFICATIONS_KEY},
        storage::{self, MemoryKeyValueStore, MockKeyValueStore},
    };
    use time::macros::datetime;

    fn repository(store: Arc<dyn KeyValueStore>) -> NotificationsRepositoryImpl {
        NotificationsRepositoryImpl::new(NotificationsRepositoryConfig::default(), store)
    }

    fn notification(id: &str) -> Notification {
        Notification {
            id: id.to_string(),
            title: "Order shipped".to_string(),
            message: "Your order is on its way".to_string(),
            created_at: datetime!(2026-10-17 10:00 UTC),
            notification_type: NotificationType::Order,
            audience: Audience::User,
            provider_type: None,
            read: false,
            link: Some("/orders".to_string()),
        }
    }

    #[test]
    fn find_all_empty_store() {
        let repository = repository(Arc::new(MemoryKeyValueStore::new()));

        let notifications = repository.find_all().unwrap();

        assert!(notifications.is_empty());
    }

    #[test]
    fn save_all_then_find_all_keeps_order() {
        let repository = repository(Arc::new(MemoryKeyValueStore::new()));
        let notifications = vec![notification("2"), notification("1")];

        repository.save_all(&notifications).unwrap();

        assert_eq!(repository.find_all().unwrap(), notifications);
    }

    #[test]
    fn find_all_malformed_json_is_empty() {
        let store = Arc::new(MemoryKeyValueStore::new());
        store.set(DEFAULT_NOTIFICATIONS_KEY, "not json {").unwrap();
        let repository = repository(store);

        let notifications = repository.find_all().unwrap();

        assert!(notifications.is_empty());
    }

    #[test]
    fn find_all_drops_only_malformed_entries() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let repository = repository(store.clone());
        repository
            .save_all(&[notification("a"), notification("c")])
            .unwrap();
        let json = store.get(DEFAULT_NOTIFICATIONS_KEY).unwrap().unwrap();
        let mut entries = serde_json::from_str::<Vec<serde_json::Value>>(&json).unwrap();
        let mut promo = entries[0].clone();
        promo["id"] = "b".into();
        promo["type"] = "promo".into();
        entries.insert(1, promo);
        entries.push(serde_json::json!({ "id": "d", "title": "missing fields" }));
        store
            .set(DEFAULT_NOTIFICATIONS_KEY, &serde_json::to_string(&entries).unwrap())
            .unwrap();

        let notifications = repository.find_all().unwrap();

        assert_eq!(notifications, vec![notification("a"), notification("c")]);
    }

    #[test]
    fn find_all_storage_unavailable() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .returning(|_| Err(storage::Error::Unavailable));
        let repository = repository(Arc::new(store));

        let result = repository.find_all();

        assert!(matches!(
            result,
            Err(Error::Storage(storage::Error::Unavailable))
        ));
    }

    #[test]
    fn dedupe_registry_persisted_as_key_timestamp_map() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let repository = repository(store.clone());
        let mut registry = DedupeRegistry::new();
        registry.register("upcoming:user:b1:30", datetime!(2026-10-17 10:00 UTC));

        repository.save_dedupe_registry(&registry).unwrap();

        let json = store.get(DEFAULT_DEDUPE_KEY).unwrap().unwrap();
        assert_eq!(json, r#"{"upcoming:user:b1:30":"2026-10-17T10:00:00Z"}"#);
        assert_eq!(repository.find_dedupe_registry().unwrap(), registry);
    }

    #[test]
    fn dedupe_registry_malformed_timestamp_dropped() {
        let store = Arc::new(MemoryKeyValueStore::new());
        store
            .set(
                DEFAULT_DEDUPE_KEY,
                r#"{"good":"2026-10-17T10:00:00.000Z","bad":"yesterday"}"#,
            )
            .unwrap();
        let repository = repository(store);

        let registry = repository.find_dedupe_registry().unwrap();

        assert!(registry.contains("good"));
        assert!(!registry.contains("bad"));
    }

    #[test]
    fn dedupe_registry_malformed_json_is_empty() {
        let store = Arc::new(MemoryKeyValueStore::new());
        store.set(DEFAULT_DEDUPE_KEY, "[1, 2").unwrap();
        let repository = repository(store);

        let registry = repository.find_dedupe_registry().unwrap();

        assert!(registry.is_empty());
    }

    #[test]
    fn owns_only_configured_keys() {
        let repository = repository(Arc::new(MemoryKeyValueStore::new()));

        assert!(repository.owns_key(DEFAULT_NOTIFICATIONS_KEY));
        assert!(repository.owns_key(DEFAULT_DEDUPE_KEY));
        assert!(!repository.owns_key("theme"));
    }
}
