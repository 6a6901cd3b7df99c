#![allow(dead_code)]

use pet_care_notifier::{
    clock::Clock,
    dto::input::Booking,
    popup::{PopupNotifier, PopupPermission, TracingPopupNotifier},
    repository::{NotificationsRepositoryConfig, NotificationsRepositoryImpl},
    service::{
        notification_store::{NotificationStore, NotificationStoreConfig, NotificationStoreImpl},
        reminders_service::RemindersServiceImpl,
    },
    storage::{self, KeyValueStore, MemoryKeyValueStore},
};
use std::sync::{Arc, Mutex};
use time::{
    format_description::well_known::Rfc3339, macros::datetime, Duration, OffsetDateTime,
    UtcOffset,
};

pub const NOW: OffsetDateTime = datetime!(2026-10-17 10:00 UTC);

pub struct FixedClock {
    now: Mutex<OffsetDateTime>,
}

impl FixedClock {
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, duration: Duration) {
        *self.now.lock().unwrap() += duration;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock().unwrap()
    }

    fn local_offset(&self) -> UtcOffset {
        UtcOffset::UTC
    }
}

pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, storage::Error> {
        Err(storage::Error::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), storage::Error> {
        Err(storage::Error::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), storage::Error> {
        Err(storage::Error::Unavailable)
    }
}

pub struct Engine {
    pub key_value_store: Arc<dyn KeyValueStore>,
    pub clock: Arc<FixedClock>,
    pub notification_store: Arc<dyn NotificationStore>,
    pub reminders_service: RemindersServiceImpl,
}

pub fn engine() -> Engine {
    engine_with_store(Arc::new(MemoryKeyValueStore::new()))
}

pub fn engine_with_store(key_value_store: Arc<dyn KeyValueStore>) -> Engine {
    let clock = Arc::new(FixedClock::new(NOW));
    let repository = NotificationsRepositoryImpl::new(
        NotificationsRepositoryConfig::default(),
        Arc::clone(&key_value_store),
    );
    let popup_notifier: Arc<dyn PopupNotifier> =
        Arc::new(TracingPopupNotifier::new(PopupPermission::Denied));
    let notification_store: Arc<dyn NotificationStore> = Arc::new(NotificationStoreImpl::new(
        NotificationStoreConfig::default(),
        Arc::new(repository),
        popup_notifier,
        Arc::clone(&clock) as Arc<dyn Clock>,
    ));
    let reminders_service = RemindersServiceImpl::new(
        Arc::clone(&notification_store),
        Arc::clone(&clock) as Arc<dyn Clock>,
    );

    Engine {
        key_value_store,
        clock,
        notification_store,
        reminders_service,
    }
}

pub fn booking(id: &str, status: &str, start_time: OffsetDateTime) -> Booking {
    Booking {
        object_id: Some(id.to_string()),
        status: Some(status.to_string()),
        start_time: Some(start_time.format(&Rfc3339).unwrap()),
        ..Default::default()
    }
}

pub fn confirmed_in(id: &str, minutes: i64) -> Booking {
    booking(id, "confirmed", NOW + Duration::minutes(minutes))
}
