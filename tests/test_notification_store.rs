mod common;
pub use common::*;

use pet_care_notifier::{
    dto::{
        input::{NewNotification, NotificationFilter},
        Audience, ProviderType,
    },
    repository::DEFAULT_NOTIFICATIONS_KEY,
    storage::KeyValueStore,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

fn add_for(engine: &Engine, title: &str, audience: Audience, provider: Option<ProviderType>) {
    let mut notification = NewNotification::new(title, "message").audience(audience);
    notification.provider_type = provider;

    engine.notification_store.add(notification).unwrap();
}

#[test]
fn filters_select_matching_notifications() {
    let engine = engine();
    add_for(&engine, "user", Audience::User, None);
    add_for(&engine, "vet", Audience::Provider, Some(ProviderType::Vet));
    add_for(&engine, "shop", Audience::Provider, Some(ProviderType::Shop));
    add_for(&engine, "everyone", Audience::All, None);
    add_for(&engine, "all providers", Audience::Provider, None);

    let titles = |filter: NotificationFilter| {
        engine
            .notification_store
            .notifications(filter)
            .into_iter()
            .map(|notification| notification.title)
            .collect::<Vec<_>>()
    };

    assert_eq!(titles(NotificationFilter::all()).len(), 5);
    assert_eq!(titles(NotificationFilter::audience(Audience::User)), ["everyone", "user"]);
    assert_eq!(
        titles(NotificationFilter::provider(ProviderType::Vet)),
        ["all providers", "everyone", "vet"]
    );
    assert_eq!(
        titles(NotificationFilter::provider(ProviderType::Shop)),
        ["all providers", "everyone", "shop"]
    );
}

#[test]
fn log_keeps_newest_entries() {
    let engine = engine();

    for i in 0..130 {
        let notification = NewNotification::new(format!("n{i}"), "message");
        engine.notification_store.add(notification).unwrap();
    }

    let notifications = engine.notification_store.notifications(NotificationFilter::all());
    assert_eq!(notifications.len(), 120);
    assert_eq!(notifications[0].title, "n129");
    assert_eq!(notifications[119].title, "n10");
}

#[test]
fn dedupe_key_used_once() {
    let engine = engine();
    let notification = NewNotification::new("title", "message").dedupe_key("key");

    let first = engine.notification_store.add(notification.clone());
    let second = engine.notification_store.add(notification);

    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(
        engine
            .notification_store
            .notifications(NotificationFilter::all())
            .len(),
        1
    );
}

#[test]
fn mark_all_read_is_scoped() {
    let engine = engine();
    add_for(&engine, "user", Audience::User, None);
    add_for(&engine, "vet", Audience::Provider, Some(ProviderType::Vet));
    add_for(&engine, "everyone", Audience::All, None);

    let changed = engine
        .notification_store
        .mark_all_read(NotificationFilter::provider(ProviderType::Vet));

    assert_eq!(changed, 2);
    assert_eq!(
        engine
            .notification_store
            .count_unread(NotificationFilter::audience(Audience::User)),
        1
    );
    assert_eq!(
        engine
            .notification_store
            .count_unread(NotificationFilter::all()),
        1
    );
}

#[test]
fn mark_read_and_clear() {
    let engine = engine();
    let notification = engine
        .notification_store
        .add(NewNotification::new("title", "message"))
        .unwrap();
    add_for(&engine, "user", Audience::User, None);

    assert!(engine.notification_store.mark_read(&notification.id));
    assert!(!engine.notification_store.mark_read("missing"));
    assert_eq!(
        engine
            .notification_store
            .count_unread(NotificationFilter::all()),
        1
    );

    let removed = engine
        .notification_store
        .clear(NotificationFilter::audience(Audience::User));
    assert_eq!(removed, 1);

    let removed = engine.notification_store.clear(NotificationFilter::all());
    assert_eq!(removed, 1);
    assert!(engine
        .notification_store
        .notifications(NotificationFilter::all())
        .is_empty());
}

#[test]
fn corrupt_storage_reads_as_empty() {
    let engine = engine();
    engine
        .key_value_store
        .set(DEFAULT_NOTIFICATIONS_KEY, "{not json")
        .unwrap();

    assert!(engine
        .notification_store
        .notifications(NotificationFilter::all())
        .is_empty());
    assert_eq!(
        engine
            .notification_store
            .count_unread(NotificationFilter::all()),
        0
    );

    let added = engine
        .notification_store
        .add(NewNotification::new("title", "message"));
    assert!(added.is_some());
    assert_eq!(
        engine
            .notification_store
            .notifications(NotificationFilter::all())
            .len(),
        1
    );
}

#[test]
fn unknown_entry_does_not_wipe_log() {
    let engine = engine();
    add_for(&engine, "a", Audience::User, None);
    add_for(&engine, "c", Audience::User, None);
    let json = engine
        .key_value_store
        .get(DEFAULT_NOTIFICATIONS_KEY)
        .unwrap()
        .unwrap();
    let mut entries = serde_json::from_str::<Vec<serde_json::Value>>(&json).unwrap();
    let mut promo = entries[0].clone();
    promo["id"] = "promo".into();
    promo["type"] = "promo".into();
    entries.insert(1, promo);
    engine
        .key_value_store
        .set(DEFAULT_NOTIFICATIONS_KEY, &serde_json::to_string(&entries).unwrap())
        .unwrap();

    add_for(&engine, "new", Audience::User, None);

    let titles = engine
        .notification_store
        .notifications(NotificationFilter::all())
        .into_iter()
        .map(|notification| notification.title)
        .collect::<Vec<_>>();
    assert_eq!(titles, ["new", "c", "a"]);
}

#[test]
fn unavailable_storage_degrades() {
    let engine = engine_with_store(Arc::new(UnavailableStore));

    let added = engine
        .notification_store
        .add(NewNotification::new("title", "message").dedupe_key("key"));

    assert!(added.is_none());
    assert!(engine
        .notification_store
        .notifications(NotificationFilter::all())
        .is_empty());
    assert!(!engine.notification_store.mark_read("id"));
    assert_eq!(engine.notification_store.mark_all_read(NotificationFilter::all()), 0);
    assert_eq!(engine.notification_store.clear(NotificationFilter::all()), 0);
}

#[test]
fn listeners_follow_changes() {
    let engine = engine();
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&calls);
    let subscription = engine.notification_store.subscribe(Arc::new(move || {
        calls_clone.fetch_add(1, Ordering::SeqCst);
    }));

    add_for(&engine, "user", Audience::User, None);
    engine.notification_store.handle_storage_change(DEFAULT_NOTIFICATIONS_KEY);
    engine.notification_store.handle_storage_change("unrelated");
    engine.notification_store.handle_storage_cleared();
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    drop(subscription);
    add_for(&engine, "user", Audience::User, None);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
