use super::ApplicationEnv;
use pet_care_notifier::{
    auth,
    clock::{Clock, SystemClock},
    dto::input::{NotificationFilter, ReminderOptions},
    popup::{PopupNotifier, TracingPopupNotifier},
    repository::{
        BookingsRepositoryImpl, NotificationsRepositoryConfig, NotificationsRepositoryImpl,
    },
    service::{
        notification_store::{
            NotificationStore, NotificationStoreConfig, NotificationStoreImpl, Subscription,
        },
        reminders_poller::{RemindersPoller, RemindersPollerConfig},
        reminders_service::RemindersServiceImpl,
        storage_watcher::{StorageWatcher, StorageWatcherConfig},
    },
    storage::FileKeyValueStore,
};
use std::sync::Arc;
use tokio::{sync::Notify, task::JoinHandle};

pub struct ApplicationState {
    pub notification_store: Arc<dyn NotificationStore>,
    /// Notifications shown to the configured account
    pub notification_filter: NotificationFilter,
}

pub struct ApplicationStateToClose {
    pub poller_close_notify: Arc<Notify>,
    pub poller_handle: JoinHandle<()>,
    pub watcher_close_notify: Arc<Notify>,
    pub watcher_handle: JoinHandle<()>,
    pub subscription: Subscription,
}

pub fn create_state(
    env: &ApplicationEnv,
    clock: SystemClock,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    let clock: Arc<dyn Clock> = Arc::new(clock);

    tracing::info!(data_directory = %env.data_directory.display(), "opening storage");
    let key_value_store = FileKeyValueStore::new(&env.data_directory)?;
    let key_value_store = Arc::new(key_value_store);

    tracing::info!("creating repositories");
    let repository_config = NotificationsRepositoryConfig::default();
    let watched_keys = vec![
        repository_config.notifications_key.clone(),
        repository_config.dedupe_key.clone(),
    ];
    let notifications_repository =
        NotificationsRepositoryImpl::new(repository_config, key_value_store.clone());
    let notifications_repository = Arc::new(notifications_repository);

    let bookings_repository = BookingsRepositoryImpl::new(&env.bookings_file);
    let bookings_repository = Arc::new(bookings_repository);

    tracing::info!("creating services");
    let popup_notifier = TracingPopupNotifier::new(env.popup_permission);
    let popup_notifier: Arc<dyn PopupNotifier> = Arc::new(popup_notifier);

    let notification_store = NotificationStoreImpl::new(
        NotificationStoreConfig::default(),
        notifications_repository,
        popup_notifier,
        Arc::clone(&clock),
    );
    let notification_store: Arc<dyn NotificationStore> = Arc::new(notification_store);

    let permission = notification_store.request_popup_permission();
    tracing::info!(%permission, "popup permission");

    let notification_filter = auth::notification_filter_for(env.role, env.provider_type);
    let weak_store = Arc::downgrade(&notification_store);
    let subscription = notification_store.subscribe(Arc::new(move || {
        if let Some(store) = weak_store.upgrade() {
            let unread = store.count_unread(notification_filter);
            tracing::info!(unread, "notifications changed");
        }
    }));

    let reminders_service =
        RemindersServiceImpl::new(Arc::clone(&notification_store), Arc::clone(&clock));
    let reminders_service = Arc::new(reminders_service);

    let options = ReminderOptions {
        audience: auth::audience_for(env.role),
        provider_type: env.provider_type,
        statuses: env.statuses.clone(),
        service_label: None,
        link: None,
    };
    let config = RemindersPollerConfig {
        poll_interval: env.poll_interval,
        options,
    };
    let poller = RemindersPoller::new(config, bookings_repository, reminders_service);

    let poller_close_notify = Arc::new(Notify::new());
    let poller_handle = tokio::spawn(poller.run(Arc::clone(&poller_close_notify)));

    let config = StorageWatcherConfig {
        poll_interval: env.watch_interval,
        keys: watched_keys,
    };
    let watcher = StorageWatcher::new(config, key_value_store, Arc::clone(&notification_store));

    let watcher_close_notify = Arc::new(Notify::new());
    let watcher_handle = tokio::spawn(watcher.run(Arc::clone(&watcher_close_notify)));

    Ok((
        ApplicationState {
            notification_store,
            notification_filter,
        },
        ApplicationStateToClose {
            poller_close_notify,
            poller_handle,
            watcher_close_notify,
            watcher_handle,
            subscription,
        },
    ))
}
