pub mod notification_store;
pub mod reminders_poller;
pub mod reminders_service;
pub mod storage_watcher;
