mod change_listeners;
mod dto;
mod notification_store;
mod notification_store_impl;

pub use change_listeners::*;
pub use dto::NotificationStoreConfig;
pub use notification_store::*;
pub use notification_store_impl::*;
