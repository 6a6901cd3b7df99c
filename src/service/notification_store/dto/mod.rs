mod notification_store_config;

pub use notification_store_config::*;
