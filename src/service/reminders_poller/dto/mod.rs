mod reminders_poller_config;

pub use reminders_poller_config::*;
