mod dto;
mod reminders_poller;

pub use dto::RemindersPollerConfig;
pub use reminders_poller::*;
