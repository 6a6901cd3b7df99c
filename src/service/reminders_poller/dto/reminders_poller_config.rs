use crate::dto::input::ReminderOptions;
use std::time::Duration;

pub struct RemindersPollerConfig {
    pub poll_interval: Duration,
    pub options: ReminderOptions,
}
