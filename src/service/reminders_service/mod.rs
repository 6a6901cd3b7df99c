mod reminder_bucket;
mod reminders_service;
mod reminders_service_impl;
mod start_time;

pub use reminder_bucket::*;
pub use reminders_service::*;
pub use reminders_service_impl::*;
pub use start_time::*;
