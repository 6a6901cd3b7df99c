mod booking;
mod new_notification;
mod notification_filter;
mod reminder_options;

pub use booking::*;
pub use new_notification::*;
pub use notification_filter::*;
pub use reminder_options::*;
