use crate::dto::input::{Booking, ReminderOptions};

#[cfg_attr(test, mockall::automock)]
pub trait RemindersService: Send + Sync {
    ///
    /// Creates "upcoming appointment" notifications for bookings
    /// starting within the next 24 hours.
    ///
    /// Every booking gets at most one reminder per [ReminderBucket](super::ReminderBucket)
    /// and audience, no matter how many times this is called.
    ///
    /// ### Returns
    /// Number of newly created notifications
    ///
    fn generate(&self, bookings: &[Booking], options: &ReminderOptions) -> usize;
}
