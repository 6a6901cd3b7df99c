use super::Error;
use crate::dto::input::Booking;

#[cfg_attr(test, mockall::automock)]
pub trait BookingsRepository: Send + Sync {
    ///
    /// Finds bookings reminders should be generated for
    ///
    fn find_all(&self) -> Result<Vec<Booking>, Error>;
}
