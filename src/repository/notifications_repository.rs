use super::{DedupeRegistry, Error};
use crate::dto::output::Notification;

#[cfg_attr(test, mockall::automock)]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Finds stored notifications, newest first.
    /// Malformed stored log is treated as an empty log.
    ///
    fn find_all(&self) -> Result<Vec<Notification>, Error>;

    ///
    /// Replaces stored notifications
    ///
    fn save_all(&self, notifications: &[Notification]) -> Result<(), Error>;

    ///
    /// Removes stored log entirely
    ///
    fn delete_all(&self) -> Result<(), Error>;

    ///
    /// Finds dedupe registry.
    /// Malformed stored registry is treated as an empty registry.
    ///
    fn find_dedupe_registry(&self) -> Result<DedupeRegistry, Error>;

    ///
    /// Replaces stored dedupe registry
    ///
    fn save_dedupe_registry(&self, registry: &DedupeRegistry) -> Result<(), Error>;

    ///
    /// Whether a change of the storage key affects this repository
    ///
    fn owns_key(&self, key: &str) -> bool;
}
