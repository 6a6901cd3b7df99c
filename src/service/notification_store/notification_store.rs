use super::{Listener, Subscription};
use crate::{
    dto::{
        input::{NewNotification, NotificationFilter},
        output::Notification,
    },
    popup::PopupPermission,
};

///
/// Bounded, deduplicated log of notifications.
///
/// No operation fails: when storage is unavailable or holds malformed
/// data, reads return empty results and writes are skipped.
///
#[cfg_attr(test, mockall::automock)]
pub trait NotificationStore: Send + Sync {
    ///
    /// Finds notifications matching the filter, newest first
    ///
    fn notifications(&self, filter: NotificationFilter) -> Vec<Notification>;

    ///
    /// Adds new unread notification at the front of the log.
    ///
    /// ### Returns
    /// - created notification
    /// - None when
    ///     - dedupe key was already used
    ///     - storage is unavailable
    ///
    fn add(&self, notification: NewNotification) -> Option<Notification>;

    ///
    /// Marks notification as read.
    ///
    /// ### Returns
    /// false when notification does not exist
    ///
    fn mark_read(&self, id: &str) -> bool;

    ///
    /// Marks every notification matching the filter as read.
    ///
    /// ### Returns
    /// Number of notifications that changed
    ///
    fn mark_all_read(&self, filter: NotificationFilter) -> usize;

    ///
    /// Removes notifications matching the filter.
    /// Empty filter removes whole log.
    ///
    /// ### Returns
    /// Number of removed notifications
    ///
    fn clear(&self, filter: NotificationFilter) -> usize;

    fn count_unread(&self, filter: NotificationFilter) -> usize;

    ///
    /// Registers listener called after every change
    ///
    fn subscribe(&self, listener: Listener) -> Subscription;

    ///
    /// Informs the store that another process changed a storage key
    ///
    fn handle_storage_change(&self, key: &str);

    ///
    /// Informs the store that another process cleared the whole storage
    ///
    fn handle_storage_cleared(&self);

    ///
    /// Asks the user for permission to show popups.
    /// This is the only operation that prompts the user.
    ///
    fn request_popup_permission(&self) -> PopupPermission;
}
