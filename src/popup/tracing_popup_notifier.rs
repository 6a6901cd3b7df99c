use super::{Error, Popup, PopupNotifier, PopupPermission};
use std::sync::{Mutex, PoisonError};

///
/// Headless popup notifier that emits popups as log events.
///
/// Permission requests resolve to the permission the notifier was
/// configured with, unless the user has already decided.
///
pub struct TracingPopupNotifier {
    permission: Mutex<PopupPermission>,
    requested_permission: PopupPermission,
}

impl TracingPopupNotifier {
    pub fn new(requested_permission: PopupPermission) -> Self {
        Self {
            permission: Mutex::new(PopupPermission::Default),
            requested_permission,
        }
    }
}

impl PopupNotifier for TracingPopupNotifier {
    fn permission(&self) -> PopupPermission {
        *self.permission.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn request_permission(&self) -> PopupPermission {
        let mut permission = self.permission.lock().unwrap_or_else(PoisonError::into_inner);
        if *permission == PopupPermission::Default {
            *permission = self.requested_permission;
            tracing::info!(permission = %*permission, "popup permission decided");
        }

        *permission
    }

    fn show(&self, popup: &Popup) -> Result<(), Error> {
        if self.permission() != PopupPermission::Granted {
            return Err(Error::PermissionDenied);
        }

        tracing::info!(
            title = %popup.title,
            body = %popup.body,
            tag = %popup.tag,
            "popup"
        );

        Ok(())
    }
}
