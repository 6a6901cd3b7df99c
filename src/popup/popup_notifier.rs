use super::Error;
use strum::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PopupPermission {
    /// User has not decided yet
    Default,
    Granted,
    Denied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub body: String,
    pub tag: String,
}

#[cfg_attr(test, mockall::automock)]
pub trait PopupNotifier: Send + Sync {
    ///
    /// Current permission, never prompts the user
    ///
    fn permission(&self) -> PopupPermission;

    ///
    /// Asks the user for permission to show popups
    ///
    fn request_permission(&self) -> PopupPermission;

    ///
    /// Shows popup.
    ///
    /// ### Errors
    /// - [Error::PermissionDenied] when permission is not granted
    /// - [Error::Unsupported] when host cannot show popups
    /// - [Error::Display] when host failed to show popup
    ///
    fn show(&self, popup: &Popup) -> Result<(), Error>;
}
