//!
//! Best-effort OS level popups shown next to stored notifications
//!

mod error;
mod popup_notifier;
mod tracing_popup_notifier;

pub use error::*;
pub use popup_notifier::*;
pub use tracing_popup_notifier::*;
