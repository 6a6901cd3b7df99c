//!
//! Module with all dtos passed between the engine and its callers
//!

mod audience;
mod notification_type;
mod provider_type;

pub mod input;
pub mod output;

pub use audience::*;
pub use notification_type::*;
pub use provider_type::*;
