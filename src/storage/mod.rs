//!
//! String-keyed blob storage the engine persists its state into
//!

mod error;
mod file_key_value_store;
mod key_value_store;
mod key_versions;
mod memory_key_value_store;

pub use error::*;
pub use file_key_value_store::*;
pub use key_value_store::*;
pub use key_versions::*;
pub use memory_key_value_store::*;
