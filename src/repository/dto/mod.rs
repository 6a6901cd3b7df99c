mod dedupe_registry;
mod notifications_repository_config;

pub use dedupe_registry::*;
pub use notifications_repository_config::*;
