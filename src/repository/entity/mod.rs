mod dedupe_registry_entity;

pub use dedupe_registry_entity::*;
