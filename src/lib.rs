//!
//! Client-local notification engine for the pet care marketplace.
//!
//! Keeps a bounded log of notifications and a dedupe registry in a
//! key/value store, and derives "upcoming appointment" reminders from
//! booking data.
//!

pub mod auth;
pub mod clock;
pub mod dto;
pub mod popup;
pub mod repository;
pub mod service;
pub mod storage;
