//! Database and request models shared across the admin API.

#[cfg(feature = "server")]
pub mod auth;
pub mod config;
pub mod destination;
