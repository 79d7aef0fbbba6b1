//! Core domain model: session, navigation guard, rides, configuration.

#[cfg(feature = "ssr")]
pub mod config;
pub mod guard;
pub mod rides;
pub mod session;
