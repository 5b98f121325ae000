//! Settings loading and tracing setup for newsdeck hosts.
//!
//! Library code in `newsdeck-core` only emits `tracing` events and takes a
//! ready [`Settings`] value; this crate is where a host resolves those
//! settings from files or the environment and installs a subscriber.

#![allow(missing_docs)]

pub mod logging;
pub mod settings;

pub use logging::init_tracing;
pub use newsdeck_core::settings::{CarouselSettings, ListingSettings, Settings};
pub use settings::{LoadSettings, SettingsFormat, SettingsSource};
