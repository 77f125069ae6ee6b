//! Time and battery watchface for the PineTime
//!
//! Hardware independent part of the firmware: display string formatting, the
//! watchface lifecycle and the text layers it draws with `embedded-graphics`.
#![cfg_attr(not(test), no_std)]

// This must go first so the logging macros are visible to all modules
mod fmt;

pub mod config;
pub mod error;
pub mod format;
pub mod power;
pub mod resources;
pub mod tick;
pub mod ui;

pub use error::Error;
