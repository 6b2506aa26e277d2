//! Circuit model and validation.
//!
//! This module provides the in-memory representation the parser builds:
//! the [`Network`] of [`Device`] records, the closed [`DeviceKind`]
//! enumeration, and the [`Signal`] references used for connections and
//! monitors.

mod network;
mod types;
mod validate;

pub use network::{Device, InputPin, Network};
pub use types::{DeviceKind, Signal, SignalLevel};
pub use validate::validate_network;
