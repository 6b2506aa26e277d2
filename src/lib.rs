//! # Gatelab Core
//!
//! The front end for a textual logic-circuit description language.
//!
//! Source text declares logic devices (gates, flip-flops, switches,
//! clocks) and signal monitors; parsing translates it directly into an
//! in-memory circuit model without building an AST.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Lexer and recursive-descent parser for the device language
//! - [`names`] - Lexeme interning; devices and pins are keyed by [`Name`]
//! - [`circuit`] - The network of device records the parser builds
//! - [`monitor`] - Registry of (device, pin) signals to observe
//! - [`diag`] - Diagnostic sink the parser reports failures through
//! - [`error`] - Unified error type for the whole front end
//!
//! ## Usage
//!
//! ```
//! use gatelab_core::{dsl, BufferSink, MonitorRegistry, NameTable, Network};
//!
//! let source = "
//!     dev CK = CLOCK { Period: 10; };
//!     dev FF = DTYPE { DATA: CK; CLK: CK; SET: CK; CLEAR: CK; };
//!     monitor FF.Q;
//! ";
//!
//! let mut names = NameTable::new();
//! let mut network = Network::new(&mut names);
//! let mut monitors = MonitorRegistry::new();
//! let mut sink = BufferSink::new();
//!
//! dsl::parse(source, "example.gdl", &mut names, &mut network, &mut monitors, &mut sink);
//!
//! assert!(sink.is_empty());
//! assert_eq!(network.len(), 2);
//! assert_eq!(monitors.len(), 1);
//! ```
//!
//! ## Error policy
//!
//! The parser stops at the first failure: one formatted message is emitted
//! to the diagnostic sink and the remainder of the source is skipped. The
//! parse entry point itself always returns normally; observe the sink for
//! a pass/fail signal.

pub mod circuit;
pub mod diag;
pub mod dsl;
pub mod error;
pub mod monitor;
pub mod names;

// Re-export main types for convenience
pub use circuit::{Device, DeviceKind, Network, Signal, SignalLevel};
pub use diag::{BufferSink, DiagnosticSink, StderrSink};
pub use error::{GatelabError, Result};
pub use monitor::MonitorRegistry;
pub use names::{Name, NameTable};

/// Largest accepted clock period, in simulation cycles
pub const MAX_CLOCK_PERIOD: i32 = 32767;
