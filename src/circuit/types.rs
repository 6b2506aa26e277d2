//! Core types for the logic-circuit model.

use std::fmt;

use crate::names::Name;

/// The closed set of device kinds the language can declare.
///
/// Every kind has a fixed attribute vocabulary, enforced by the parser with
/// an exhaustive match, so adding a kind here forces the key-legality and
/// value-interpretation sites to be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Manually settable two-level source
    Switch,
    /// Free-running square-wave source with a period attribute
    Clock,
    /// AND gate
    And,
    /// NAND gate
    Nand,
    /// OR gate
    Or,
    /// NOR gate
    Nor,
    /// XOR gate (fan-in fixed at 2)
    Xor,
    /// D-type flip-flop with DATA, CLK, SET and CLEAR inputs
    DType,
}

impl DeviceKind {
    /// Resolve a device-type literal from source text.
    ///
    /// The lexer uses this to turn `AND`, `SWITCH`, ... into device-type
    /// tokens; any other spelling stays an ordinary identifier.
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "SWITCH" => Some(Self::Switch),
            "CLOCK" => Some(Self::Clock),
            "AND" => Some(Self::And),
            "NAND" => Some(Self::Nand),
            "OR" => Some(Self::Or),
            "NOR" => Some(Self::Nor),
            "XOR" => Some(Self::Xor),
            "DTYPE" => Some(Self::DType),
            _ => None,
        }
    }

    /// The maximum number of numbered `I<n>` input pins, for gate kinds.
    pub fn max_inputs(&self) -> Option<usize> {
        match self {
            Self::And | Self::Nand | Self::Or | Self::Nor => Some(16),
            Self::Xor => Some(2),
            Self::Switch | Self::Clock | Self::DType => None,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let literal = match self {
            Self::Switch => "SWITCH",
            Self::Clock => "CLOCK",
            Self::And => "AND",
            Self::Nand => "NAND",
            Self::Or => "OR",
            Self::Nor => "NOR",
            Self::Xor => "XOR",
            Self::DType => "DTYPE",
        };
        write!(f, "{literal}")
    }
}

/// A two-valued signal level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalLevel {
    Low,
    High,
}

/// A (device, pin) reference used as a connection endpoint or monitor
/// target. A blank pin means the device's sole/default output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signal {
    pub device: Name,
    pub pin: Name,
}

impl Signal {
    /// Create a signal referring to a named pin on a device.
    pub fn new(device: Name, pin: Name) -> Self {
        Self { device, pin }
    }

    /// Create a signal referring to a device's default output.
    pub fn unqualified(device: Name) -> Self {
        Self {
            device,
            pin: Name::BLANK,
        }
    }
}
