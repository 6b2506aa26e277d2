//! Monitor registration.
//!
//! Monitors are (device, pin) signal references whose values an external
//! recorder observes during simulation. The registry only stores the
//! references; it does not resolve or validate them, which is the parser's
//! job at the point of registration.

use log::trace;

use crate::circuit::Signal;
use crate::names::Name;

/// Ordered set of monitored signals.
#[derive(Debug, Default)]
pub struct MonitorRegistry {
    monitors: Vec<Signal>,
}

impl MonitorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a (device, pin) pair to observe.
    ///
    /// Fails when the same pair is already monitored.
    pub fn add_monitor(&mut self, device: Name, pin: Name) -> bool {
        let signal = Signal::new(device, pin);
        if self.monitors.contains(&signal) {
            return false;
        }
        self.monitors.push(signal);
        trace!("monitoring {device}.{pin}");
        true
    }

    /// Iterate monitored signals in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Signal> {
        self.monitors.iter()
    }

    /// Number of monitored signals.
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Whether no signal is monitored.
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::NameTable;

    #[test]
    fn test_add_monitor_rejects_duplicates() {
        let mut names = NameTable::new();
        let mut registry = MonitorRegistry::new();
        let dev = names.lookup("A");
        let pin = names.lookup("Q");

        assert!(registry.add_monitor(dev, Name::BLANK));
        assert!(registry.add_monitor(dev, pin));
        // same (device, pin) pair again
        assert!(!registry.add_monitor(dev, pin));
        assert_eq!(registry.len(), 2);
    }
}
