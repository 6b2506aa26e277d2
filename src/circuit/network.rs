//! In-memory network of logic devices.
//!
//! The [`Network`] is the single model the parser writes into: device
//! creation, input-pin registration, connections, and switch state all land
//! here. Mutating operations report success as a boolean flag; the parser
//! owns the diagnostic text for a rejected operation.

use std::collections::HashMap;

use log::trace;

use super::types::{DeviceKind, Signal, SignalLevel};
use crate::names::{Name, NameTable};

/// An input pin registered on a device, with its connected source once a
/// connection has been made.
#[derive(Debug, Clone)]
pub struct InputPin {
    /// Pin name (e.g. `I3`, `DATA`)
    pub pin: Name,
    /// Source signal driving this pin, if connected
    pub source: Option<Signal>,
}

/// A defined device.
#[derive(Debug, Clone)]
pub struct Device {
    /// The device's interned name
    pub name: Name,
    /// Device kind, fixed at creation
    pub kind: DeviceKind,
    /// Kind variant parameter (currently always 0)
    pub variant: i32,
    /// Registered input pins, in registration order
    pub inputs: Vec<InputPin>,
    /// Output pins other devices may reference; the blank name is the
    /// sole output of every kind except the D-type
    pub outputs: Vec<Name>,
    /// Clock period in simulation cycles (clocks only)
    pub frequency: i32,
    /// Initial level (switches only)
    pub initial: SignalLevel,
}

impl Device {
    /// Find a registered input pin by name.
    pub fn input(&self, pin: Name) -> Option<&InputPin> {
        self.inputs.iter().find(|input| input.pin == pin)
    }

    fn input_mut(&mut self, pin: Name) -> Option<&mut InputPin> {
        self.inputs.iter_mut().find(|input| input.pin == pin)
    }

    /// Whether `pin` is an output of this device.
    pub fn has_output(&self, pin: Name) -> bool {
        self.outputs.contains(&pin)
    }
}

/// The circuit model: all defined devices, keyed by interned name.
#[derive(Debug)]
pub struct Network {
    devices: HashMap<Name, Device>,
    /// Definition order, for deterministic iteration and reporting
    order: Vec<Name>,
    q: Name,
    qbar: Name,
}

impl Network {
    /// Create an empty network.
    ///
    /// The D-type output pin names are interned up front so connection
    /// checks can compare plain [`Name`]s.
    pub fn new(names: &mut NameTable) -> Self {
        Self {
            devices: HashMap::new(),
            order: Vec::new(),
            q: names.lookup("Q"),
            qbar: names.lookup("QBAR"),
        }
    }

    /// Look up a device by name.
    pub fn find_device(&self, name: Name) -> Option<&Device> {
        self.devices.get(&name)
    }

    /// Look up a device for mutation (clock period assignment).
    pub fn device_mut(&mut self, name: Name) -> Option<&mut Device> {
        self.devices.get_mut(&name)
    }

    /// Create a device of `kind` bound to `name`.
    ///
    /// Fails when a device with that name already exists.
    pub fn add_device(&mut self, kind: DeviceKind, name: Name, variant: i32) -> bool {
        if self.devices.contains_key(&name) {
            return false;
        }
        let outputs = match kind {
            DeviceKind::DType => vec![self.q, self.qbar],
            _ => vec![Name::BLANK],
        };
        self.devices.insert(
            name,
            Device {
                name,
                kind,
                variant,
                inputs: Vec::new(),
                outputs,
                frequency: 1,
                initial: SignalLevel::Low,
            },
        );
        self.order.push(name);
        trace!("added {kind} device {name}");
        true
    }

    /// Register an input pin on a device.
    ///
    /// Registering the same pin twice is a no-op; a missing device is
    /// ignored here and caught by the subsequent connection attempt.
    pub fn add_input(&mut self, device: Name, pin: Name) {
        if let Some(dev) = self.devices.get_mut(&device) {
            if dev.input(pin).is_none() {
                dev.inputs.push(InputPin { pin, source: None });
            }
        }
    }

    /// Connect a source signal to an input pin of a destination device.
    ///
    /// Fails when the source device does not exist, the named source pin is
    /// not one of its outputs, or the destination device/pin is missing.
    /// Reconnecting an already-connected pin overwrites the previous source.
    pub fn make_connection(&mut self, dest: Name, dest_pin: Name, src: Name, src_pin: Name) -> bool {
        match self.devices.get(&src) {
            Some(source) if source.has_output(src_pin) => {}
            _ => return false,
        }
        let Some(device) = self.devices.get_mut(&dest) else {
            return false;
        };
        let Some(input) = device.input_mut(dest_pin) else {
            return false;
        };
        input.source = Some(Signal::new(src, src_pin));
        trace!("connected {src}.{src_pin} -> {dest}.{dest_pin}");
        true
    }

    /// Set a switch's initial level.
    ///
    /// Fails when the device does not exist or is not a switch.
    pub fn set_switch(&mut self, name: Name, level: SignalLevel) -> bool {
        match self.devices.get_mut(&name) {
            Some(device) if device.kind == DeviceKind::Switch => {
                device.initial = level;
                true
            }
            _ => false,
        }
    }

    /// Iterate devices in definition order.
    pub fn devices(&self) -> impl Iterator<Item = &Device> {
        self.order.iter().filter_map(|name| self.devices.get(name))
    }

    /// Number of defined devices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no device has been defined.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (NameTable, Network) {
        let mut names = NameTable::new();
        let network = Network::new(&mut names);
        (names, network)
    }

    #[test]
    fn test_add_device_rejects_duplicates() {
        let (mut names, mut network) = setup();
        let sw = names.lookup("S1");
        assert!(network.add_device(DeviceKind::Switch, sw, 0));
        assert!(!network.add_device(DeviceKind::Clock, sw, 0));
        assert_eq!(network.find_device(sw).unwrap().kind, DeviceKind::Switch);
        assert_eq!(network.len(), 1);
    }

    #[test]
    fn test_dtype_outputs() {
        let (mut names, mut network) = setup();
        let ff = names.lookup("FF");
        network.add_device(DeviceKind::DType, ff, 0);
        let device = network.find_device(ff).unwrap();
        assert!(device.has_output(names.lookup("Q")));
        assert!(device.has_output(names.lookup("QBAR")));
        assert!(!device.has_output(Name::BLANK));
    }

    #[test]
    fn test_connection_requires_existing_source() {
        let (mut names, mut network) = setup();
        let gate = names.lookup("G1");
        let i1 = names.lookup("I1");
        let ghost = names.lookup("GHOST");
        network.add_device(DeviceKind::And, gate, 0);
        network.add_input(gate, i1);
        assert!(!network.make_connection(gate, i1, ghost, Name::BLANK));

        let sw = names.lookup("S1");
        network.add_device(DeviceKind::Switch, sw, 0);
        assert!(network.make_connection(gate, i1, sw, Name::BLANK));
        let input = network.find_device(gate).unwrap().input(i1).unwrap();
        assert_eq!(input.source, Some(Signal::unqualified(sw)));
    }

    #[test]
    fn test_connection_rejects_bad_source_pin() {
        let (mut names, mut network) = setup();
        let gate = names.lookup("G1");
        let i1 = names.lookup("I1");
        let sw = names.lookup("S1");
        network.add_device(DeviceKind::And, gate, 0);
        network.add_device(DeviceKind::Switch, sw, 0);
        network.add_input(gate, i1);
        // a switch has no Q output
        assert!(!network.make_connection(gate, i1, sw, names.lookup("Q")));
    }

    #[test]
    fn test_set_switch_only_touches_switches() {
        let (mut names, mut network) = setup();
        let sw = names.lookup("S1");
        let clk = names.lookup("CLK");
        network.add_device(DeviceKind::Switch, sw, 0);
        network.add_device(DeviceKind::Clock, clk, 0);
        assert!(network.set_switch(sw, SignalLevel::High));
        assert_eq!(network.find_device(sw).unwrap().initial, SignalLevel::High);
        assert!(!network.set_switch(clk, SignalLevel::High));
        assert!(!network.set_switch(names.lookup("NOPE"), SignalLevel::Low));
    }
}
