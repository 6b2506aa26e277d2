//! Network validation.

use crate::error::{GatelabError, Result};
use crate::names::NameTable;

use super::Network;

/// Validate a parsed network before it is handed to a simulator.
///
/// Checks that every input pin registered on any device has a connected
/// source. Pins only become registered by appearing in an option set, so an
/// unconnected pin here means a connection attempt was recorded but never
/// completed.
pub fn validate_network(network: &Network, names: &NameTable) -> Result<()> {
    for device in network.devices() {
        for input in &device.inputs {
            if input.source.is_none() {
                return Err(GatelabError::UnconnectedInput {
                    device: names.resolve(device.name).to_string(),
                    pin: names.resolve(input.pin).to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::DeviceKind;
    use crate::names::Name;

    #[test]
    fn test_connected_network_passes() {
        let mut names = NameTable::new();
        let mut network = Network::new(&mut names);
        let sw = names.lookup("S1");
        let gate = names.lookup("G1");
        let i1 = names.lookup("I1");
        network.add_device(DeviceKind::Switch, sw, 0);
        network.add_device(DeviceKind::And, gate, 0);
        network.add_input(gate, i1);
        network.make_connection(gate, i1, sw, Name::BLANK);
        assert!(validate_network(&network, &names).is_ok());
    }

    #[test]
    fn test_unconnected_input_is_flagged() {
        let mut names = NameTable::new();
        let mut network = Network::new(&mut names);
        let gate = names.lookup("G1");
        let i1 = names.lookup("I1");
        network.add_device(DeviceKind::And, gate, 0);
        network.add_input(gate, i1);
        let err = validate_network(&network, &names).unwrap_err();
        match err {
            GatelabError::UnconnectedInput { device, pin } => {
                assert_eq!(device, "G1");
                assert_eq!(pin, "I1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
