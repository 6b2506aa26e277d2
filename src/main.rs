//! Gatelab - Logic Circuit Definition Checker
//!
//! Parses a device language file, validates the resulting network, and
//! prints a summary of the defined devices and monitors.
//!
//! # Usage
//!
//! ```bash
//! gatelab circuit.gdl
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gatelab_core::{
    circuit::validate_network, diag::BufferSink, dsl, monitor::MonitorRegistry, names::NameTable,
    Network,
};
use log::info;

/// Logic circuit definition checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the circuit definition file (.gdl)
    #[arg(value_name = "CIRCUIT_FILE")]
    circuit_file: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut names = NameTable::new();
    let mut network = Network::new(&mut names);
    let mut monitors = MonitorRegistry::new();
    let mut sink = BufferSink::new();

    if let Err(error) = dsl::parse_file(
        &args.circuit_file,
        &mut names,
        &mut network,
        &mut monitors,
        &mut sink,
    ) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    for message in sink.messages() {
        eprintln!("{message}");
    }
    if !sink.is_empty() {
        return ExitCode::FAILURE;
    }

    if let Err(error) = validate_network(&network, &names) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    for device in network.devices() {
        info!(
            "device '{}' ({}) with {} connected input(s)",
            names.resolve(device.name),
            device.kind,
            device.inputs.len()
        );
    }

    println!(
        "{}: {} device(s), {} monitor(s)",
        args.circuit_file.display(),
        network.len(),
        monitors.len()
    );
    ExitCode::SUCCESS
}
