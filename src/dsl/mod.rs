//! Parser for the device description language.
//!
//! This module provides the textual language that declares logic devices
//! and signal monitors. Parsing is single-pass and action-interleaved:
//! there is no AST, each reduced production drives the circuit model
//! directly.
//!
//! # Grammar
//!
//! ```text
//! file           = { statement } ;
//! statement      = definedevice | definemonitor ;
//! definedevice   = "dev" , identifier , [ "=" , devicetype ] , data ;
//! data           = optionset | ";" ;
//! optionset      = "{" , { option } , "}" ;
//! option         = identifier , ":" , value , ";" ;
//! definemonitor  = "monitor" , monitor , { "," , monitor } , ";" ;
//! monitor        = signalname , [ "as" , identifier ] ;
//! signalname     = identifier , [ "." , identifier ] ;
//! ```
//!
//! Device types are the literals `SWITCH`, `CLOCK`, `AND`, `NAND`, `OR`,
//! `NOR`, `XOR` and `DTYPE`. `#` and `//` start comments running to the
//! end of the line.
//!
//! # Example
//!
//! ```text
//! // half adder with monitored outputs
//! dev A = SWITCH { InitialValue: 0; };
//! dev B = SWITCH { InitialValue: 1; };
//! dev SUM = XOR { I1: A; I2: B; };
//! dev CARRY = AND { I1: A; I2: B; };
//! monitor SUM, CARRY as Cout;
//! ```

mod lexer;
mod parser;

pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::circuit::Network;
use crate::diag::DiagnosticSink;
use crate::monitor::MonitorRegistry;
use crate::names::NameTable;

/// Parse a device language source into the given model collaborators.
///
/// `file` is the source identifier carried into diagnostics. On the first
/// failure a single message lands in `sink` and the rest of the source is
/// skipped; the call itself always returns normally.
pub fn parse(
    source: &str,
    file: &str,
    names: &mut NameTable,
    network: &mut Network,
    monitors: &mut MonitorRegistry,
    sink: &mut dyn DiagnosticSink,
) {
    let lexer = Lexer::new(source, file);
    Parser::new(lexer, names, network, monitors).run(sink);
}

/// Parse a device language file.
///
/// Returns an error only when the file cannot be read; parse failures are
/// reported through `sink` as in [`parse`].
#[cfg(feature = "cli")]
pub fn parse_file(
    path: &std::path::Path,
    names: &mut NameTable,
    network: &mut Network,
    monitors: &mut MonitorRegistry,
    sink: &mut dyn DiagnosticSink,
) -> crate::error::Result<()> {
    let source =
        std::fs::read_to_string(path).map_err(|e| crate::error::GatelabError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;
    parse(
        &source,
        &path.display().to_string(),
        names,
        network,
        monitors,
        sink,
    );
    Ok(())
}
