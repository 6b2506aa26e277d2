//! Recursive-descent parser for the device language.
//!
//! Each grammar rule is a method holding to a single-token lookahead
//! discipline: inspect `self.current`, consume it with [`Parser::advance`],
//! descend. No AST is built; reducing a production drives the circuit
//! model, monitor registry and name table directly. Any failure unwinds
//! through `Result` to [`Parser::run`], which reports it once to the
//! diagnostic sink and abandons the rest of the source.

use log::debug;

use super::lexer::{Lexer, Token, TokenKind};
use crate::circuit::{DeviceKind, Network, Signal, SignalLevel};
use crate::diag::DiagnosticSink;
use crate::error::{GatelabError, Result};
use crate::monitor::MonitorRegistry;
use crate::names::{Name, NameTable};
use crate::MAX_CLOCK_PERIOD;

/// Check a gate input pin name against the `I1..I<max>` pattern.
fn is_legal_gate_input(key: &str, max: usize) -> bool {
    let Some(digits) = key.strip_prefix('I') else {
        return false;
    };
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match digits.parse::<usize>() {
        Ok(n) => (1..=max).contains(&n),
        Err(_) => false,
    }
}

/// Parser for the device language.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    file: &'a str,
    names: &'a mut NameTable,
    network: &'a mut Network,
    monitors: &'a mut MonitorRegistry,
}

impl<'a> Parser<'a> {
    /// Create a parser over `lexer`, writing into the given collaborators.
    ///
    /// The lookahead is primed on the first [`run`](Parser::run) so that a
    /// lexer error in the very first token flows through the same
    /// diagnostic path as any later failure.
    pub fn new(
        lexer: Lexer<'a>,
        names: &'a mut NameTable,
        network: &'a mut Network,
        monitors: &'a mut MonitorRegistry,
    ) -> Self {
        let file = lexer.file();
        Self {
            lexer,
            current: Token {
                kind: TokenKind::Eof,
                text: String::new(),
                line: 1,
                column: 1,
            },
            file,
            names,
            network,
            monitors,
        }
    }

    /// Parse the configured source to completion.
    ///
    /// On the first failure the message is emitted once to `sink` and the
    /// remainder of the source is abandoned. Always returns normally;
    /// callers needing a pass/fail signal observe the sink.
    pub fn run(&mut self, sink: &mut dyn DiagnosticSink) {
        if let Err(error) = self.parse_file() {
            sink.emit(&error.to_string());
        }
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    // file = { statement } ;
    fn parse_file(&mut self) -> Result<()> {
        self.advance()?;
        while self.current.kind != TokenKind::Eof {
            self.parse_statement()?;
        }
        Ok(())
    }

    // statement = definedevice | definemonitor ;
    fn parse_statement(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::DevKeyword => {
                self.advance()?;
                self.parse_define_device()
            }
            TokenKind::MonitorKeyword => {
                self.advance()?;
                self.parse_define_monitor()
            }
            _ => Err(GatelabError::syntax(
                self.file,
                self.current.line,
                self.current.column,
                "Unexpected token. Expected a device or monitor definition.",
            )),
        }
    }

    // definedevice = "dev" , devicename , [ "=" , devicetype ] , data ;
    fn parse_define_device(&mut self) -> Result<()> {
        if self.current.kind != TokenKind::Identifier {
            return Err(GatelabError::syntax(
                self.file,
                self.current.line,
                self.current.column,
                "Expected a device name.",
            ));
        }
        let device = self.names.lookup(&self.current.text);
        self.advance()?;

        if self.current.kind == TokenKind::Equals {
            if self.network.find_device(device).is_some() {
                return Err(GatelabError::redefinition(
                    self.file,
                    self.current.line,
                    self.current.column,
                    "Device types may not be assigned to devices that already exist.",
                ));
            }
            self.advance()?;

            let TokenKind::DeviceType(kind) = self.current.kind else {
                return Err(GatelabError::syntax(
                    self.file,
                    self.current.line,
                    self.current.column,
                    "Expected device type.",
                ));
            };

            // variant parameter fixed to 0 for every kind
            if !self.network.add_device(kind, device, 0) {
                return Err(GatelabError::model_rejected(
                    self.file,
                    self.current.line,
                    self.current.column,
                    "Unable to add device.",
                ));
            }
            debug!("defined {kind} device '{}'", self.names.resolve(device));
            self.advance()?;
        }

        self.parse_data(device)
    }

    // data = optionset | ";" ;
    fn parse_data(&mut self, device: Name) -> Result<()> {
        match self.current.kind {
            TokenKind::SemiColon => {
                self.advance()?;
                Ok(())
            }
            TokenKind::Brace => {
                self.advance()?;
                self.parse_option_set(device)
            }
            _ => Err(GatelabError::syntax(
                self.file,
                self.current.line,
                self.current.column,
                "Unexpected token. Expecting ; or {.",
            )),
        }
    }

    // optionset = "{" , { option } , "}" ;
    fn parse_option_set(&mut self, device: Name) -> Result<()> {
        while self.current.kind != TokenKind::CloseBrace {
            if self.current.kind == TokenKind::Eof {
                return Err(GatelabError::syntax(
                    self.file,
                    self.current.line,
                    self.current.column,
                    "Unterminated braces.",
                ));
            }
            self.parse_option(device)?;
        }
        self.advance()?;
        Ok(())
    }

    // option = key , ":" , value , ";" ;
    fn parse_option(&mut self, device: Name) -> Result<()> {
        if self.current.kind != TokenKind::Identifier {
            return Err(GatelabError::syntax(
                self.file,
                self.current.line,
                self.current.column,
                "Expected a key.",
            ));
        }
        let key_token = self.current.clone();
        let key = self.names.lookup(&key_token.text);

        // Key legality is a pure function of the enclosing device's kind,
        // so the device record must be locatable before the key is judged.
        let Some(record) = self.network.find_device(device) else {
            return Err(GatelabError::illegal_attribute(
                self.file,
                key_token.line,
                key_token.column,
                "Could not assign key to a bad device type.",
            ));
        };
        let kind = record.kind;

        match kind {
            DeviceKind::Switch => {
                if key_token.text != "InitialValue" {
                    return Err(self.illegal_key(
                        &key_token,
                        "Switches may only have an `InitialValue` attribute.",
                    ));
                }
            }
            DeviceKind::Clock => {
                if key_token.text != "Period" {
                    return Err(
                        self.illegal_key(&key_token, "Clocks may only have a `Period` attribute.")
                    );
                }
            }
            DeviceKind::And => self.check_gate_key(&key_token, DeviceKind::And)?,
            DeviceKind::Nand => self.check_gate_key(&key_token, DeviceKind::Nand)?,
            DeviceKind::Or => self.check_gate_key(&key_token, DeviceKind::Or)?,
            DeviceKind::Nor => self.check_gate_key(&key_token, DeviceKind::Nor)?,
            DeviceKind::Xor => self.check_gate_key(&key_token, DeviceKind::Xor)?,
            DeviceKind::DType => {
                if !matches!(key_token.text.as_str(), "DATA" | "CLK" | "SET" | "CLEAR") {
                    return Err(self.illegal_key(
                        &key_token,
                        "DTYPE devices may only have DATA, CLK, SET or CLEAR input pins assigned.",
                    ));
                }
            }
        }

        self.advance()?;
        if self.current.kind != TokenKind::Colon {
            return Err(GatelabError::syntax(
                self.file,
                self.current.line,
                self.current.column,
                "Expected colon.",
            ));
        }
        self.advance()?;

        match kind {
            DeviceKind::Switch => {
                let value = self.current.clone();
                let level = match value.kind {
                    TokenKind::Number(0) => SignalLevel::Low,
                    TokenKind::Number(1) => SignalLevel::High,
                    _ => {
                        return Err(GatelabError::value_range(
                            self.file,
                            value.line,
                            value.column,
                            "Switches must have initial values of either 0 or 1.",
                        ));
                    }
                };
                if !self.network.set_switch(device, level) {
                    return Err(GatelabError::model_rejected(
                        self.file,
                        value.line,
                        value.column,
                        "Could not set switch initial value.",
                    ));
                }
                self.advance()?;
            }
            DeviceKind::Clock => {
                let value = self.current.clone();
                let period = match value.kind {
                    TokenKind::Number(n) if (1..=MAX_CLOCK_PERIOD).contains(&n) => n,
                    _ => {
                        return Err(GatelabError::value_range(
                            self.file,
                            value.line,
                            value.column,
                            "Clock periods must be integers between 1 and 32767.",
                        ));
                    }
                };
                // the period lands on the record directly; no success flag
                if let Some(clock) = self.network.device_mut(device) {
                    clock.frequency = period;
                }
                self.advance()?;
            }
            DeviceKind::And
            | DeviceKind::Nand
            | DeviceKind::Or
            | DeviceKind::Nor
            | DeviceKind::Xor
            | DeviceKind::DType => {
                let signal = self.parse_signal_name()?;
                self.network.add_input(device, key);
                if !self.network.make_connection(device, key, signal.device, signal.pin) {
                    return Err(GatelabError::model_rejected(
                        self.file,
                        key_token.line,
                        key_token.column,
                        "Could not make connection.",
                    ));
                }
            }
        }

        if self.current.kind != TokenKind::SemiColon {
            return Err(GatelabError::syntax(
                self.file,
                self.current.line,
                self.current.column,
                "Missing a semicolon on the end.",
            ));
        }
        self.advance()?;
        Ok(())
    }

    fn illegal_key(&self, key: &Token, message: &str) -> GatelabError {
        GatelabError::illegal_attribute(self.file, key.line, key.column, message)
    }

    fn check_gate_key(&self, key: &Token, kind: DeviceKind) -> Result<()> {
        let Some(limit) = kind.max_inputs() else {
            return Err(self.illegal_key(key, "Could not assign key to a bad device type."));
        };
        if is_legal_gate_input(&key.text, limit) {
            Ok(())
        } else {
            Err(self.illegal_key(
                key,
                &format!(
                    "{kind} gates may only have input pin attributes (up to {limit}), \
                     labelled I1 to I{limit}."
                ),
            ))
        }
    }

    // definemonitor = "monitor" , monitor , { "," , monitor } , ";" ;
    fn parse_define_monitor(&mut self) -> Result<()> {
        loop {
            self.parse_monitor()?;

            match self.current.kind {
                TokenKind::SemiColon => {
                    self.advance()?;
                    return Ok(());
                }
                TokenKind::Comma => {
                    self.advance()?;
                }
                _ => {
                    return Err(GatelabError::syntax(
                        self.file,
                        self.current.line,
                        self.current.column,
                        "Expected a comma in the monitor list.",
                    ));
                }
            }
        }
    }

    // monitor = signalname , [ "as" , identifier ] ;
    fn parse_monitor(&mut self) -> Result<()> {
        let signal = self.parse_signal_name()?;

        if self.current.kind == TokenKind::AsKeyword {
            self.advance()?;
            if self.current.kind != TokenKind::Identifier {
                return Err(GatelabError::syntax(
                    self.file,
                    self.current.line,
                    self.current.column,
                    "Expected an alias name.",
                ));
            }
            // the alias is accepted syntactically but not recorded anywhere
            self.advance()?;
        }

        if !self.monitors.add_monitor(signal.device, signal.pin) {
            return Err(GatelabError::model_rejected(
                self.file,
                self.current.line,
                self.current.column,
                "Could not make monitor.",
            ));
        }
        debug!(
            "monitoring '{}'.'{}'",
            self.names.resolve(signal.device),
            self.names.resolve(signal.pin)
        );
        Ok(())
    }

    // signalname = devicename , [ "." , pin ] ;
    fn parse_signal_name(&mut self) -> Result<Signal> {
        if self.current.kind != TokenKind::Identifier {
            return Err(GatelabError::syntax(
                self.file,
                self.current.line,
                self.current.column,
                "Expected a signal name.",
            ));
        }
        let device = self.names.lookup(&self.current.text);

        // definitions must precede uses
        if self.network.find_device(device).is_none() {
            return Err(GatelabError::undefined_reference(
                self.file,
                self.current.line,
                self.current.column,
                "Devices must be defined before being referenced.",
            ));
        }
        self.advance()?;

        let mut pin = Name::BLANK;
        if self.current.kind == TokenKind::Dot {
            self.advance()?;
            if self.current.kind != TokenKind::Identifier {
                return Err(GatelabError::syntax(
                    self.file,
                    self.current.line,
                    self.current.column,
                    "Expected a pin name.",
                ));
            }
            pin = self.names.lookup(&self.current.text);
            self.advance()?;
        }

        Ok(Signal::new(device, pin))
    }
}
