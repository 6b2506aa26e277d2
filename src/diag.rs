//! Diagnostic output.
//!
//! The parser reports a failure by formatting it exactly once into a
//! [`DiagnosticSink`]. The parse entry point itself always returns
//! normally, so callers that need a pass/fail signal observe whether the
//! sink received a message.

/// Destination for formatted diagnostic messages.
pub trait DiagnosticSink {
    /// Emit one formatted message.
    fn emit(&mut self, message: &str);
}

/// Sink that writes each message to standard error.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// Sink that collects messages in memory.
///
/// Used by tests and by the CLI to decide the exit status after a parse.
#[derive(Debug, Default)]
pub struct BufferSink {
    messages: Vec<String>,
}

impl BufferSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages emitted so far, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of messages emitted.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no message has been emitted.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl DiagnosticSink for BufferSink {
    fn emit(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_collects_in_order() {
        let mut sink = BufferSink::new();
        assert!(sink.is_empty());
        sink.emit("first");
        sink.emit("second");
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.messages(), &["first".to_string(), "second".to_string()]);
    }
}
