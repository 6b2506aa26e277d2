//! Error types for the Gatelab front end.
//!
//! This module provides a unified error type [`GatelabError`] that covers
//! all error conditions that can occur during lexing, parsing, semantic
//! checking and network validation. Every parse-time variant carries the
//! source file name and the line/column the offending token started at.

use thiserror::Error;

/// Result type alias using [`GatelabError`].
pub type Result<T> = std::result::Result<T, GatelabError>;

/// Unified error type for all Gatelab operations.
#[derive(Error, Debug)]
pub enum GatelabError {
    // ============ Lexical Errors ============
    /// Error during lexical analysis
    #[error("Lexer error in {file} at line {line}, column {column}: {message}")]
    Lexer {
        file: String,
        line: usize,
        column: usize,
        message: String,
    },

    // ============ Syntax Errors ============
    /// Unexpected token at a grammar decision point
    #[error("Syntax error in {file} at line {line}, column {column}: {message}")]
    Syntax {
        file: String,
        line: usize,
        column: usize,
        message: String,
    },

    // ============ Semantic Errors ============
    /// A type assignment to a device name that already exists
    #[error("Semantic error in {file} at line {line}, column {column}: {message}")]
    Redefinition {
        file: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// A signal name whose device has not been defined yet
    #[error("Semantic error in {file} at line {line}, column {column}: {message}")]
    UndefinedReference {
        file: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// An option key outside the device kind's attribute vocabulary
    #[error("Semantic error in {file} at line {line}, column {column}: {message}")]
    IllegalAttribute {
        file: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// An out-of-range numeric attribute value
    #[error("Semantic error in {file} at line {line}, column {column}: {message}")]
    ValueRange {
        file: String,
        line: usize,
        column: usize,
        message: String,
    },

    // ============ Model Errors ============
    /// A network, switch or monitor mutation reported failure
    #[error("Error in {file} at line {line}, column {column}: {message}")]
    ModelRejected {
        file: String,
        line: usize,
        column: usize,
        message: String,
    },

    // ============ Validation Errors ============
    /// An input pin was registered but never connected
    #[error("Input pin '{pin}' on device '{device}' is not connected")]
    UnconnectedInput { device: String, pin: String },

    // ============ I/O Errors ============
    /// Error reading a source file
    #[error("Failed to read source file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GatelabError {
    /// Create a lexer error
    pub fn lexer(
        file: impl Into<String>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Lexer {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a syntax error
    pub fn syntax(
        file: impl Into<String>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Syntax {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a redefinition error
    pub fn redefinition(
        file: impl Into<String>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Redefinition {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create an undefined-reference error
    pub fn undefined_reference(
        file: impl Into<String>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::UndefinedReference {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create an illegal-attribute error
    pub fn illegal_attribute(
        file: impl Into<String>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::IllegalAttribute {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a value-range error
    pub fn value_range(
        file: impl Into<String>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::ValueRange {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a model-rejected error
    pub fn model_rejected(
        file: impl Into<String>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::ModelRejected {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }
}
