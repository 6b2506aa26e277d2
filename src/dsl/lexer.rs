//! Lexer (tokenizer) for the device language.

use crate::circuit::DeviceKind;
use crate::error::{GatelabError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the device language.
///
/// The lexer resolves keywords and device-type literals itself, so the
/// parser dispatches on token kind without re-inspecting the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The `dev` keyword
    DevKeyword,
    /// The `monitor` keyword
    MonitorKeyword,
    /// The `as` keyword
    AsKeyword,
    /// An identifier (device name, pin name, option key)
    Identifier,
    /// A device-type literal (`AND`, `SWITCH`, ...)
    DeviceType(DeviceKind),
    /// A non-negative integer
    Number(i32),
    /// Equals sign '='
    Equals,
    /// Colon ':'
    Colon,
    /// Semicolon ';'
    SemiColon,
    /// Comma ','
    Comma,
    /// Dot '.'
    Dot,
    /// Open brace '{'
    Brace,
    /// Close brace '}'
    CloseBrace,
    /// End of file
    Eof,
}

/// Lexer for tokenizing device language input.
pub struct Lexer<'a> {
    file: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    ///
    /// `file` is the source identifier carried into diagnostics.
    pub fn new(input: &'a str, file: &'a str) -> Self {
        Self {
            file,
            chars: input.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// The source identifier this lexer was created with.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let ch = match self.chars.peek() {
            Some(&(_, ch)) => ch,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    line: self.line,
                    column: self.column,
                });
            }
        };

        let start_line = self.line;
        let start_column = self.column;

        let (kind, text) = match ch {
            '=' => self.punct(TokenKind::Equals, "="),
            ':' => self.punct(TokenKind::Colon, ":"),
            ';' => self.punct(TokenKind::SemiColon, ";"),
            ',' => self.punct(TokenKind::Comma, ","),
            '.' => self.punct(TokenKind::Dot, "."),
            '{' => self.punct(TokenKind::Brace, "{"),
            '}' => self.punct(TokenKind::CloseBrace, "}"),
            '0'..='9' => {
                let text = self.read_number();
                let value = text.parse::<i32>().map_err(|_| {
                    GatelabError::lexer(
                        self.file,
                        start_line,
                        start_column,
                        format!("number '{text}' is too large"),
                    )
                })?;
                (TokenKind::Number(value), text)
            }
            _ if ch.is_alphabetic() || ch == '_' => {
                let text = self.read_identifier();
                let kind = match text.as_str() {
                    "dev" => TokenKind::DevKeyword,
                    "monitor" => TokenKind::MonitorKeyword,
                    "as" => TokenKind::AsKeyword,
                    other => match DeviceKind::from_literal(other) {
                        Some(device_kind) => TokenKind::DeviceType(device_kind),
                        None => TokenKind::Identifier,
                    },
                };
                (kind, text)
            }
            _ => {
                return Err(GatelabError::lexer(
                    self.file,
                    start_line,
                    start_column,
                    format!("unexpected character '{ch}'"),
                ));
            }
        };

        Ok(Token {
            kind,
            text,
            line: start_line,
            column: start_column,
        })
    }

    fn punct(&mut self, kind: TokenKind, text: &str) -> (TokenKind, String) {
        self.advance();
        (kind, text.to_string())
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((_, ch)) = self.chars.next() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        } else {
            None
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n' {
                self.advance();
            } else if ch == '#' {
                self.skip_to_end_of_line();
            } else if ch == '/' {
                // only a '//' pair starts a comment; a lone '/' is left for
                // next_token to report
                let mut ahead = self.chars.clone();
                ahead.next();
                if matches!(ahead.next(), Some((_, '/'))) {
                    self.skip_to_end_of_line();
                } else {
                    break;
                }
            } else {
                break;
            }
        }
    }

    fn skip_to_end_of_line(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut text = String::new();
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        text
    }

    fn read_number(&mut self) -> String {
        let mut text = String::new();
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input, "test.gdl");
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            let done = token.kind == TokenKind::Eof;
            out.push(token.kind);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("dev monitor as devX"),
            vec![
                TokenKind::DevKeyword,
                TokenKind::MonitorKeyword,
                TokenKind::AsKeyword,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_device_type_literals() {
        assert_eq!(
            kinds("AND XOR DTYPE Andy"),
            vec![
                TokenKind::DeviceType(DeviceKind::And),
                TokenKind::DeviceType(DeviceKind::Xor),
                TokenKind::DeviceType(DeviceKind::DType),
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_punctuation_and_numbers() {
        assert_eq!(
            kinds("G1 = AND { I1: 10; }"),
            vec![
                TokenKind::Identifier,
                TokenKind::Equals,
                TokenKind::DeviceType(DeviceKind::And),
                TokenKind::Brace,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Number(10),
                TokenKind::SemiColon,
                TokenKind::CloseBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_position_tracking() {
        let mut lexer = Lexer::new("dev A\n  monitor", "test.gdl");
        let dev = lexer.next_token().unwrap();
        assert_eq!((dev.line, dev.column), (1, 1));
        let a = lexer.next_token().unwrap();
        assert_eq!((a.line, a.column), (1, 5));
        let mon = lexer.next_token().unwrap();
        assert_eq!((mon.line, mon.column), (2, 3));
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("# header\ndev A; // trailing\nmonitor"),
            vec![
                TokenKind::DevKeyword,
                TokenKind::Identifier,
                TokenKind::SemiColon,
                TokenKind::MonitorKeyword,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_stray_character_is_an_error() {
        let mut lexer = Lexer::new("dev @", "test.gdl");
        lexer.next_token().unwrap();
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, GatelabError::Lexer { .. }));
    }

    #[test]
    fn test_number_overflow_is_an_error() {
        let mut lexer = Lexer::new("99999999999", "test.gdl");
        assert!(matches!(
            lexer.next_token(),
            Err(GatelabError::Lexer { .. })
        ));
    }
}
