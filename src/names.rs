//! Lexeme interning.
//!
//! Every identifier that appears in a source file is interned once into a
//! [`NameTable`] and referred to everywhere else by its [`Name`]. Two
//! lookups of the same lexeme always return the same `Name`, so device and
//! pin identity is a cheap integer comparison rather than a string compare.

use std::collections::HashMap;
use std::fmt;

/// The interned identity of a lexeme.
///
/// Index 0 is reserved for the blank name, which signal references use to
/// mean "the device's sole/default pin".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(pub usize);

impl Name {
    /// The blank name (always index 0).
    pub const BLANK: Name = Name(0);

    /// Check if this is the blank name.
    pub fn is_blank(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Interning table mapping lexemes to [`Name`]s.
#[derive(Debug)]
pub struct NameTable {
    lexemes: Vec<String>,
    index: HashMap<String, Name>,
}

impl NameTable {
    /// Create a new table with the blank name pre-seeded at index 0.
    pub fn new() -> Self {
        let mut table = Self {
            lexemes: Vec::new(),
            index: HashMap::new(),
        };
        table.lookup("");
        table
    }

    /// Intern a lexeme, returning its stable identity.
    ///
    /// Repeated lookups of equal lexemes return equal names.
    pub fn lookup(&mut self, lexeme: &str) -> Name {
        if let Some(&name) = self.index.get(lexeme) {
            return name;
        }
        let name = Name(self.lexemes.len());
        self.lexemes.push(lexeme.to_string());
        self.index.insert(lexeme.to_string(), name);
        name
    }

    /// Get the lexeme for an interned name.
    ///
    /// Returns the empty string for [`Name::BLANK`] and for names that were
    /// never interned by this table.
    pub fn resolve(&self, name: Name) -> &str {
        self.lexemes.get(name.0).map(String::as_str).unwrap_or("")
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_idempotent() {
        let mut table = NameTable::new();
        let a = table.lookup("CLK1");
        let b = table.lookup("CLK1");
        assert_eq!(a, b);
        assert_eq!(table.resolve(a), "CLK1");
    }

    #[test]
    fn test_distinct_lexemes_get_distinct_names() {
        let mut table = NameTable::new();
        let a = table.lookup("A");
        let b = table.lookup("B");
        assert_ne!(a, b);
    }

    #[test]
    fn test_blank_is_reserved() {
        let mut table = NameTable::new();
        assert_eq!(table.lookup(""), Name::BLANK);
        let other = table.lookup("I1");
        assert!(!other.is_blank());
        assert_eq!(table.resolve(Name::BLANK), "");
    }
}
