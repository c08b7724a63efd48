//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by their
//! IDs, and every ID stands for one character of the grammar alphabet.

pub(crate) mod repr;
pub mod set;
pub mod source;

use std::fmt;

pub use self::repr::{Symbol, NUM_SYMBOLS};
pub use self::set::SymbolBitSet;
pub use self::source::SymbolSource;

/// Character reserved for the empty string. It is never a symbol of a grammar.
pub const EPSILON_CHAR: char = 'l';

/// The two disjoint kinds of grammar symbols.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SymbolKind {
    /// A symbol of the generated language, never rewritten.
    Terminal,
    /// A grammar variable that can be rewritten by productions.
    Nonterminal,
}

impl SymbolKind {
    /// Returns the kind a character may be declared as, judging by its case.
    ///
    /// Uppercase letters are nonterminals. Lowercase letters other than `l`,
    /// and digits, are terminals.
    pub fn for_char(ch: char) -> Option<Self> {
        match ch {
            'A'..='Z' => Some(SymbolKind::Nonterminal),
            EPSILON_CHAR => None,
            'a'..='z' | '0'..='9' => Some(SymbolKind::Terminal),
            _ => None,
        }
    }
}

impl Symbol {
    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.id() as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SymbolKind::Terminal => f.write_str("terminal"),
            SymbolKind::Nonterminal => f.write_str("nonterminal"),
        }
    }
}
