//! Source of fresh nonterminal symbols.

use crate::symbol::{Symbol, SymbolBitSet};

/// A source of fresh nonterminal symbols.
///
/// Symbols are handed out from the uppercase letters, starting at `Z` and going
/// down, skipping every symbol that is already in use.
#[derive(Clone, Debug)]
pub struct SymbolSource {
    used: SymbolBitSet,
    next: Option<char>,
}

impl SymbolSource {
    /// Creates a source which never returns any of the `used` symbols.
    pub fn new(used: SymbolBitSet) -> Self {
        SymbolSource {
            used,
            next: Some('Z'),
        }
    }

    /// Generates a new unique nonterminal symbol, or `None` if all uppercase
    /// letters are taken.
    pub fn next_sym(&mut self) -> Option<Symbol> {
        while let Some(ch) = self.next {
            self.next = if ch == 'A' {
                None
            } else {
                char::from_u32(ch as u32 - 1)
            };
            if let Some(sym) = Symbol::from_char(ch) {
                if self.used.insert(sym) {
                    return Some(sym);
                }
            }
        }
        None
    }

    /// Returns an iterator that generates symbols until the space runs out.
    pub fn generate(&mut self) -> Generate {
        Generate { source: self }
    }
}

/// Iterator for generating symbols.
pub struct Generate<'a> {
    source: &'a mut SymbolSource,
}

impl<'a> Iterator for Generate<'a> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        self.source.next_sym()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_used_symbols() {
        let used: SymbolBitSet = "ZXa".chars().filter_map(Symbol::from_char).collect();
        let mut source = SymbolSource::new(used);
        let fresh: String = source.generate().take(3).map(Symbol::to_char).collect();
        assert_eq!(fresh, "YWV");
    }

    #[test]
    fn test_runs_out() {
        let mut source = SymbolSource::new(SymbolBitSet::new());
        assert_eq!(source.generate().count(), 26);
        assert_eq!(source.next_sym(), None);
    }
}
