//! Textual rendering of grammars.

use std::fmt;

use crate::error::Result;
use crate::grammar::Grammar;
use crate::symbol::{Symbol, SymbolKind};

impl Grammar {
    /// Renders the productions of one nonterminal as `A::=w1|w2`, with
    /// alternatives in lexicographic order. Returns an empty string if the
    /// nonterminal has no productions.
    pub fn productions_to_string(&self, lhs: char) -> Result<String> {
        let lhs = self.defined(lhs, SymbolKind::Nonterminal)?;
        Ok(self.render_productions(lhs).unwrap_or_default())
    }

    fn render_productions(&self, lhs: Symbol) -> Option<String> {
        let mut alternatives: Vec<String> =
            self.productions(lhs).map(|rhs| rhs.to_string()).collect();
        if alternatives.is_empty() {
            return None;
        }
        alternatives.sort();
        Some(format!("{}::={}", lhs, alternatives.join("|")))
    }
}

/// One line per nonterminal that has productions, in ascending order.
impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for lhs in self.nonterminals() {
            if let Some(line) = self.render_productions(lhs) {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}
