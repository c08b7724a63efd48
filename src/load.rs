//! Loads grammars from text in the format printed by `Display for Grammar`.
//!
//! ```text
//! S::=AB|l
//! A::=a
//! B::=b|bB
//! ```

use std::fmt;

use crate::error::GrammarError;
use crate::grammar::Grammar;
use crate::symbol::{Symbol, SymbolKind};

/// Represents an error when loading a grammar from text.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LoadError {
    /// Human-readable reason for the error.
    pub reason: String,
    /// Line where the error happened.
    ///
    /// One-indexed.
    pub line: u32,
    /// Column where the error happened.
    ///
    /// One-indexed.
    pub col: u32,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Parse error at line {} column {}: reason: {}",
            self.line, self.col, self.reason
        )
    }
}

impl std::error::Error for LoadError {}

impl Grammar {
    /// Parses a grammar with one `A::=w1|w2` line per nonterminal. The same
    /// nonterminal may appear on several lines.
    ///
    /// Symbols are declared on first use, by case: uppercase letters are
    /// nonterminals, other letters and digits are terminals. `l` stands for
    /// the empty string. Blank lines and whitespace around symbols and
    /// alternatives are ignored.
    ///
    /// The start symbol is declared too if no line mentions it. Errors about
    /// the start symbol itself are reported at line 1, column 1.
    pub fn from_text(text: &str, start: char) -> Result<Grammar, LoadError> {
        let mut grammar = Grammar::new();
        for (line_idx, raw) in text.lines().enumerate() {
            let line = line_idx as u32 + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            let indent = leading_whitespace(raw);
            let error_at = |offset: usize, reason: String| LoadError {
                reason,
                line,
                col: (indent + offset) as u32 + 1,
            };

            let (lhs_text, rhs_text) = trimmed
                .split_once("::=")
                .ok_or_else(|| error_at(0, "expected `::=`".to_string()))?;
            let mut lhs_chars = lhs_text.trim().chars();
            let lhs = match (lhs_chars.next(), lhs_chars.next()) {
                (Some(lhs), None) => lhs,
                _ => {
                    return Err(error_at(
                        0,
                        "expected a single nonterminal before `::=`".to_string(),
                    ))
                }
            };
            declare(&mut grammar, lhs)
                .and_then(|_| grammar.defined(lhs, SymbolKind::Nonterminal))
                .map_err(|err| error_at(0, err.reason))?;

            let mut offset = lhs_text.chars().count() + "::=".len();
            for alternative in rhs_text.split('|') {
                let rhs = alternative.trim();
                let rhs_offset = offset + leading_whitespace(alternative);
                if !grammar.is_epsilon_text(rhs) {
                    for (pos, ch) in rhs.chars().enumerate() {
                        declare(&mut grammar, ch)
                            .map_err(|err| error_at(rhs_offset + pos, err.reason))?;
                    }
                }
                grammar
                    .add_production(lhs, rhs)
                    .map_err(|err| error_at(rhs_offset, err.reason))?;
                offset += alternative.chars().count() + 1;
            }
        }

        let start_error = |err: GrammarError| LoadError {
            reason: err.reason,
            line: 1,
            col: 1,
        };
        declare(&mut grammar, start).map_err(start_error)?;
        grammar.set_start_symbol(start).map_err(start_error)?;
        Ok(grammar)
    }

    fn is_epsilon_text(&self, rhs: &str) -> bool {
        self.parse_rhs(rhs).map_or(false, |rhs| rhs.is_epsilon())
    }
}

/// Declares a symbol by the case of its character, unless already defined.
fn declare(grammar: &mut Grammar, ch: char) -> Result<(), GrammarError> {
    let defined = Symbol::from_char(ch).and_then(|sym| grammar.kind_of(sym));
    if defined.is_some() {
        return Ok(());
    }
    match SymbolKind::for_char(ch) {
        Some(SymbolKind::Nonterminal) => grammar.add_nonterminal(ch).map(|_| ()),
        Some(SymbolKind::Terminal) => grammar.add_terminal(ch).map(|_| ()),
        None => {
            let reason = format!("`{}` is not a grammar symbol", ch);
            Err(GrammarError::validation(reason))
        }
    }
}

fn leading_whitespace(text: &str) -> usize {
    text.chars().take_while(|ch| ch.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_position() {
        let text = "S::=aB\n\n  B::=b|c+d";
        let err = Grammar::from_text(text, 'S').unwrap_err();
        assert_eq!((err.line, err.col), (3, 10));

        let err = Grammar::from_text("S=a", 'S').unwrap_err();
        assert_eq!((err.line, err.col), (1, 1));
    }

    #[test]
    fn test_display() {
        let err = LoadError {
            reason: "expected `::=`".to_string(),
            line: 2,
            col: 3,
        };
        assert_eq!(
            err.to_string(),
            "Parse error at line 2 column 3: reason: expected `::=`"
        );
    }
}
