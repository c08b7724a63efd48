//! Normalization of a grammar into well-formed shape.
//!
//! Four eliminations run in a fixed order: useless rules `A ::= A`, epsilon
//! rules, unit rules and useless symbols. Each one preserves the language.

pub mod nulling;
pub mod unit;
pub mod usefulness;
pub mod useless_rules;

use log::debug;

use crate::error::Result;
use crate::grammar::Grammar;
use crate::rule::CfgRule;
use crate::symbol::Symbol;

pub use self::nulling::NullableVariants;
pub use self::unit::UnitDerivationMatrix;
pub use self::usefulness::Usefulness;

/// Results of each step of [`Grammar::normalize`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NormalizeReport {
    /// Removed rules of the form `A ::= A`.
    pub useless_productions: Vec<CfgRule>,
    /// Nonterminals touched by epsilon elimination.
    pub lambda_modified: Vec<Symbol>,
    /// Removed unit rules.
    pub unit_productions: Vec<CfgRule>,
    /// Removed nonterminals, then removed terminals.
    pub useless_symbols: Vec<Symbol>,
}

impl NormalizeReport {
    /// Checks whether no step removed any rule or symbol.
    pub fn removed_nothing(&self) -> bool {
        self.useless_productions.is_empty()
            && self.unit_productions.is_empty()
            && self.useless_symbols.is_empty()
    }
}

impl Grammar {
    /// Turns the grammar into a well-formed grammar that generates the same
    /// language.
    ///
    /// Fails before doing anything if the grammar has no start symbol.
    pub fn normalize(&mut self) -> Result<NormalizeReport> {
        self.require_start()?;
        let useless_productions = self.remove_useless_productions();
        let lambda_modified = self.remove_lambda_productions();
        let unit_productions = self.remove_unit_productions();
        let useless_symbols = self.remove_useless_symbols()?;
        let report = NormalizeReport {
            useless_productions,
            lambda_modified,
            unit_productions,
            useless_symbols,
        };
        debug!("normalized grammar: {:?}", report);
        Ok(report)
    }

    /// Checks whether the grammar is well-formed: it has a start symbol, no
    /// rule `A ::= A`, no epsilon rule except possibly on the start symbol, no
    /// unit rule and no useless symbol.
    pub fn is_well_formed(&self) -> bool {
        let start = match self.start_symbol() {
            Some(start) => start,
            None => return false,
        };
        !self.has_useless_productions()
            && !self.has_lambda_productions()
            && self
                .rules()
                .all(|rule| !rule.rhs.is_epsilon() || rule.lhs == start)
            && !self.has_unit_productions()
            && self.has_useless_symbols() == Ok(false)
    }
}
