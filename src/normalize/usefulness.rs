//! Analysis of symbol usefulness.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::error::Result;
use crate::grammar::Grammar;
use crate::symbol::{Symbol, SymbolBitSet};

/// Contains the information about usefulness of the grammar's symbols.
/// Useful symbols are both reachable and productive.
#[derive(Clone, Debug)]
pub struct Usefulness {
    start: Symbol,
    productivity: SymbolBitSet,
    reachability: SymbolBitSet,
}

impl Usefulness {
    /// Analyzes usefulness of the grammar's symbols.
    ///
    /// Reachability is computed breadth-first from the start symbol, only
    /// through rules whose symbols are all productive. Removing what this
    /// analysis marks as useless leaves nothing further to remove.
    ///
    /// The start symbol counts as reachable even when it is unproductive.
    ///
    /// Fails if the grammar has no start symbol.
    pub fn new(grammar: &Grammar) -> Result<Self> {
        let start = grammar.require_start()?;
        let productivity = grammar.productive_symbols();

        let mut reachability = SymbolBitSet::new();
        let mut queue = VecDeque::new();
        reachability.set(start, true);
        if productivity[start] {
            queue.push_back(start);
        }
        while let Some(lhs) = queue.pop_front() {
            for rhs in grammar.productions(lhs) {
                if rhs.syms().iter().all(|&sym| productivity[sym]) {
                    for &sym in rhs.syms() {
                        if reachability.insert(sym) {
                            queue.push_back(sym);
                        }
                    }
                }
            }
        }

        Ok(Usefulness {
            start,
            productivity,
            reachability,
        })
    }

    /// Checks whether a symbol can derive a string of terminals.
    pub fn productivity(&self, sym: Symbol) -> bool {
        self.productivity[sym]
    }

    /// Checks whether a symbol occurs in some derivation from the start symbol
    /// that uses productive rules only.
    pub fn reachability(&self, sym: Symbol) -> bool {
        self.reachability[sym]
    }

    /// Checks whether the start symbol derives no string of terminals.
    pub fn is_language_empty(&self) -> bool {
        !self.productivity[self.start]
    }

    /// Returns the grammar's symbols that are not useful. The start symbol
    /// is never among them.
    pub fn useless_syms(&self, grammar: &Grammar) -> SymbolBitSet {
        let mut useless = grammar.symbol_set();
        useless.subtract(&self.reachability);
        useless
    }

    /// Checks whether the grammar still has a useless symbol, or rules on an
    /// unproductive start symbol.
    fn finds_useless(&self, grammar: &Grammar) -> bool {
        !self.useless_syms(grammar).is_empty()
            || (self.is_language_empty() && grammar.productions(self.start).next().is_some())
    }
}

impl Grammar {
    /// Checks whether some symbol is unproductive, unreachable or unused.
    /// Fails if the grammar has no start symbol.
    pub fn has_useless_symbols(&self) -> Result<bool> {
        let usefulness = Usefulness::new(self)?;
        Ok(usefulness.finds_useless(self))
    }

    /// Removes every nonterminal which is unproductive or unreachable from the
    /// start symbol, and every terminal that no remaining rule uses.
    ///
    /// Returns the removed nonterminals followed by the removed terminals, each
    /// in ascending order. The start symbol is kept even when the language is
    /// empty. It then loses all of its rules. Fails without modifying the
    /// grammar if there is no start symbol.
    pub fn remove_useless_symbols(&mut self) -> Result<Vec<Symbol>> {
        let usefulness = Usefulness::new(self)?;
        let useless = usefulness.useless_syms(self);
        for sym in &useless {
            trace!(
                "useless symbol {}: productive={} reachable={}",
                sym,
                usefulness.productivity(sym),
                usefulness.reachability(sym)
            );
        }

        let (mut removed, terminals): (Vec<Symbol>, Vec<Symbol>) =
            useless.iter().partition(|&sym| self.is_nonterminal(sym));
        removed.extend(terminals);

        self.remove_symbols(&useless);
        if usefulness.is_language_empty() {
            let start = usefulness.start;
            debug!("the language is empty, dropping the rules of {}", start);
            self.retain(|lhs, _| lhs != start);
        }
        debug!("removed {} useless symbols", removed.len());
        Ok(removed)
    }
}
