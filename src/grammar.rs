//! Definitions of the context-free grammar type and its validated mutations.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GrammarError, Result};
use crate::rule::{CfgRule, Rhs, RuleRef};
use crate::symbol::{Symbol, SymbolBitSet, SymbolKind, EPSILON_CHAR};

/// Context-free grammar type.
///
/// Terminals and nonterminals are two disjoint sets of symbols. Every
/// nonterminal owns a set of right-hand sides, and one nonterminal may be
/// chosen as the start symbol.
///
/// All public mutations validate their input and leave the grammar unchanged
/// when they fail.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Grammar {
    /// The set of nonterminal symbols.
    nonterminals: SymbolBitSet,
    /// The set of terminal symbols.
    terminals: SymbolBitSet,
    /// Right-hand sides, by left-hand side. Sets are never empty.
    productions: BTreeMap<Symbol, BTreeSet<Rhs>>,
    /// The start symbol.
    start: Option<Symbol>,
}

impl Grammar {
    /// Creates an empty context-free grammar.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the grammar: symbols, productions and the start symbol.
    pub fn clear(&mut self) {
        *self = Grammar::new();
    }

    /// Checks whether the grammar has no productions.
    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// Adds a nonterminal symbol, such as `'S'`.
    ///
    /// Fails if the character is not an uppercase letter or is already defined.
    pub fn add_nonterminal(&mut self, ch: char) -> Result<Symbol> {
        self.add_symbol(ch, SymbolKind::Nonterminal)
    }

    /// Adds a terminal symbol, such as `'a'`.
    ///
    /// Fails if the character is not a lowercase letter or a digit, if it is
    /// `l`, which stands for the empty string, or if it is already defined.
    pub fn add_terminal(&mut self, ch: char) -> Result<Symbol> {
        self.add_symbol(ch, SymbolKind::Terminal)
    }

    fn add_symbol(&mut self, ch: char, kind: SymbolKind) -> Result<Symbol> {
        let sym = match (Symbol::from_char(ch), SymbolKind::for_char(ch)) {
            (Some(sym), Some(allowed)) if allowed == kind => sym,
            _ => {
                return Err(GrammarError::validation(format!(
                    "`{}` cannot be a {}",
                    ch, kind
                )))
            }
        };
        if self.kind_of(sym).is_some() {
            return Err(GrammarError::validation(format!(
                "`{}` is already defined",
                ch
            )));
        }
        match kind {
            SymbolKind::Nonterminal => self.nonterminals.set(sym, true),
            SymbolKind::Terminal => self.terminals.set(sym, true),
        }
        Ok(sym)
    }

    /// Removes a nonterminal symbol together with its productions and every
    /// production that mentions it. If it was the start symbol, the start
    /// symbol is unset.
    pub fn remove_nonterminal(&mut self, ch: char) -> Result<()> {
        let sym = self.defined(ch, SymbolKind::Nonterminal)?;
        self.remove_symbols(&[sym].into_iter().collect());
        Ok(())
    }

    /// Removes a terminal symbol and every production that mentions it.
    pub fn remove_terminal(&mut self, ch: char) -> Result<()> {
        let sym = self.defined(ch, SymbolKind::Terminal)?;
        self.remove_symbols(&[sym].into_iter().collect());
        Ok(())
    }

    /// Chooses the start symbol among nonterminals.
    pub fn set_start_symbol(&mut self, ch: char) -> Result<()> {
        let sym = self.defined(ch, SymbolKind::Nonterminal)?;
        self.start = Some(sym);
        Ok(())
    }

    /// Returns the start symbol, if one was chosen.
    pub fn start_symbol(&self) -> Option<Symbol> {
        self.start
    }

    pub(crate) fn require_start(&self) -> Result<Symbol> {
        self.start
            .ok_or_else(|| GrammarError::precondition("the grammar has no start symbol"))
    }

    /// Adds a production such as `S ::= aB`. The empty string is written as
    /// `"l"` and may be added to any nonterminal.
    ///
    /// Fails if the left-hand side is not a nonterminal, if the right-hand
    /// side uses undefined symbols, or if the production already exists.
    pub fn add_production(&mut self, lhs: char, rhs: &str) -> Result<()> {
        let lhs = self.defined(lhs, SymbolKind::Nonterminal)?;
        let rhs = self.parse_rhs(rhs)?;
        if self.has_rule(lhs, &rhs) {
            return Err(GrammarError::validation(format!(
                "production {} already exists",
                CfgRule::new(lhs, rhs)
            )));
        }
        self.add_rule(lhs, rhs);
        Ok(())
    }

    /// Removes a production. Fails if it does not belong to the nonterminal.
    pub fn remove_production(&mut self, lhs: char, rhs: &str) -> Result<()> {
        let lhs_sym = self.defined(lhs, SymbolKind::Nonterminal)?;
        let rhs_parsed = self.parse_rhs(rhs)?;
        if self.remove_rule(lhs_sym, &rhs_parsed) {
            Ok(())
        } else {
            Err(GrammarError::validation(format!(
                "production {}::={} does not exist",
                lhs, rhs
            )))
        }
    }

    /// Parses a right-hand side made of defined symbols, or `"l"` for the
    /// empty string.
    pub fn parse_rhs(&self, text: &str) -> Result<Rhs> {
        if text.len() == 1 && text.starts_with(EPSILON_CHAR) {
            return Ok(Rhs::Epsilon);
        }
        if text.is_empty() {
            return Err(GrammarError::validation(
                "a right-hand side cannot be empty, the empty string is written as `l`",
            ));
        }
        let syms = text
            .chars()
            .map(|ch| {
                Symbol::from_char(ch)
                    .filter(|&sym| self.kind_of(sym).is_some())
                    .ok_or_else(|| {
                        GrammarError::validation(format!(
                            "`{}` in `{}` is not a symbol of the grammar",
                            ch, text
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Rhs::new(syms))
    }

    /// Returns the symbol for a character that is defined with the given kind.
    pub fn defined(&self, ch: char, kind: SymbolKind) -> Result<Symbol> {
        Symbol::from_char(ch)
            .filter(|&sym| self.kind_of(sym) == Some(kind))
            .ok_or_else(|| GrammarError::validation(format!("`{}` is not a {}", ch, kind)))
    }

    /// Returns the kind of a symbol, or `None` if the grammar does not define it.
    pub fn kind_of(&self, sym: Symbol) -> Option<SymbolKind> {
        if self.nonterminals[sym] {
            Some(SymbolKind::Nonterminal)
        } else if self.terminals[sym] {
            Some(SymbolKind::Terminal)
        } else {
            None
        }
    }

    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.nonterminals[sym]
    }

    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.terminals[sym]
    }

    /// Returns an iterator over nonterminals, in ascending order.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.nonterminals.iter()
    }

    /// Returns an iterator over terminals, in ascending order.
    pub fn terminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.terminals.iter()
    }

    /// Returns the set of nonterminals.
    pub fn nonterminal_set(&self) -> &SymbolBitSet {
        &self.nonterminals
    }

    /// Returns the set of terminals.
    pub fn terminal_set(&self) -> &SymbolBitSet {
        &self.terminals
    }

    /// Returns the set of all defined symbols.
    pub fn symbol_set(&self) -> SymbolBitSet {
        let mut set = self.nonterminals.clone();
        set.union(&self.terminals);
        set
    }

    /// Returns an iterator over the right-hand sides of a nonterminal, in
    /// ascending order.
    pub fn productions(&self, lhs: Symbol) -> impl Iterator<Item = &Rhs> + '_ {
        self.productions.get(&lhs).into_iter().flatten()
    }

    /// Returns an iterator over all rules, ordered by left-hand side.
    pub fn rules(&self) -> impl Iterator<Item = RuleRef<'_>> + '_ {
        self.productions
            .iter()
            .flat_map(|(&lhs, set)| set.iter().map(move |rhs| RuleRef { lhs, rhs }))
    }

    /// Returns the number of rules.
    pub fn num_rules(&self) -> usize {
        self.productions.values().map(|set| set.len()).sum()
    }

    /// Checks whether the nonterminal has the given right-hand side.
    pub fn has_rule(&self, lhs: Symbol, rhs: &Rhs) -> bool {
        self.productions
            .get(&lhs)
            .map_or(false, |set| set.contains(rhs))
    }

    /// Checks whether the symbol occurs on any right-hand side.
    pub fn occurs_on_rhs(&self, sym: Symbol) -> bool {
        self.rules().any(|rule| rule.rhs.mentions(sym))
    }

    /// Adds a rule without validation. Returns `true` if it was not present.
    pub(crate) fn add_rule(&mut self, lhs: Symbol, rhs: Rhs) -> bool {
        debug_assert!(self.nonterminals[lhs]);
        debug_assert!(rhs.syms().iter().all(|&sym| self.kind_of(sym).is_some()));
        self.productions.entry(lhs).or_default().insert(rhs)
    }

    /// Removes a rule. Returns `true` if it was present.
    pub(crate) fn remove_rule(&mut self, lhs: Symbol, rhs: &Rhs) -> bool {
        let removed = match self.productions.get_mut(&lhs) {
            Some(set) => set.remove(rhs),
            None => false,
        };
        self.prune(lhs);
        removed
    }

    /// Retains only the rules specified by the predicate.
    pub(crate) fn retain(&mut self, mut f: impl FnMut(Symbol, &Rhs) -> bool) {
        for (&lhs, set) in self.productions.iter_mut() {
            set.retain(|rhs| f(lhs, rhs));
        }
        self.productions.retain(|_, set| !set.is_empty());
    }

    /// Declares a fresh nonterminal without any validation of its character.
    pub(crate) fn add_fresh_nonterminal(&mut self, sym: Symbol) {
        debug_assert!(self.kind_of(sym).is_none());
        self.nonterminals.set(sym, true);
    }

    pub(crate) fn set_start(&mut self, start: Option<Symbol>) {
        self.start = start;
    }

    /// Removes symbols from both symbol sets, together with their productions
    /// and every rule that mentions them.
    pub(crate) fn remove_symbols(&mut self, removed: &SymbolBitSet) {
        for sym in removed {
            trace!("removing symbol {}", sym);
            self.productions.remove(&sym);
            if self.start == Some(sym) {
                self.start = None;
            }
        }
        self.nonterminals.subtract(removed);
        self.terminals.subtract(removed);
        self.retain(|_, rhs| rhs.syms().iter().all(|&sym| !removed[sym]));
    }

    fn prune(&mut self, lhs: Symbol) {
        let empty = self.productions.get(&lhs).map_or(false, BTreeSet::is_empty);
        if empty {
            self.productions.remove(&lhs);
        }
    }
}
