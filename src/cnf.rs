//! Chomsky normal form: validation and transformation.
//!
//! A grammar is in Chomsky normal form when every rule is either `A ::= BC`
//! for two nonterminals or `A ::= a` for a terminal. The start symbol may also
//! have the rule `S ::= ε`.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::error::{GrammarError, Result};
use crate::grammar::Grammar;
use crate::rule::{CfgRule, Rhs, RuleRef};
use crate::symbol::{Symbol, SymbolKind, SymbolSource};

impl Grammar {
    /// Checks a single production for Chomsky normal form.
    ///
    /// Undefined symbols are reported as validation errors. A production of
    /// any other shape than `A ::= BC`, `A ::= a` or `S ::= l` for the start
    /// symbol is a precondition error.
    pub fn check_cnf_production(&self, lhs: char, rhs: &str) -> Result<()> {
        let lhs_sym = self.defined(lhs, SymbolKind::Nonterminal)?;
        let rhs_parsed = self.parse_rhs(rhs)?;
        if self.is_cnf_rule(lhs_sym, &rhs_parsed) {
            Ok(())
        } else {
            Err(GrammarError::precondition(format!(
                "{}::={} is not in Chomsky normal form",
                lhs, rhs
            )))
        }
    }

    /// Checks whether every rule is in Chomsky normal form.
    pub fn is_cnf(&self) -> bool {
        self.rules()
            .all(|rule| self.is_cnf_rule(rule.lhs, rule.rhs))
    }

    fn is_cnf_rule(&self, lhs: Symbol, rhs: &Rhs) -> bool {
        match rhs.syms() {
            &[] => self.start_symbol() == Some(lhs),
            &[terminal] => self.is_terminal(terminal),
            &[left, right] => self.is_nonterminal(left) && self.is_nonterminal(right),
            _ => false,
        }
    }

    /// Rewrites a well-formed grammar into an equivalent grammar in Chomsky
    /// normal form. Returns the introduced nonterminals in order of creation.
    ///
    /// Fresh nonterminals are unused uppercase letters, from `Z` downward. If
    /// the grammar is not well-formed or there are not enough free letters,
    /// this fails and the grammar is left unchanged.
    pub fn transform_into_cnf(&mut self) -> Result<Vec<Symbol>> {
        if !self.is_well_formed() {
            return Err(GrammarError::precondition(
                "only a well-formed grammar can be transformed into Chomsky normal form",
            ));
        }
        let mut transform = CnfTransform {
            grammar: self.clone(),
            source: SymbolSource::new(self.symbol_set()),
            fresh: vec![],
        };
        transform.isolate_start()?;
        transform.isolate_terminals()?;
        transform.binarize()?;
        debug_assert!(transform.grammar.is_cnf());
        debug!(
            "introduced {} nonterminals for Chomsky normal form",
            transform.fresh.len()
        );
        *self = transform.grammar;
        Ok(transform.fresh)
    }
}

/// Works on a copy of the grammar, so a failure never leaves it half done.
struct CnfTransform {
    grammar: Grammar,
    source: SymbolSource,
    fresh: Vec<Symbol>,
}

impl CnfTransform {
    fn fresh_nonterminal(&mut self) -> Result<Symbol> {
        let sym = self.source.next_sym().ok_or_else(|| {
            GrammarError::precondition("no uppercase letter is left for a new nonterminal")
        })?;
        trace!("fresh nonterminal {}", sym);
        self.grammar.add_fresh_nonterminal(sym);
        self.fresh.push(sym);
        Ok(sym)
    }

    /// If the start symbol occurs on a right-hand side, a fresh start symbol
    /// takes over its right-hand sides and its epsilon rule.
    fn isolate_start(&mut self) -> Result<()> {
        let start = self.grammar.require_start()?;
        if !self.grammar.occurs_on_rhs(start) {
            return Ok(());
        }
        let new_start = self.fresh_nonterminal()?;
        let copied: Vec<Rhs> = self.grammar.productions(start).cloned().collect();
        for rhs in copied {
            self.grammar.add_rule(new_start, rhs);
        }
        self.grammar.remove_rule(start, &Rhs::Epsilon);
        self.grammar.set_start(Some(new_start));
        Ok(())
    }

    /// Replaces terminals in right-hand sides of length two or more with
    /// nonterminals that derive only that terminal.
    fn isolate_terminals(&mut self) -> Result<()> {
        let start = self.grammar.start_symbol();
        let mut wrappers: BTreeMap<Symbol, Symbol> = BTreeMap::new();
        for lhs in self.grammar.nonterminals() {
            let mut rhs_iter = self.grammar.productions(lhs);
            if let (Some(rhs), None) = (rhs_iter.next(), rhs_iter.next()) {
                match rhs.single() {
                    Some(terminal) if self.grammar.is_terminal(terminal) && Some(lhs) != start => {
                        wrappers.entry(terminal).or_insert(lhs);
                    }
                    _ => {}
                }
            }
        }

        let mixed: Vec<CfgRule> = self
            .grammar
            .rules()
            .filter(|rule| {
                rule.rhs.len() >= 2
                    && rule
                        .rhs
                        .syms()
                        .iter()
                        .any(|&sym| self.grammar.is_terminal(sym))
            })
            .map(RuleRef::to_rule)
            .collect();

        for rule in mixed {
            let mut syms = rule.rhs.syms().to_vec();
            for sym in syms.iter_mut() {
                let terminal = *sym;
                if self.grammar.is_terminal(terminal) {
                    *sym = match wrappers.get(&terminal) {
                        Some(&wrapper) => wrapper,
                        None => {
                            let wrapper = self.fresh_nonterminal()?;
                            self.grammar.add_rule(wrapper, Rhs::new([terminal]));
                            wrappers.insert(terminal, wrapper);
                            wrapper
                        }
                    };
                }
            }
            self.grammar.remove_rule(rule.lhs, &rule.rhs);
            self.grammar.add_rule(rule.lhs, Rhs::new(syms));
        }
        Ok(())
    }

    /// Splits right-hand sides longer than two symbols into chains of binary
    /// rules. Equal suffixes share one nonterminal.
    fn binarize(&mut self) -> Result<()> {
        let long: Vec<CfgRule> = self
            .grammar
            .rules()
            .filter(|rule| rule.rhs.len() > 2)
            .map(RuleRef::to_rule)
            .collect();

        let mut suffixes: BTreeMap<Vec<Symbol>, Symbol> = BTreeMap::new();
        for rule in long {
            let syms = rule.rhs.syms();
            let mut tail: Option<Symbol> = None;
            for pos in (1..syms.len() - 1).rev() {
                let suffix = syms[pos..].to_vec();
                let sym = match suffixes.get(&suffix) {
                    Some(&sym) => sym,
                    None => {
                        let sym = self.fresh_nonterminal()?;
                        let second = tail.unwrap_or(syms[pos + 1]);
                        self.grammar.add_rule(sym, Rhs::new([syms[pos], second]));
                        suffixes.insert(suffix, sym);
                        sym
                    }
                };
                tail = Some(sym);
            }
            if let Some(tail) = tail {
                self.grammar.remove_rule(rule.lhs, &rule.rhs);
                self.grammar.add_rule(rule.lhs, Rhs::new([syms[0], tail]));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binarize_shares_suffixes() {
        let text = "S::=ABCD|BCD\nA::=a\nB::=b\nC::=c\nD::=d";
        let mut grammar = Grammar::from_text(text, 'S').unwrap();
        let fresh = grammar.transform_into_cnf().unwrap();
        let fresh: String = fresh.into_iter().map(Symbol::to_char).collect();
        assert_eq!(fresh, "ZY");
        assert_eq!(grammar.productions_to_string('S').unwrap(), "S::=AY|BZ");
        assert_eq!(grammar.productions_to_string('Y').unwrap(), "Y::=BZ");
        assert_eq!(grammar.productions_to_string('Z').unwrap(), "Z::=CD");
        assert!(grammar.is_cnf());
    }
}
