//! Elimination of unit rules of the form `A ::= B`.

use std::ops;

use bit_matrix::BitMatrix;
use log::{debug, trace};

use crate::grammar::Grammar;
use crate::rule::{CfgRule, Rhs, RuleRef};
use crate::symbol::repr::SymbolRepr;
use crate::symbol::{Symbol, NUM_SYMBOLS};

/// A unit derivation matrix. Row `A` holds every nonterminal reachable from `A`
/// through zero or more unit rules, including `A` itself.
#[derive(Debug)]
pub struct UnitDerivationMatrix {
    bit_matrix: BitMatrix,
}

impl UnitDerivationMatrix {
    /// Computes unit closures for all nonterminals of the grammar.
    ///
    /// Each row is filled with a worklist. A symbol already present in the row
    /// is never pushed again, so cycles such as `A ::= B`, `B ::= A` terminate.
    pub fn new(grammar: &Grammar) -> Self {
        let mut direct: Vec<Vec<Symbol>> = vec![vec![]; NUM_SYMBOLS];
        for rule in grammar.rules() {
            if let Some(target) = unit_target(grammar, &rule) {
                direct[rule.lhs.usize()].push(target);
            }
        }

        let mut bit_matrix = BitMatrix::new(NUM_SYMBOLS, NUM_SYMBOLS);
        let mut work_stack = vec![];
        for origin in grammar.nonterminals() {
            bit_matrix.set(origin.usize(), origin.usize(), true);
            work_stack.push(origin);
            while let Some(work_sym) = work_stack.pop() {
                for &target in &direct[work_sym.usize()] {
                    if !bit_matrix[(origin.usize(), target.usize())] {
                        bit_matrix.set(origin.usize(), target.usize(), true);
                        work_stack.push(target);
                    }
                }
            }
        }

        UnitDerivationMatrix { bit_matrix }
    }

    /// Creates an iterator over symbols which appear in the given row.
    pub fn iter_row_syms(&self, row: Symbol) -> impl Iterator<Item = Symbol> + '_ {
        self.bit_matrix
            .iter_row(row.usize())
            .enumerate()
            .filter_map(|(id, present)| {
                if present {
                    Symbol::from_id(id as SymbolRepr)
                } else {
                    None
                }
            })
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<(Symbol, Symbol)> for UnitDerivationMatrix {
    type Output = bool;
    fn index(&self, index: (Symbol, Symbol)) -> &Self::Output {
        if self.bit_matrix[(index.0.usize(), index.1.usize())] {
            &TRUE
        } else {
            &FALSE
        }
    }
}

/// Returns `B` if the rule has the form `A ::= B` for a nonterminal `B`.
fn unit_target(grammar: &Grammar, rule: &RuleRef) -> Option<Symbol> {
    rule.rhs.single().filter(|&sym| grammar.is_nonterminal(sym))
}

impl Grammar {
    /// Checks whether the grammar has a rule of the form `A ::= B`.
    pub fn has_unit_productions(&self) -> bool {
        self.rules().any(|rule| unit_target(self, &rule).is_some())
    }

    /// Replaces unit rules with the non-unit rules reachable through chains
    /// of unit rules. Epsilon rules are not inherited. Returns the removed
    /// unit rules.
    ///
    /// A nonterminal which reaches no non-unit rule is left without
    /// productions.
    pub fn remove_unit_productions(&mut self) -> Vec<CfgRule> {
        let unit_derivation = UnitDerivationMatrix::new(self);

        let mut inherited: Vec<(Symbol, Rhs)> = vec![];
        for lhs in self.nonterminals() {
            for target in unit_derivation.iter_row_syms(lhs).filter(|&sym| sym != lhs) {
                trace!("unit chain {} =>* {}", lhs, target);
                inherited.extend(
                    self.rules()
                        .filter(|rule| {
                            rule.lhs == target
                                && !rule.rhs.is_epsilon()
                                && unit_target(self, rule).is_none()
                        })
                        .map(|rule| (lhs, rule.rhs.clone())),
                );
            }
        }

        let removed: Vec<CfgRule> = self
            .rules()
            .filter(|rule| unit_target(self, rule).is_some())
            .map(RuleRef::to_rule)
            .collect();

        for (lhs, rhs) in inherited {
            self.add_rule(lhs, rhs);
        }
        for rule in &removed {
            self.remove_rule(rule.lhs, &rule.rhs);
        }

        debug!("removed {} unit rules", removed.len());
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_derivation_cycle() {
        let grammar = Grammar::from_text("S::=A\nA::=B|a\nB::=A|S|b", 'S').unwrap();
        let matrix = UnitDerivationMatrix::new(&grammar);
        let [s, a, b] = ['S', 'A', 'B'].map(|ch| Symbol::from_char(ch).unwrap());
        for &(from, to) in &[(s, a), (s, b), (a, b), (b, a), (a, s), (s, s)] {
            assert!(matrix[(from, to)]);
        }
        let row: String = matrix.iter_row_syms(a).map(Symbol::to_char).collect();
        assert_eq!(row, "ABS");
    }
}
