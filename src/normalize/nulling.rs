//! Elimination of rules of the form `A ::= ε`.
//!
//! The language is preserved. The only epsilon rule left is one on the start
//! symbol, and only if the start symbol could derive the empty string.

use bit_vec::BitVec;
use log::{debug, trace};

use crate::grammar::Grammar;
use crate::rule::Rhs;
use crate::symbol::{Symbol, SymbolBitSet};

/// An iterator over the variants of a right-hand side obtained by deleting a
/// non-empty subset of the occurrences of nullable symbols.
///
/// Subsets are enumerated iteratively, counting in binary over the nullable
/// positions. Variants that would be empty are skipped.
pub struct NullableVariants<'a> {
    rhs: &'a [Symbol],
    /// For each RHS position, its index among nullable positions.
    slots: Vec<Option<usize>>,
    /// For each nullable position, whether the current subset deletes it.
    deleted: BitVec,
}

impl<'a> NullableVariants<'a> {
    /// Creates an iterator over the variants of `rhs`.
    pub fn new(rhs: &'a [Symbol], nullable: &SymbolBitSet) -> Self {
        let mut num_positions = 0;
        let slots = rhs
            .iter()
            .map(|&sym| {
                if nullable[sym] {
                    num_positions += 1;
                    Some(num_positions - 1)
                } else {
                    None
                }
            })
            .collect();
        NullableVariants {
            rhs,
            slots,
            deleted: BitVec::from_elem(num_positions, false),
        }
    }

    /// Moves on to the next subset. Returns `false` after the last one.
    fn advance(&mut self) -> bool {
        match self.deleted.iter().position(|is_deleted| !is_deleted) {
            Some(first_kept) => {
                for lower in 0..first_kept {
                    self.deleted.set(lower, false);
                }
                self.deleted.set(first_kept, true);
                true
            }
            None => false,
        }
    }
}

impl<'a> Iterator for NullableVariants<'a> {
    type Item = Rhs;

    fn next(&mut self) -> Option<Rhs> {
        while self.advance() {
            let variant: Vec<Symbol> = self
                .rhs
                .iter()
                .zip(&self.slots)
                .filter(|&(_, slot)| slot.map_or(true, |pos| !self.deleted[pos]))
                .map(|(&sym, _)| sym)
                .collect();
            if !variant.is_empty() {
                return Some(Rhs::new(variant));
            }
        }
        None
    }
}

impl Grammar {
    /// Checks whether epsilon rule elimination has work to do: some
    /// nonterminal other than the start symbol has an epsilon rule, or some
    /// variant made by deleting nullable symbols is missing from the grammar
    /// and not subsumed.
    ///
    /// The single epsilon rule on the start symbol left behind by
    /// [`fn remove_lambda_productions`] does not count.
    ///
    /// [`fn remove_lambda_productions`]: Self::remove_lambda_productions
    pub fn has_lambda_productions(&self) -> bool {
        let start = self.start_symbol();
        if self
            .rules()
            .any(|rule| rule.rhs.is_epsilon() && Some(rule.lhs) != start)
        {
            return true;
        }
        let nullable = self.nullable_symbols();
        self.rules().any(|rule| {
            NullableVariants::new(rule.rhs.syms(), &nullable)
                .any(|variant| self.lacks_variant(rule.lhs, &variant))
        })
    }

    /// A unit variant `A ::= B` is subsumed when every non-epsilon right-hand
    /// side of `B` is already a right-hand side of `A`. Unit rule elimination
    /// would replace it with exactly those.
    fn lacks_variant(&self, lhs: Symbol, variant: &Rhs) -> bool {
        if self.has_rule(lhs, variant) {
            return false;
        }
        match variant.single() {
            Some(target) if self.is_nonterminal(target) => !self
                .productions(target)
                .filter(|rhs| !rhs.is_epsilon())
                .all(|rhs| self.has_rule(lhs, rhs)),
            _ => true,
        }
    }

    /// Eliminates epsilon rules while preserving the language.
    ///
    /// For every rule, each variant obtained by deleting nullable symbols is
    /// added, unless it is a subsumed unit variant. Then, all epsilon rules
    /// are removed. If the start symbol is
    /// nullable, a single rule `S ::= ε` is added back.
    ///
    /// Returns the nonterminals, in ascending order, which had an epsilon rule
    /// or received new variants.
    pub fn remove_lambda_productions(&mut self) -> Vec<Symbol> {
        let nullable = self.nullable_symbols();
        trace!(
            "nullable symbols: {:?}",
            nullable.iter().map(Symbol::to_char).collect::<String>()
        );

        let mut modified = SymbolBitSet::new();
        let mut variants = vec![];
        for rule in self.rules() {
            if rule.rhs.is_epsilon() {
                modified.set(rule.lhs, true);
            }
            for variant in NullableVariants::new(rule.rhs.syms(), &nullable) {
                if self.lacks_variant(rule.lhs, &variant) {
                    variants.push((rule.lhs, variant));
                }
            }
        }
        for (lhs, variant) in variants {
            if self.add_rule(lhs, variant.clone()) {
                trace!("added variant {}::={}", lhs, variant);
                modified.set(lhs, true);
            }
        }

        self.retain(|_, rhs| !rhs.is_epsilon());

        if let Some(start) = self.start_symbol() {
            if nullable[start] {
                self.add_rule(start, Rhs::Epsilon);
            }
        }

        debug!(
            "epsilon elimination modified {} nonterminals",
            modified.count()
        );
        modified.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants(rhs: &str, nullable: &str) -> Vec<String> {
        let rhs: Vec<Symbol> = rhs.chars().filter_map(Symbol::from_char).collect();
        let nullable: SymbolBitSet = nullable.chars().filter_map(Symbol::from_char).collect();
        let mut result: Vec<String> = NullableVariants::new(&rhs, &nullable)
            .map(|variant| variant.to_string())
            .collect();
        result.sort();
        result
    }

    #[test]
    fn test_no_nullable_positions() {
        assert!(variants("aBc", "").is_empty());
    }

    #[test]
    fn test_single_nullable_position() {
        assert_eq!(variants("aB", "B"), ["a"]);
        assert!(variants("B", "B").is_empty());
    }

    #[test]
    fn test_power_set() {
        assert_eq!(variants("AbA", "A"), ["Ab", "b", "bA"]);
        assert_eq!(variants("ABC", "ABC").len(), 6);
    }
}
