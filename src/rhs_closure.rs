//! RHS closure. In some sense, it is a reverse of breadth first search.

use crate::grammar::Grammar;
use crate::rule::RuleRef;
use crate::symbol::{Symbol, SymbolBitSet};

/// Computes properties that hold for the LHS of a rule whenever they hold for
/// every symbol on its RHS. Nullability and productivity are such properties.
pub struct RhsClosure<'a> {
    inverse_derivation: Vec<Derivation<'a>>,
    work_stack: Vec<Symbol>,
}

/// Records that `sym` occurs on the RHS of `rule_ref`.
#[derive(Clone, Copy)]
struct Derivation<'a> {
    sym: Symbol,
    rule_ref: RuleRef<'a>,
}

impl<'a> RhsClosure<'a> {
    /// Records information which is needed to calculate the RHS transitive closure.
    pub fn new(grammar: &'a Grammar) -> Self {
        let mut inverse_derivation = Vec::with_capacity(2 * grammar.num_rules());
        for rule_ref in grammar.rules() {
            let mut syms = rule_ref.rhs.syms().to_vec();
            syms.sort();
            syms.dedup();
            inverse_derivation.extend(syms.into_iter().map(|sym| Derivation { sym, rule_ref }));
        }

        inverse_derivation.sort_by_key(|derivation| derivation.sym);

        RhsClosure {
            inverse_derivation,
            work_stack: vec![],
        }
    }

    /// Calculates the RHS transitive closure. The `property` set grows until
    /// no rule whose RHS symbols all have the property has an LHS without it.
    ///
    /// Every symbol enters the work stack at most once after it gains the
    /// property, so this terminates after at most one pass per symbol.
    pub fn rhs_closure(&mut self, property: &mut SymbolBitSet) {
        self.work_stack.extend(property.iter());

        while let Some(work_sym) = self.work_stack.pop() {
            for derivation in find(&self.inverse_derivation[..], work_sym) {
                let lhs = derivation.rule_ref.lhs;
                if !property[lhs]
                    && derivation
                        .rule_ref
                        .rhs
                        .syms()
                        .iter()
                        .all(|&sym| property[sym])
                {
                    property.set(lhs, true);
                    self.work_stack.push(lhs);
                }
            }
        }
    }
}

fn find<'a, 'b>(derivations: &'b [Derivation<'a>], sym: Symbol) -> &'b [Derivation<'a>] {
    let start = derivations.partition_point(|derivation| derivation.sym < sym);
    let len = derivations[start..].partition_point(|derivation| derivation.sym == sym);
    &derivations[start..start + len]
}

impl Grammar {
    /// Returns the set of nonterminals which can derive the empty string.
    pub fn nullable_symbols(&self) -> SymbolBitSet {
        let mut nullable: SymbolBitSet = self
            .rules()
            .filter(|rule| rule.rhs.is_epsilon())
            .map(|rule| rule.lhs)
            .collect();
        RhsClosure::new(self).rhs_closure(&mut nullable);
        nullable
    }

    /// Returns the set of symbols which can derive a string of terminals:
    /// every terminal, and every nonterminal with such a derivation. The empty
    /// string counts as a string of terminals.
    pub fn productive_symbols(&self) -> SymbolBitSet {
        let mut productive = self.terminal_set().clone();
        for rule in self.rules().filter(|rule| rule.rhs.is_epsilon()) {
            productive.set(rule.lhs, true);
        }
        RhsClosure::new(self).rhs_closure(&mut productive);
        productive
    }
}

#[cfg(test)]
mod tests {
    use crate::Grammar;

    #[test]
    fn test_nullable_closure() {
        let grammar = Grammar::from_text("S::=AB|a\nA::=l|BB\nB::=A|b\nC::=Cc", 'S').unwrap();
        let nullable: String = grammar
            .nullable_symbols()
            .iter()
            .map(|sym| sym.to_char())
            .collect();
        assert_eq!(nullable, "ABS");
    }

    #[test]
    fn test_productive_closure() {
        let text = "S::=AB|C\nA::=a\nB::=Ab\nC::=Cc|D\nD::=C";
        let grammar = Grammar::from_text(text, 'S').unwrap();
        let productive = grammar.productive_symbols();
        let nonterminals: String = productive
            .iter()
            .filter(|&sym| grammar.is_nonterminal(sym))
            .map(|sym| sym.to_char())
            .collect();
        assert_eq!(nonterminals, "ABS");
    }
}
