//! Elimination of useless rules of the form `A ::= A`.

use log::debug;

use crate::grammar::Grammar;
use crate::rule::{CfgRule, RuleRef};

fn is_self_rule(rule: &RuleRef) -> bool {
    rule.rhs.single() == Some(rule.lhs)
}

impl Grammar {
    /// Checks whether the grammar has a rule of the form `A ::= A`.
    pub fn has_useless_productions(&self) -> bool {
        self.rules().any(|rule| is_self_rule(&rule))
    }

    /// Removes every rule of the form `A ::= A`. Returns the removed rules.
    ///
    /// A nonterminal left without productions stays in the grammar.
    pub fn remove_useless_productions(&mut self) -> Vec<CfgRule> {
        let removed: Vec<CfgRule> = self
            .rules()
            .filter(is_self_rule)
            .map(RuleRef::to_rule)
            .collect();
        for rule in &removed {
            self.remove_rule(rule.lhs, &rule.rhs);
        }
        debug!("removed {} useless rules", removed.len());
        removed
    }
}
