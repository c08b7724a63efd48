//! This module defines grammar rules. Each rule in a context-free grammar
//! consists of a single symbol on its left-hand side and either the empty
//! string or an array of symbols on its right-hand side.

use std::fmt;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::symbol::{Symbol, EPSILON_CHAR};

/// The right-hand side of a rule.
///
/// The empty string has its own case, so an empty production set and a set
/// holding only the epsilon rule can never be confused.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Rhs {
    /// The empty string.
    Epsilon,
    /// A non-empty sequence of symbols.
    Symbols(Rc<[Symbol]>),
}

impl Rhs {
    /// Creates a right-hand side from a sequence of symbols. An empty sequence
    /// gives `Rhs::Epsilon`.
    pub fn new(syms: impl AsRef<[Symbol]>) -> Self {
        let syms = syms.as_ref();
        if syms.is_empty() {
            Rhs::Epsilon
        } else {
            Rhs::Symbols(syms.into())
        }
    }

    /// Returns the symbols of this right-hand side. Empty for `Rhs::Epsilon`.
    pub fn syms(&self) -> &[Symbol] {
        match self {
            Rhs::Epsilon => &[],
            Rhs::Symbols(syms) => &syms[..],
        }
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Rhs::Epsilon)
    }

    /// Returns the only symbol, if this right-hand side has exactly one.
    pub fn single(&self) -> Option<Symbol> {
        match self.syms() {
            &[sym] => Some(sym),
            _ => None,
        }
    }

    /// Checks whether the given symbol occurs on this right-hand side.
    pub fn mentions(&self, sym: Symbol) -> bool {
        self.syms().contains(&sym)
    }

    pub fn len(&self) -> usize {
        self.syms().len()
    }
}

impl fmt::Display for Rhs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rhs::Epsilon => write!(f, "{}", EPSILON_CHAR),
            Rhs::Symbols(syms) => syms.iter().try_for_each(|sym| write!(f, "{}", sym)),
        }
    }
}

/// An owned grammar rule. Transformations report the rules they remove with it.
///
/// Displays as `A::=rhs`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CfgRule {
    /// The rule's left-hand side symbol.
    pub lhs: Symbol,
    /// The rule's right-hand side.
    pub rhs: Rhs,
}

impl CfgRule {
    /// Creates a new rule.
    pub fn new(lhs: Symbol, rhs: Rhs) -> Self {
        CfgRule { lhs, rhs }
    }
}

impl fmt::Display for CfgRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}::={}", self.lhs, self.rhs)
    }
}

/// References rule's components.
#[derive(Copy, Clone, Debug)]
pub struct RuleRef<'a> {
    /// Left-hand side.
    pub lhs: Symbol,
    /// Right-hand side.
    pub rhs: &'a Rhs,
}

impl<'a> RuleRef<'a> {
    /// Converts into an owned rule.
    pub fn to_rule(self) -> CfgRule {
        CfgRule::new(self.lhs, self.rhs.clone())
    }
}
