//! Library for context-free grammars over single-character symbols: normalization into
//! well-formed grammars, transformation into Chomsky normal form, and recognition with the
//! CYK algorithm.
//!
//! ```
//! use cfg_cnf::Grammar;
//!
//! let mut grammar = Grammar::from_text("S::=aSb|ab|l", 'S').unwrap();
//! grammar.normalize().unwrap();
//! grammar.transform_into_cnf().unwrap();
//! assert!(grammar.is_derived_using_cyk("aabb").unwrap());
//! assert!(grammar.is_derived_using_cyk("").unwrap());
//! assert!(!grammar.is_derived_using_cyk("aab").unwrap());
//! ```

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

pub mod cnf;
pub mod cyk;
pub mod error;
mod format;
mod grammar;
pub mod load;
pub mod normalize;
pub mod rhs_closure;
pub mod rule;
pub mod symbol;

pub use crate::cyk::CykTable;
pub use crate::error::{ErrorKind, GrammarError, Result};
pub use crate::grammar::Grammar;
pub use crate::load::LoadError;
pub use crate::normalize::NormalizeReport;
pub use crate::rule::{CfgRule, Rhs, RuleRef};
pub use crate::symbol::{Symbol, SymbolBitSet, SymbolKind, EPSILON_CHAR};
