//! Sets of symbols in the form of bit vectors over the whole alphabet.

use std::iter;
use std::ops;

use bit_vec::BitVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::symbol::repr::SymbolRepr;
use crate::symbol::{Symbol, NUM_SYMBOLS};

/// A set of symbols in the form of a bit vector.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl Default for SymbolBitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet`.
    pub fn new() -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(NUM_SYMBOLS, false),
        }
    }

    /// Adds or removes a symbol.
    pub fn set(&mut self, sym: Symbol, elem: bool) {
        self.bit_vec.set(sym.usize(), elem);
    }

    /// Adds a symbol. Returns `true` if it was not present.
    pub fn insert(&mut self, sym: Symbol) -> bool {
        let fresh = !self[sym];
        self.set(sym, true);
        fresh
    }

    /// Checks whether a given symbol is in this set.
    pub fn contains(&self, sym: Symbol) -> bool {
        self.bit_vec[sym.usize()]
    }

    /// Removes every symbol.
    pub fn clear(&mut self) {
        self.bit_vec = BitVec::from_elem(NUM_SYMBOLS, false);
    }

    /// Adds every symbol of `other`.
    pub fn union(&mut self, other: &SymbolBitSet) {
        self.bit_vec.or(&other.bit_vec);
    }

    /// Removes every symbol of `other`.
    pub fn subtract(&mut self, other: &SymbolBitSet) {
        self.bit_vec.difference(&other.bit_vec);
    }

    /// Checks whether the two sets have no symbol in common.
    pub fn is_disjoint(&self, other: &SymbolBitSet) -> bool {
        self.bit_vec
            .blocks()
            .zip(other.bit_vec.blocks())
            .all(|(a, b)| a & b == 0)
    }

    /// Returns the number of symbols in the set.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.bit_vec.none()
    }

    /// Iterates over symbols in the set, in ascending order.
    pub fn iter(&self) -> Iter {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;
    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Symbol::from_id(id as SymbolRepr);
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a SymbolBitSet {
    type Item = Symbol;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Symbol> for SymbolBitSet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut set = SymbolBitSet::new();
        for sym in iter {
            set.set(sym, true);
        }
        set
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.bit_vec[index.usize()] {
            &TRUE
        } else {
            &FALSE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syms(chars: &str) -> SymbolBitSet {
        chars.chars().filter_map(Symbol::from_char).collect()
    }

    #[test]
    fn test_set_operations() {
        let mut set = syms("ABa");
        assert!(set.contains(Symbol::from_char('A').unwrap()));
        assert!(!set[Symbol::from_char('b').unwrap()]);
        assert!(!set.insert(Symbol::from_char('a').unwrap()));
        assert!(set.insert(Symbol::from_char('b').unwrap()));
        assert_eq!(set.count(), 4);

        set.subtract(&syms("Bb"));
        assert_eq!(set, syms("Aa"));
        assert!(set.is_disjoint(&syms("Cc")));
        assert!(!set.is_disjoint(&syms("ZA")));

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_iter_is_ascending() {
        let set = syms("zS0A");
        let chars: String = set.iter().map(Symbol::to_char).collect();
        assert_eq!(chars, "0ASz");
    }
}
