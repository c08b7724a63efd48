use std::num::NonZeroU8;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub type SymbolRepr = u8;

/// Number of distinct symbols: `0-9`, `A-Z` and `a-z`.
pub const NUM_SYMBOLS: usize = 62;

/// A common grammar symbol type.
///
/// Each symbol stands for one character of the grammar alphabet. The numeric
/// order of symbols follows the order of their characters.
///
/// With the `serde` feature, a symbol is serialized as its character.
#[derive(Clone, Copy, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Symbol {
    n: NonZeroU8,
}

impl Symbol {
    /// Returns the symbol for the given character, if the character belongs to
    /// the grammar alphabet.
    pub fn from_char(ch: char) -> Option<Self> {
        let id = match ch {
            '0'..='9' => ch as SymbolRepr - b'0',
            'A'..='Z' => ch as SymbolRepr - b'A' + 10,
            'a'..='z' => ch as SymbolRepr - b'a' + 36,
            _ => return None,
        };
        Self::from_id(id)
    }

    /// Returns the symbol with the given ID.
    pub(crate) fn from_id(id: SymbolRepr) -> Option<Self> {
        if (id as usize) < NUM_SYMBOLS {
            NonZeroU8::new(id + 1).map(|n| Symbol { n })
        } else {
            None
        }
    }

    /// Returns the character this symbol stands for.
    pub fn to_char(self) -> char {
        let id = self.id();
        let base = match id {
            0..=9 => b'0',
            10..=35 => b'A' - 10,
            _ => b'a' - 36,
        };
        (base + id) as char
    }

    #[inline]
    pub(crate) fn id(self) -> SymbolRepr {
        self.n.get() - 1
    }
}

#[cfg(feature = "serde")]
impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.to_char())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ch = char::deserialize(deserializer)?;
        Symbol::from_char(ch)
            .ok_or_else(|| de::Error::custom(format!("`{}` is not a grammar symbol", ch)))
    }
}
