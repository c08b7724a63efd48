//! The CYK recognizer for grammars in Chomsky normal form.

use std::fmt;

use bit_matrix::BitMatrix;
use log::{debug, trace};

use crate::error::{GrammarError, Result};
use crate::grammar::Grammar;
use crate::symbol::repr::SymbolRepr;
use crate::symbol::{Symbol, NUM_SYMBOLS};

/// The table computed by the CYK algorithm for one word.
///
/// The cell for the inclusive span `i..=j` holds every nonterminal that derives
/// the part of the word between positions `i` and `j`.
#[derive(Clone, Debug)]
pub struct CykTable {
    word: Vec<Symbol>,
    /// One row per cell, `n * n` rows in total. Only cells with `i <= j` are used.
    cells: BitMatrix,
    derived: bool,
}

impl CykTable {
    fn row(&self, i: usize, j: usize) -> usize {
        i * self.word.len() + j
    }

    /// Returns the length of the word.
    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Returns the word this table was computed for.
    pub fn word(&self) -> &[Symbol] {
        &self.word[..]
    }

    /// Iterates over the nonterminals of the cell for the span `i..=j`, in
    /// ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `i > j` or `j` is out of bounds.
    pub fn cell(&self, i: usize, j: usize) -> impl Iterator<Item = Symbol> + '_ {
        assert!(i <= j && j < self.len(), "cell out of bounds");
        self.cells
            .iter_row(self.row(i, j))
            .enumerate()
            .filter_map(|(id, present)| {
                if present {
                    Symbol::from_id(id as SymbolRepr)
                } else {
                    None
                }
            })
    }

    /// Checks whether the start symbol derives the word.
    pub fn is_derived(&self) -> bool {
        self.derived
    }
}

impl fmt::Display for CykTable {
    /// Prints one line per span length, from the whole word down to single
    /// symbols, with one column per start position. The word is printed under
    /// the last line.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.len();
        let mut lines: Vec<Vec<String>> = vec![];
        for span in (1..=n).rev() {
            let line = (0..=n - span)
                .map(|i| {
                    let syms: Vec<String> = self
                        .cell(i, i + span - 1)
                        .map(|sym| sym.to_string())
                        .collect();
                    format!("{{{}}}", syms.join(","))
                })
                .collect();
            lines.push(line);
        }
        lines.push(self.word.iter().map(|sym| sym.to_string()).collect());

        let width = lines
            .iter()
            .flatten()
            .map(|cell| cell.len())
            .max()
            .unwrap_or(0);
        for line in &lines {
            let text: Vec<String> = line
                .iter()
                .map(|cell| format!("{:width$}", cell, width = width))
                .collect();
            writeln!(f, "{}", text.join(" ").trim_end())?;
        }
        Ok(())
    }
}

impl Grammar {
    /// Decides whether the word belongs to the language of the grammar.
    ///
    /// The grammar must be non-empty, have a start symbol and be in Chomsky
    /// normal form. Every character of the word must be a terminal. The empty
    /// word belongs to the language exactly when the start symbol has an
    /// epsilon rule.
    pub fn is_derived_using_cyk(&self, word: &str) -> Result<bool> {
        Ok(self.cyk_table(word)?.is_derived())
    }

    /// Renders the CYK table computed for the word.
    pub fn cyk_trace(&self, word: &str) -> Result<String> {
        Ok(self.cyk_table(word)?.to_string())
    }

    /// Computes the CYK table for the word.
    pub fn cyk_table(&self, word: &str) -> Result<CykTable> {
        if self.is_empty() {
            return Err(GrammarError::precondition("the grammar is empty"));
        }
        let start = self.require_start()?;
        if !self.is_cnf() {
            return Err(GrammarError::precondition(
                "the grammar is not in Chomsky normal form",
            ));
        }
        let word: Vec<Symbol> = word
            .chars()
            .map(|ch| {
                Symbol::from_char(ch)
                    .filter(|&sym| self.is_terminal(sym))
                    .ok_or_else(|| {
                        GrammarError::word(format!(
                            "`{}` in `{}` is not a terminal of the grammar",
                            ch, word
                        ))
                    })
            })
            .collect::<Result<_>>()?;

        let n = word.len();
        let mut table = CykTable {
            cells: BitMatrix::new(n * n, NUM_SYMBOLS),
            word,
            derived: false,
        };
        if n == 0 {
            table.derived = self.productions(start).any(|rhs| rhs.is_epsilon());
            return Ok(table);
        }

        let mut binary = vec![];
        for rule in self.rules() {
            match rule.rhs.syms() {
                &[terminal] => {
                    for (i, &sym) in table.word.iter().enumerate() {
                        if sym == terminal {
                            let row = table.row(i, i);
                            table.cells.set(row, rule.lhs.usize(), true);
                        }
                    }
                }
                &[left, right] => binary.push((rule.lhs, left, right)),
                _ => {}
            }
        }

        for span in 2..=n {
            for i in 0..=n - span {
                let j = i + span - 1;
                let target = table.row(i, j);
                for k in i..j {
                    let (left_row, right_row) = (table.row(i, k), table.row(k + 1, j));
                    for &(lhs, left, right) in &binary {
                        if table.cells[(left_row, left.usize())]
                            && table.cells[(right_row, right.usize())]
                        {
                            table.cells.set(target, lhs.usize(), true);
                        }
                    }
                }
                trace!(
                    "cyk cell {}..={}: {:?}",
                    i,
                    j,
                    table.cell(i, j).map(Symbol::to_char).collect::<String>()
                );
            }
        }

        table.derived = table.cells[(table.row(0, n - 1), start.usize())];
        debug!("cyk over a word of length {}: derived={}", n, table.derived);
        Ok(table)
    }
}
