#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use cfg_cnf::{Grammar, Symbol};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load(text: &str) -> Grammar {
    init_logger();
    Grammar::from_text(text, 'S').unwrap()
}

pub fn syms(text: &str) -> Vec<Symbol> {
    text.chars()
        .map(|ch| Symbol::from_char(ch).unwrap())
        .collect()
}

pub fn chars(syms: &[Symbol]) -> String {
    syms.iter().map(|sym| sym.to_char()).collect()
}

/// Compares the rendered rules of two grammars, ignoring line order and blank lines.
pub fn assert_eq_rules(left: &Grammar, right: &str) {
    let lines = |text: &str| -> BTreeSet<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    };
    let rules_i = lines(&left.to_string());
    let rules_j = lines(right);
    if rules_i != rules_j {
        eprintln!("Left:\n{}", left);
        eprintln!("Right:\n{}", right);
        panic!("Rules expected to be equal");
    }
}

/// Every word of length at most `max_len` that the start symbol derives.
///
/// Computed as a fixpoint over bounded word sets for each nonterminal, so it
/// works for any grammar, including ones with epsilon rules and unit cycles.
pub fn words_up_to(grammar: &Grammar, max_len: usize) -> BTreeSet<String> {
    let mut words: BTreeMap<Symbol, BTreeSet<String>> = BTreeMap::new();
    let mut changed = true;
    while changed {
        changed = false;
        for rule in grammar.rules() {
            let mut partial: BTreeSet<String> = [String::new()].into_iter().collect();
            for &sym in rule.rhs.syms() {
                let options: BTreeSet<String> = if grammar.is_terminal(sym) {
                    [sym.to_char().to_string()].into_iter().collect()
                } else {
                    words.get(&sym).cloned().unwrap_or_default()
                };
                partial = partial
                    .iter()
                    .flat_map(|prefix| {
                        options
                            .iter()
                            .map(move |suffix| format!("{}{}", prefix, suffix))
                    })
                    .filter(|word| word.len() <= max_len)
                    .collect();
            }
            let entry = words.entry(rule.lhs).or_default();
            for word in partial {
                changed |= entry.insert(word);
            }
        }
    }
    grammar
        .start_symbol()
        .and_then(|start| words.remove(&start))
        .unwrap_or_default()
}

/// Every word over the alphabet with length at most `max_len`, the empty word included.
pub fn all_words(alphabet: &str, max_len: usize) -> Vec<String> {
    let mut result = vec![String::new()];
    let mut layer = vec![String::new()];
    for _ in 0..max_len {
        layer = layer
            .iter()
            .flat_map(|prefix| alphabet.chars().map(move |ch| format!("{}{}", prefix, ch)))
            .collect();
        result.extend(layer.iter().cloned());
    }
    result
}
