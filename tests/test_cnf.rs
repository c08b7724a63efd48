use cfg_cnf::{ErrorKind, Grammar, Symbol};
use test_case::test_case;

mod support;

use support::{chars, load};

#[test_case('S', "AB" ; "pair of nonterminals")]
#[test_case('A', "a" ; "single terminal")]
#[test_case('S', "l" ; "epsilon on start")]
fn test_cnf_production_accepted(lhs: char, rhs: &str) {
    let grammar = load("S::=AB|l\nA::=a\nB::=b");
    assert_eq!(grammar.check_cnf_production(lhs, rhs), Ok(()));
}

#[test_case('A', "l", ErrorKind::Precondition ; "epsilon on another nonterminal")]
#[test_case('S', "aB", ErrorKind::Precondition ; "terminal in a pair")]
#[test_case('S', "ABA", ErrorKind::Precondition ; "three symbols")]
#[test_case('S', "A", ErrorKind::Precondition ; "unit rule")]
#[test_case('S', "Ax", ErrorKind::Validation ; "undefined terminal")]
#[test_case('C', "a", ErrorKind::Validation ; "undefined nonterminal")]
#[test_case('a', "a", ErrorKind::Validation ; "terminal on the left")]
fn test_cnf_production_rejected(lhs: char, rhs: &str, kind: ErrorKind) {
    let grammar = load("S::=AB|l\nA::=a\nB::=b");
    assert_eq!(
        grammar.check_cnf_production(lhs, rhs).unwrap_err().kind(),
        kind
    );
}

#[test]
fn test_cnf_production_message() {
    let grammar = load("S::=AB|l\nA::=a\nB::=b");
    let err = grammar.check_cnf_production('S', "aB").unwrap_err();
    assert_eq!(
        err.to_string(),
        "precondition error: S::=aB is not in Chomsky normal form"
    );
}

#[test]
fn test_is_cnf() {
    assert!(load("S::=AB|l\nA::=a\nB::=b").is_cnf());
    assert!(!load("S::=AB\nA::=a|l\nB::=b").is_cnf());
    assert!(!load("S::=ab").is_cnf());
}

#[test]
fn test_isolate_start() {
    let mut grammar = load("S::=aSb|ab|l");
    grammar.normalize().unwrap();
    let fresh = grammar.transform_into_cnf().unwrap();
    assert_eq!(chars(&fresh), "ZYXW");
    assert_eq!(grammar.start_symbol(), Symbol::from_char('Z'));
    support::assert_eq_rules(
        &grammar,
        "S::=YW|YX
         W::=SX
         X::=b
         Y::=a
         Z::=YW|YX|l",
    );
}

#[test]
fn test_reuse_terminal_wrappers() {
    let mut grammar = load("S::=aB|Ba|AB\nA::=a\nB::=b");
    grammar.normalize().unwrap();
    let fresh = grammar.transform_into_cnf().unwrap();
    assert!(fresh.is_empty());
    support::assert_eq_rules(&grammar, "A::=a\nB::=b\nS::=AB|BA");
}

#[test_case("S::=aSb|ab|l" ; "nested pairs")]
#[test_case("S::=ABC|a\nA::=B|l\nB::=C|b\nC::=A|c" ; "unit cycle")]
#[test_case("S::=aSa|bSb|a|b|l" ; "palindromes")]
#[test_case("S::=SS|aSb|l" ; "balanced brackets")]
#[test_case("S::=abc|aXc\nX::=b|bX|0" ; "long rules")]
fn test_transform_into_cnf(text: &str) {
    let mut grammar = load(text);
    let words = support::words_up_to(&grammar, 6);
    grammar.normalize().unwrap();
    grammar.transform_into_cnf().unwrap();

    assert!(grammar.is_cnf(), "not in CNF:\n{}", grammar);
    for rule in grammar.rules() {
        let (lhs, rhs) = (rule.lhs.to_char(), rule.rhs.to_string());
        assert_eq!(grammar.check_cnf_production(lhs, &rhs), Ok(()));
    }
    assert_eq!(support::words_up_to(&grammar, 6), words);
}

#[test]
fn test_cnf_grammar_unchanged() {
    let mut grammar = load("S::=AB|l\nA::=a\nB::=b");
    let before = grammar.clone();
    assert!(grammar.transform_into_cnf().unwrap().is_empty());
    assert_eq!(grammar, before);
}

#[test]
fn test_not_well_formed() {
    let mut grammar = load("S::=A\nA::=ab");
    let before = grammar.clone();
    let err = grammar.transform_into_cnf().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Precondition);
    assert_eq!(grammar, before);
}

#[test]
fn test_out_of_fresh_nonterminals() {
    // Every uppercase letter but X, Y and Z is taken. Four are needed.
    let taken: Vec<char> = ('A'..='W').filter(|&ch| ch != 'S').collect();
    let mut text = String::from("S::=abc");
    for &ch in &taken {
        text.push_str(&format!("|{}d", ch));
    }
    for &ch in &taken {
        text.push_str(&format!("\n{}::=d", ch));
    }
    let mut grammar = load(&text);
    assert!(grammar.is_well_formed());
    let before = grammar.clone();

    let err = grammar.transform_into_cnf().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Precondition);
    assert_eq!(grammar, before);
}
