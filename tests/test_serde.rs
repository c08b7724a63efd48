#![cfg(feature = "serde")]

use cfg_cnf::{Grammar, Rhs, Symbol};

mod support;

use support::load;

#[test]
fn test_grammar_round_trip() {
    let mut grammar = load("S::=aSb|AB|l\nA::=a0\nB::=b|bB");
    grammar.normalize().unwrap();
    grammar.transform_into_cnf().unwrap();

    let json = serde_json::to_string(&grammar).unwrap();
    let restored: Grammar = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, grammar);
    assert_eq!(restored.to_string(), grammar.to_string());
    assert_eq!(restored.is_derived_using_cyk("aa0bb"), Ok(true));
}

#[test]
fn test_symbols_as_characters() {
    let sym = Symbol::from_char('S').unwrap();
    assert_eq!(serde_json::to_string(&sym).unwrap(), "\"S\"");
    assert_eq!(
        serde_json::from_str::<Symbol>("\"z\"").unwrap().to_char(),
        'z'
    );
    assert!(serde_json::from_str::<Symbol>("\"+\"").is_err());

    let rhs = load("S::=aS").parse_rhs("aS").unwrap();
    let json = serde_json::to_string(&rhs).unwrap();
    assert_eq!(serde_json::from_str::<Rhs>(&json).unwrap(), rhs);
}
