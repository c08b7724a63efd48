use cfg_cnf::{Grammar, Symbol};
use test_case::test_case;

mod support;

#[test]
fn test_load_and_print() {
    support::init_logger();
    let text = "
        S ::= aSb | AB | l

        A::=a0
        B::=b
        B::=bB
    ";
    let grammar = Grammar::from_text(text, 'S').unwrap();
    assert_eq!(grammar.start_symbol(), Symbol::from_char('S'));
    assert_eq!(grammar.to_string(), "A::=a0\nB::=b|bB\nS::=AB|aSb|l\n");
    let reloaded = Grammar::from_text(&grammar.to_string(), 'S').unwrap();
    assert_eq!(reloaded, grammar);
}

#[test]
fn test_start_declared_without_rules() {
    support::init_logger();
    let grammar = Grammar::from_text("", 'S').unwrap();
    assert_eq!(grammar.start_symbol(), Symbol::from_char('S'));
    assert!(grammar.is_empty());
}

#[test_case("S::=a\nS:=b", 'S', (2, 1) ; "missing separator")]
#[test_case("SA::=a", 'S', (1, 1) ; "two symbols on the left")]
#[test_case("a::=b", 'S', (1, 1) ; "terminal on the left")]
#[test_case("S::=a|alb", 'S', (1, 8) ; "epsilon marker inside")]
#[test_case("S::=a| a", 'S', (1, 8) ; "duplicate alternative")]
#[test_case("S::=a||b", 'S', (1, 7) ; "empty alternative")]
#[test_case("S::=a", 'a', (1, 1) ; "terminal as start")]
fn test_load_error(text: &str, start: char, position: (u32, u32)) {
    support::init_logger();
    let err = Grammar::from_text(text, start).unwrap_err();
    assert_eq!((err.line, err.col), position, "{}", err);
}
