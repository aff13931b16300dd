// tests/dragon_grammar.rs
use heighway_dragon::{DragonConfig, DragonGrammar, Sequence, Symbol, expand};

fn rewrite_by_hand(text: &str) -> String {
    let mut out = String::new();
    for c in text.chars() {
        match c {
            'a' => out.push_str("aRbFR"),
            'b' => out.push_str("LFaLb"),
            other => out.push(other),
        }
    }
    out
}

#[test]
fn test_axiom() {
    assert_eq!(expand(0).unwrap().as_str(), "Fa");
    assert_eq!(Sequence::axiom().len(), 2);
}

#[test]
fn test_first_rounds() {
    assert_eq!(expand(1).unwrap().as_str(), "FaRbFR");
    assert_eq!(expand(2).unwrap().as_str(), "FaRbFRRLFaLbFR");
    assert_eq!(
        expand(3).unwrap().as_str(),
        "FaRbFRRLFaLbFRRLFaRbFRLLFaLbFR"
    );
}

#[test]
fn test_rule_table_per_symbol() {
    let cases = [
        (Symbol::A, "aRbFR"),
        (Symbol::B, "LFaLb"),
        (Symbol::Forward, "F"),
        (Symbol::Left, "L"),
        (Symbol::Right, "R"),
        (Symbol::Other('x'), "x"),
        (Symbol::Other('é'), "é"),
    ];

    for (symbol, successor) in cases {
        let mut out = String::new();
        symbol.rewrite_into(&mut out);
        assert_eq!(out, successor, "successor of {symbol:?}");
        assert_eq!(symbol.successor_len(), successor.chars().count());
    }
}

#[test]
fn test_symbol_char_round_trip() {
    for c in ['a', 'b', 'F', 'L', 'R', '+', '→'] {
        assert_eq!(Symbol::from(c).as_char(), c);
    }
    assert_eq!(Symbol::from('+'), Symbol::Other('+'));
}

#[test]
fn test_each_round_is_literal_substitution() {
    let expansion = DragonGrammar::default().expand(12).unwrap();
    let mut previous = String::from("Fa");

    for depth in 1..=12 {
        let expected = rewrite_by_hand(&previous);
        let actual = expand(depth).unwrap();
        assert_eq!(actual.as_str(), expected, "round {depth}");
        assert_eq!(expansion.round_lengths[depth as usize], expected.len());
        previous = expected;
    }
}

#[test]
fn test_unknown_symbols_pass_through() {
    let seq = Sequence::from("a+é");
    let next = seq.rewrite(1).unwrap();
    assert_eq!(next.as_str(), "aRbFR+é");
    assert_eq!(next.len(), 7);
}

#[test]
fn test_forward_count_doubles() {
    // a and b each produce one a, one b and one F, so the F count after
    // round n is 2^n.
    for depth in 0..=10 {
        assert_eq!(expand(depth).unwrap().forward_count(), 1 << depth);
    }
}

#[test]
fn test_default_cutoff_never_fires_for_dragon() {
    // Round 14 is the last round checked and it only reaches 65_534 symbols.
    let expansion = DragonGrammar::default().expand(20).unwrap();

    assert!(!expansion.truncated());
    assert_eq!(expansion.depth_reached, 20);
    assert_eq!(expansion.round_lengths[14], 65_534);
    assert_eq!(expansion.sequence.len(), 4_194_302);
}

#[test]
fn test_cutoff_stops_at_first_long_round() {
    let config = DragonConfig {
        cutoff_length: 100,
        ..Default::default()
    };
    let expansion = DragonGrammar::new(&config).expand(20).unwrap();

    // Lengths run 2, 6, 14, 30, 62, 126: round 5 is the first over 100.
    assert!(expansion.truncated());
    assert_eq!(expansion.requested_depth, 20);
    assert_eq!(expansion.depth_reached, 5);
    assert_eq!(expansion.sequence.len(), 126);
    assert_eq!(expansion.sequence, expand(5).unwrap());
    assert_eq!(expansion.round_lengths, vec![2, 6, 14, 30, 62, 126]);
}

#[test]
fn test_cutoff_ignored_from_round_limit_on() {
    let config = DragonConfig {
        cutoff_length: 100,
        cutoff_round_limit: 3,
        ..Default::default()
    };
    let expansion = DragonGrammar::new(&config).expand(7).unwrap();

    assert!(!expansion.truncated());
    assert_eq!(expansion.sequence.len(), 510);
}
