// tests/parser_tests.rs

use hud_conditionals::ast::{CompareMode, CompareOp, Conditional, Token, ValueSource};
use hud_conditionals::lexer::Lexer;
use hud_conditionals::parser::{ParseError, Parser};
use hud_conditionals::reducer::{MAX_DEPTH, reduce};
use hud_conditionals::resolver::{Enabled, VariableRegistry};
use hud_conditionals::value::Constant;

fn registry() -> VariableRegistry {
    let mut registry = VariableRegistry::new();
    for name in ["a", "b", "c", "d"] {
        registry.register(name, Constant::Boolean(true));
    }
    registry.register("health", Constant::Number(20.0));
    registry.register("biome", Constant::String("plains".into()));
    registry
}

fn tokens(input: &str) -> Vec<Token> {
    let registry = registry();
    let mut enabled = Enabled::new();
    Lexer::new(input, 1, &registry, &mut enabled)
        .tokenize()
        .unwrap()
}

fn parse(input: &str) -> Result<Conditional, ParseError> {
    let reduced = reduce(tokens(input))?;
    Parser::new(reduced).parse()
}

fn count_markers(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .map(|t| match t {
            Token::OpenGroup | Token::CloseGroup => 1,
            Token::Group(inner) => count_markers(inner),
            _ => 0,
        })
        .sum()
}

// ============================================================================
// Group Reducer
// ============================================================================

#[test]
fn test_reduce_leaves_no_markers() {
    for input in [
        "(a)",
        "((a))",
        "(a & (b | (c)))",
        "(a)|(b)&((c)|d)",
        "((((((true))))))",
        "()",
    ] {
        let reduced = reduce(tokens(input)).unwrap();
        assert_eq!(count_markers(&reduced), 0, "Failed for input: {}", input);
    }
}

#[test]
fn test_reduce_nests_groups() {
    let reduced = reduce(tokens("(a & (b | c)) | d")).unwrap();
    assert_eq!(reduced.len(), 3);
    match &reduced[0] {
        Token::Group(outer) => {
            assert_eq!(outer.len(), 3);
            assert!(matches!(&outer[2], Token::Group(inner) if inner.len() == 3));
        }
        other => panic!("expected group, got {:?}", other),
    }
}

#[test]
fn test_reduce_unmatched_markers() {
    assert!(matches!(
        reduce(tokens("a)")),
        Err(ParseError::UnmatchedClose { position: 1 })
    ));
    assert!(matches!(
        reduce(tokens("((a)")),
        Err(ParseError::UnmatchedOpen { depth: 1 })
    ));
    assert!(matches!(
        reduce(tokens("(a & b")),
        Err(ParseError::UnmatchedOpen { depth: 1 })
    ));
}

#[test]
fn test_reduce_rejects_excessive_depth() {
    let mut deep = vec![Token::OpenGroup; MAX_DEPTH + 1];
    deep.push(Token::Boolean(true));
    deep.extend(vec![Token::CloseGroup; MAX_DEPTH + 1]);
    assert_eq!(
        reduce(deep).unwrap_err(),
        ParseError::TooDeep { limit: MAX_DEPTH }
    );

    // Sequential groups do not add up.
    let flat: Vec<Token> = (0..MAX_DEPTH * 4)
        .flat_map(|_| [Token::OpenGroup, Token::CloseGroup])
        .collect();
    assert_eq!(reduce(flat).unwrap().len(), MAX_DEPTH * 4);
}

// ============================================================================
// Precedence
// ============================================================================

#[test]
fn test_or_below_and() {
    // Should be: Or(And(a, b), And(c, d))
    match parse("a&b|c&d").unwrap() {
        Conditional::Or(children) => {
            assert_eq!(children.len(), 2);
            for child in &children {
                match child {
                    Conditional::And(pair) => {
                        assert_eq!(pair.len(), 2);
                        assert!(pair.iter().all(|c| matches!(c, Conditional::Variable(_))));
                    }
                    other => panic!("expected And, got {:?}", other),
                }
            }
        }
        other => panic!("expected Or, got {:?}", other),
    }
}

#[test]
fn test_flat_chains() {
    assert!(matches!(parse("a|b|c|d").unwrap(), Conditional::Or(c) if c.len() == 4));
    assert!(matches!(parse("a&b&c").unwrap(), Conditional::And(c) if c.len() == 3));
}

#[test]
fn test_group_overrides_precedence() {
    // Should be: And(Or(a, b), c)
    match parse("(a|b)&c").unwrap() {
        Conditional::And(children) => {
            assert!(matches!(&children[0], Conditional::Or(inner) if inner.len() == 2));
            assert!(matches!(&children[1], Conditional::Variable(_)));
        }
        other => panic!("expected And, got {:?}", other),
    }
}

#[test]
fn test_no_singleton_wrappers() {
    assert!(matches!(parse("(true)").unwrap(), Conditional::Literal(true)));
    assert!(matches!(parse("((a))").unwrap(), Conditional::Variable(_)));
    assert!(matches!(parse("false").unwrap(), Conditional::Literal(false)));
}

// ============================================================================
// Comparisons
// ============================================================================

#[test]
fn test_number_comparison_flags() {
    match parse("health >= 5").unwrap() {
        Conditional::Comparison(cmp) => {
            assert_eq!(cmp.op, CompareOp::GreaterEqual);
            assert!(cmp.check_num);
            assert!(!cmp.check_bool);
            assert_eq!(cmp.mode(), CompareMode::Number);
            assert!(matches!(cmp.left, ValueSource::Provider(_)));
            assert!(matches!(cmp.right, ValueSource::Constant(Constant::Number(n)) if n == 5.0));
        }
        other => panic!("expected comparison, got {:?}", other),
    }
}

#[test]
fn test_string_comparison_flags() {
    match parse(r#"biome != "desert""#).unwrap() {
        Conditional::Comparison(cmp) => {
            assert_eq!(cmp.op, CompareOp::NotEqual);
            assert_eq!(cmp.mode(), CompareMode::String);
        }
        other => panic!("expected comparison, got {:?}", other),
    }
}

#[test]
fn test_boolean_comparison_flags() {
    match parse("a = false").unwrap() {
        Conditional::Comparison(cmp) => {
            assert!(cmp.check_bool);
            assert_eq!(cmp.mode(), CompareMode::Boolean);
        }
        other => panic!("expected comparison, got {:?}", other),
    }
}

#[test]
fn test_mixed_literals_set_both_flags() {
    match parse("true = 1").unwrap() {
        Conditional::Comparison(cmp) => {
            assert!(cmp.check_bool && cmp.check_num);
            assert_eq!(cmp.mode(), CompareMode::Boolean);
        }
        other => panic!("expected comparison, got {:?}", other),
    }
}

// ============================================================================
// Structural errors
// ============================================================================

#[test]
fn test_wrong_token_count() {
    assert_eq!(parse("health =").unwrap_err(), ParseError::WrongTokenCount(2));
    assert_eq!(parse("a b c d").unwrap_err(), ParseError::WrongTokenCount(4));
}

#[test]
fn test_missing_operator() {
    assert!(matches!(
        parse("a b c").unwrap_err(),
        ParseError::UnexpectedToken { found: "variable", .. }
    ));
}

#[test]
fn test_empty_segments() {
    assert_eq!(parse("").unwrap_err(), ParseError::Empty);
    assert_eq!(parse("a |").unwrap_err(), ParseError::Empty);
    assert_eq!(parse("()").unwrap_err(), ParseError::Empty);
}

#[test]
fn test_bare_literal_is_not_a_condition() {
    assert!(matches!(
        parse("5").unwrap_err(),
        ParseError::UnexpectedToken { found: "number", .. }
    ));
    assert!(matches!(
        parse(r#""text""#).unwrap_err(),
        ParseError::UnexpectedToken { found: "string", .. }
    ));
}

#[test]
fn test_group_is_not_an_operand() {
    assert!(matches!(
        parse("(a) = b").unwrap_err(),
        ParseError::UnexpectedToken { found: "group", .. }
    ));
}

#[test]
fn test_raw_marker_fails_in_parser() {
    let raw = vec![Token::OpenGroup, Token::Boolean(true)];
    assert_eq!(
        Parser::new(raw).parse().unwrap_err(),
        ParseError::WrongTokenCount(2)
    );
    let lone = vec![Token::CloseGroup];
    assert!(matches!(
        Parser::new(lone).parse().unwrap_err(),
        ParseError::UnexpectedToken { found: "')'", .. }
    ));
}
