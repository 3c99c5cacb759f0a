// tests/lexer_tests.rs

use hud_conditionals::ast::{CompareOp, Token};
use hud_conditionals::lexer::{LexError, Lexer};
use hud_conditionals::resolver::{Enabled, ResolveError, VariableRegistry};
use hud_conditionals::value::Constant;

fn registry() -> VariableRegistry {
    let mut registry = VariableRegistry::new();
    registry.register("health", Constant::Number(20.0));
    registry.register("dimension_id", Constant::String("minecraft:overworld".into()));
    registry.register_with("client:fps", Constant::Number(60.0), ["client"]);
    registry
}

fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let registry = registry();
    let mut enabled = Enabled::new();
    Lexer::new(input, 1, &registry, &mut enabled).tokenize()
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let tokens = lex("()|&=<>").unwrap();
    assert!(matches!(
        tokens.as_slice(),
        [
            Token::OpenGroup,
            Token::CloseGroup,
            Token::Or,
            Token::And,
            Token::Comparison(CompareOp::Equal),
            Token::Comparison(CompareOp::LessThan),
            Token::Comparison(CompareOp::GreaterThan),
        ]
    ));
}

// ============================================================================
// Two Character Tokens
// ============================================================================

#[test]
fn test_two_char_tokens() {
    let test_cases = vec![
        ("!=", CompareOp::NotEqual),
        ("<=", CompareOp::LessEqual),
        (">=", CompareOp::GreaterEqual),
    ];

    for (input, expected) in test_cases {
        let tokens = lex(input).unwrap();
        assert_eq!(tokens.len(), 1, "Failed for input: {}", input);
        assert!(
            matches!(tokens[0], Token::Comparison(op) if op == expected),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_double_equals_is_two_tokens() {
    let tokens = lex("==").unwrap();
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_lone_bang_is_an_error() {
    assert!(matches!(lex("!"), Err(LexError::LoneBang { position: 0 })));
    assert!(matches!(lex("health ! 3"), Err(LexError::LoneBang { position: 7 })));
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_numbers() {
    let tokens = lex("12 0.5 3.").unwrap();
    let values: Vec<f64> = tokens
        .iter()
        .map(|t| match t {
            Token::Number(n) => *n,
            other => panic!("expected number, got {:?}", other),
        })
        .collect();
    assert_eq!(values, vec![12.0, 0.5, 3.0]);
}

#[test]
fn test_malformed_number() {
    assert!(matches!(
        lex("1.2.3"),
        Err(LexError::InvalidNumber { ref text, position: 0 }) if text == "1.2.3"
    ));
}

#[test]
fn test_minus_is_skipped() {
    let tokens = lex("-5").unwrap();
    assert!(matches!(tokens.as_slice(), [Token::Number(n)] if *n == 5.0));
}

#[test]
fn test_strings() {
    let tokens = lex(r#""nether" = "the end""#).unwrap();
    match tokens.as_slice() {
        [Token::String(a), Token::Comparison(CompareOp::Equal), Token::String(b)] => {
            assert_eq!(a, "nether");
            assert_eq!(b, "the end");
        }
        other => panic!("unexpected tokens: {:?}", other),
    }
}

#[test]
fn test_unterminated_string_runs_to_end() {
    let tokens = lex(r#""abc & def"#).unwrap();
    assert!(matches!(tokens.as_slice(), [Token::String(s)] if s == "abc & def"));
}

#[test]
fn test_booleans_match_by_prefix() {
    let tokens = lex("true false").unwrap();
    assert!(matches!(
        tokens.as_slice(),
        [Token::Boolean(true), Token::Boolean(false)]
    ));
}

// ============================================================================
// Variables
// ============================================================================

#[test]
fn test_variables_resolve() {
    let tokens = lex("health>=dimension_id").unwrap();
    match tokens.as_slice() {
        [Token::Variable(a), Token::Comparison(CompareOp::GreaterEqual), Token::Variable(b)] => {
            assert_eq!(a.as_number(), 20.0);
            assert_eq!(b.as_string(), "minecraft:overworld");
        }
        other => panic!("unexpected tokens: {:?}", other),
    }
}

#[test]
fn test_variable_enables_groups() {
    let registry = registry();
    let mut enabled = Enabled::new();
    Lexer::new("client:fps > 30", 4, &registry, &mut enabled)
        .tokenize()
        .unwrap();
    assert!(enabled.is_enabled("client"));
}

#[test]
fn test_unknown_variable_propagates() {
    let err = lex("mana > 3").unwrap_err();
    assert_eq!(
        err,
        LexError::Resolve(ResolveError::Unknown {
            reference: "{mana}".to_string(),
            line: 1,
        })
    );
}

#[test]
fn test_uppercase_is_skipped() {
    // 'H' is outside the identifier alphabet, so only "ealth" is looked up.
    assert!(lex("Health").is_err());
    assert!(lex("HEALTH").unwrap().is_empty());
}
