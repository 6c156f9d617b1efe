use proptest::prelude::*;
use xvalc::lexer::{LexErrorKind, lex};
use xvalc::token::TokenKind;
use xvalc::validator::{SyntaxErrorKind, validate};

/// Character-offset slice of `src`, inclusive on both ends.
fn slice(src: &str, start: u32, stop: u32) -> String {
    src.chars()
        .skip(start as usize)
        .take((stop - start + 1) as usize)
        .collect()
}

fn operand() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z0-9]{0,5}",
        "[0-9]{1,4}",
        "[0-9]{1,3}\\.[0-9]{1,3}",
    ]
}

fn operator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"), Just("-"), Just("*"), Just("/")]
}

/// Well formed expressions built from the grammar, with random spacing.
///
/// Unary minus only ever leads the whole expression or a parenthesized group.
fn expression() -> impl Strategy<Value = String> {
    let inner = operand().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), operator(), inner.clone(), " {0,2}")
                .prop_map(|(lhs, op, rhs, ws)| format!("{lhs}{ws}{op}{ws}{rhs}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.prop_map(|e| format!("(-{e})")),
        ]
    });

    (any::<bool>(), inner).prop_map(|(neg, e)| if neg { format!("-{e}") } else { e })
}

proptest! {
    /// Property: every lexeme is exactly the source text under its span
    #[test]
    fn lexemes_match_spans(src in "[a-zA-Z0-9+*/() \\t-]{0,40}") {
        // a digit run can't be malformed without a '.'
        let tokens = lex(&src).unwrap();
        for tk in &tokens {
            prop_assert_eq!(tk.lexeme, slice(&src, tk.span.start(), tk.span.stop()));
        }
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.stop() < pair[1].span.start());
        }
    }

    /// Property: concatenated lexemes reproduce the source minus whitespace
    #[test]
    fn lexemes_concatenate_to_source(src in "[a-z0-9.+*/() -]{0,40}") {
        if let Ok(tokens) = lex(&src) {
            let joined: String = tokens.iter().map(|tk| tk.lexeme).collect();
            let stripped: String = src.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(joined, stripped);
        }
    }

    /// Property: a number ending in '.' fails at the literal's start
    #[test]
    fn trailing_dot_fails_at_literal_start(prefix in "[a-z]{1,3} \\+ ", digits in "[0-9]{1,4}") {
        let src = format!("{prefix}{digits}.");
        let err = lex(&src).unwrap_err();
        prop_assert_eq!(err.kind, LexErrorKind::MalformedNumber(&src[prefix.len()..]));
        prop_assert_eq!(err.span.start() as usize, prefix.len());
    }

    /// Property: generated well formed expressions produce no diagnostics
    #[test]
    fn well_formed_expressions_validate(src in expression()) {
        let tokens = lex(&src).unwrap();
        let errors = validate(&tokens);
        prop_assert!(errors.is_empty(), "{src}: {errors:?}");
    }

    /// Property: wrapping any well formed expression in empty parens is flagged
    #[test]
    fn empty_parens_are_flagged(src in expression()) {
        let src = format!("{src}+()");
        let tokens = lex(&src).unwrap();
        let empty = SyntaxErrorKind::InvalidSuccessor {
            prev: TokenKind::LParen,
            next: TokenKind::RParen,
        };
        prop_assert!(validate(&tokens).iter().any(|err| err.kind == empty));
    }

    /// Property: validation has no hidden state
    #[test]
    fn validate_is_idempotent(src in "[a-z0-9+*/() -]{0,30}") {
        let tokens = lex(&src).unwrap();
        prop_assert_eq!(validate(&tokens), validate(&tokens));
    }
}
