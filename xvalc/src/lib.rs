use thiserror::Error;

use crate::lexer::LexError;
use crate::token::Token;
use crate::validator::SyntaxError;

pub mod lexer;
pub mod token;
pub mod validator;

#[derive(Error, Debug, Clone)]
pub enum CheckError<'a> {
    #[error("{0}")]
    Lex(LexError<'a>),
    /// Lexing succeeded but the token sequence breaks the grammar.
    #[error("{} syntax error(s)", .errors.len())]
    Syntax {
        tokens: Vec<Token<'a>>,
        errors: Vec<SyntaxError>,
    },
}

impl<'a> From<LexError<'a>> for CheckError<'a> {
    fn from(value: LexError<'a>) -> Self {
        Self::Lex(value)
    }
}

/// Lexes and validates `source`, returning its tokens when the expression is well formed.
///
/// A lexical error stops the pipeline before validation.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn check(source: &str) -> Result<Vec<Token<'_>>, CheckError<'_>> {
    let tokens = lexer::lex(source)?;
    let errors = validator::validate(&tokens);

    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(CheckError::Syntax { tokens, errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::LexErrorKind;
    use crate::validator::SyntaxErrorKind;

    #[test]
    fn valid_expression_returns_tokens() {
        let tokens = check("(x*2)+f1*(5.616*t)").unwrap();
        assert_eq!(tokens.len(), 14);
    }

    #[test]
    fn function_calls_are_syntax_errors() {
        let Err(CheckError::Syntax { tokens, errors }) = check("sin(x*2)+f1(5.616*t)") else {
            panic!("expected syntax errors");
        };
        assert_eq!(tokens.len(), 13);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].span.start(), 3);
        assert_eq!(errors[1].span.start(), 11);
    }

    #[test]
    fn lex_error_stops_pipeline() {
        let Err(CheckError::Lex(err)) = check("a+4.") else {
            panic!("expected a lexical error");
        };
        assert_eq!(err.kind, LexErrorKind::MalformedNumber("4."));
        assert_eq!(err.span.start(), 2);
    }

    #[test]
    fn syntax_errors_keep_tokens() {
        let Err(CheckError::Syntax { tokens, errors }) = check("a+b*") else {
            panic!("expected syntax errors");
        };
        assert_eq!(tokens.len(), 4);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0].kind, SyntaxErrorKind::InvalidEnd(_)));
    }

    #[test]
    fn blank_input_is_empty_expression() {
        let Err(CheckError::Syntax { tokens, errors }) = check(" ") else {
            panic!("expected syntax errors");
        };
        assert!(tokens.is_empty());
        assert_eq!(errors[0].kind, SyntaxErrorKind::EmptyExpression);
    }
}
