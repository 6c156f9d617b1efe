use thiserror::Error;
use tracing::{debug, trace};
use xvalspan::{Span, Spand};

use crate::token::{Token, TokenKind};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("expression is empty")]
    EmptyExpression,
    #[error("expression can't start with {0}")]
    InvalidStart(TokenKind),
    #[error("{prev} can't be followed by {next}")]
    InvalidSuccessor { prev: TokenKind, next: TokenKind },
    #[error("expression can't end with {0}")]
    InvalidEnd(TokenKind),
    #[error("')' has never been opened with '('")]
    UnmatchedClose,
    #[error("'(' has never been closed with ')'")]
    UnmatchedOpen,
}

pub type SyntaxError = Spand<SyntaxErrorKind>;

/// Checks a token sequence against the expression grammar, collecting every violation.
pub struct Validator<'t, 'a> {
    tokens: &'t [Token<'a>],
    errors: Vec<SyntaxError>,
}

impl<'t, 'a> Validator<'t, 'a> {
    #[must_use]
    pub const fn new(tokens: &'t [Token<'a>]) -> Self {
        Self {
            tokens,
            errors: Vec::new(),
        }
    }

    fn error(&mut self, kind: SyntaxErrorKind, span: Span) {
        trace!(%kind, %span, "syntax error");
        self.errors.push(SyntaxError::new(kind, span));
    }

    /// Runs every check in order; an empty sequence only reports `EmptyExpression`.
    #[must_use]
    pub fn validate(mut self) -> Vec<SyntaxError> {
        let tokens = self.tokens;
        let (Some(&first), Some(&last)) = (tokens.first(), tokens.last()) else {
            self.error(SyntaxErrorKind::EmptyExpression, Span::point(0));
            return self.errors;
        };

        self.check_start(first);
        self.check_successors();
        self.check_end(last);
        self.check_parens();

        debug!(count = self.errors.len(), "validated tokens");
        self.errors
    }

    fn check_start(&mut self, first: Token<'a>) {
        if !first.kind.can_start() {
            self.error(SyntaxErrorKind::InvalidStart(first.kind), first.span);
        }
    }

    fn check_successors(&mut self) {
        let tokens = self.tokens;
        for pair in tokens.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if !prev.kind.can_be_followed_by(next.kind) {
                self.error(
                    SyntaxErrorKind::InvalidSuccessor {
                        prev: prev.kind,
                        next: next.kind,
                    },
                    next.span,
                );
            }
        }
    }

    fn check_end(&mut self, last: Token<'a>) {
        if !last.kind.can_end() {
            self.error(SyntaxErrorKind::InvalidEnd(last.kind), last.span);
        }
    }

    fn check_parens(&mut self) {
        let mut open = Vec::new();

        for tk in self.tokens {
            match tk.kind {
                TokenKind::LParen => open.push(tk.span),
                TokenKind::RParen if open.pop().is_none() => {
                    self.error(SyntaxErrorKind::UnmatchedClose, tk.span);
                }
                _ => {}
            }
        }

        for span in open {
            self.error(SyntaxErrorKind::UnmatchedOpen, span);
        }
    }
}

/// Shorthand for `Validator::new(tokens).validate()`.
#[must_use]
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn validate(tokens: &[Token<'_>]) -> Vec<SyntaxError> {
    Validator::new(tokens).validate()
}
