use std::str::Chars;

use thiserror::Error;
use tracing::{debug, trace};
use xvalspan::{Span, Spand};

use crate::token::{Token, TokenKind};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind<'a> {
    #[error("unsupported lexeme '{0}'")]
    Unsupported(&'a str),
    #[error("malformed number '{0}'")]
    MalformedNumber(&'a str),
}

impl<'a> LexErrorKind<'a> {
    /// Source text the lexer gave up on.
    #[must_use]
    pub const fn lexeme(&self) -> &'a str {
        match self {
            Self::Unsupported(s) | Self::MalformedNumber(s) => s,
        }
    }
}

/// Lexical failure; `span.start()` is the offset where scanning failed.
pub type LexError<'a> = Spand<LexErrorKind<'a>>;
pub type LexResult<'a, T> = Result<T, LexError<'a>>;

/// The `(lexeme, offset)` pair carried by a [`LexError`].
pub trait LexErrorExt<'a> {
    fn lexeme(&self) -> &'a str;
    fn offset(&self) -> u32;
}

impl<'a> LexErrorExt<'a> for LexError<'a> {
    fn lexeme(&self) -> &'a str {
        self.kind.lexeme()
    }

    fn offset(&self) -> u32 {
        self.span.start()
    }
}

pub struct Lexer<'a> {
    input: &'a str,
    chars: Chars<'a>,

    /// start byte position of current token
    byte_start: u32,

    /// byte position of cursor
    byte: u32,

    /// start character offset of current token
    offset_start: u32,

    /// character offset of cursor
    offset: u32,
}

const EOF: char = '\0';

impl<'a> Lexer<'a> {
    /// # Panics
    ///
    /// If `input` is longer than `u32::MAX` bytes.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        assert!(u32::try_from(input.len()).is_ok());

        Self {
            input,
            chars: input.chars(),
            byte_start: 0,
            byte: 0,
            offset_start: 0,
            offset: 0,
        }
    }

    /// Lexes the whole input, stopping at the first error.
    pub fn lex_all(self) -> LexResult<'a, Vec<Token<'a>>> {
        let result = self.collect::<LexResult<'a, Vec<_>>>();
        match &result {
            Ok(tokens) => debug!(count = tokens.len(), "lexed input"),
            Err(err) => debug!(offset = err.offset(), %err, "lexing failed"),
        }
        result
    }

    fn first(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF)
    }

    fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn bump(&mut self) -> Option<char> {
        self.chars.next().inspect(|c| {
            self.byte += c.len_utf8() as u32;
            self.offset += 1;
        })
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.first()) {
            self.bump();
        }
    }

    const fn start_token(&mut self) {
        self.byte_start = self.byte;
        self.offset_start = self.offset;
    }

    /// Span of the current token; at least one character must have been bumped.
    const fn make_span(&self) -> Span {
        Span::new(self.offset_start, self.offset - 1)
    }

    fn view(&self) -> &'a str {
        &self.input[self.byte_start as usize..self.byte as usize]
    }

    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        let token = Token::new(kind, self.view(), self.make_span());
        trace!(%kind, lexeme = token.lexeme, span = %token.span, "token");
        token
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    fn identifier(&mut self) -> Token<'a> {
        self.eat_while(|c| c.is_ascii_alphanumeric());
        self.make_token(TokenKind::Identifier)
    }

    fn number(&mut self) -> LexResult<'a, Token<'a>> {
        self.eat_while(|c| c.is_ascii_digit());

        if self.first() == '.' {
            self.bump();
            let fraction_start = self.offset;
            self.eat_while(|c| c.is_ascii_digit());

            if self.offset == fraction_start {
                return Err(LexError::new(
                    LexErrorKind::MalformedNumber(self.view()),
                    self.make_span(),
                ));
            }
        }

        Ok(self.make_token(TokenKind::Number))
    }

    pub fn next_token(&mut self) -> Option<LexResult<'a, Token<'a>>> {
        macro_rules! token {
            ($name:ident) => {
                Some(Ok(self.make_token(TokenKind::$name)))
            };
        }

        self.skip_whitespace();

        self.start_token();
        let c = self.bump()?;

        match c {
            'a'..='z' | 'A'..='Z' => Some(Ok(self.identifier())),
            '0'..='9' => Some(self.number()),
            '(' => token!(LParen),
            ')' => token!(RParen),
            '+' => token!(Plus),
            '-' => token!(Minus),
            '*' => token!(Star),
            '/' => token!(Slash),

            _ => Some(Err(LexError::new(
                LexErrorKind::Unsupported(self.view()),
                self.make_span(),
            ))),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<'a, Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Shorthand for `Lexer::new(source).lex_all()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> LexResult<'_, Vec<Token<'_>>> {
    Lexer::new(source).lex_all()
}
