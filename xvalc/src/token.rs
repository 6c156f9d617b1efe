use std::fmt::Display;

use xvalspan::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Number,

    Plus,
    Minus,
    Star,
    Slash,

    LParen,
    RParen,
}

/// Kinds allowed after an operand or a closing parenthesis.
const FOLLOWS_OPERAND: &[TokenKind] = &[
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Star,
    TokenKind::Slash,
    TokenKind::RParen,
];

/// Kinds allowed after a binary operator.
const FOLLOWS_OPERATOR: &[TokenKind] = &[TokenKind::Identifier, TokenKind::Number, TokenKind::LParen];

/// Kinds allowed after an opening parenthesis: an operand, a nested group or a unary minus.
const FOLLOWS_LPAREN: &[TokenKind] = &[
    TokenKind::Identifier,
    TokenKind::Number,
    TokenKind::LParen,
    TokenKind::Minus,
];

impl TokenKind {
    #[must_use]
    pub const fn can_start(self) -> bool {
        matches!(
            self,
            Self::Identifier | Self::Number | Self::Minus | Self::LParen
        )
    }

    #[must_use]
    pub const fn can_end(self) -> bool {
        matches!(self, Self::Identifier | Self::Number | Self::RParen)
    }

    /// Kinds that may appear directly after a token of this kind.
    #[must_use]
    pub const fn follow_set(self) -> &'static [Self] {
        match self {
            Self::Identifier | Self::Number | Self::RParen => FOLLOWS_OPERAND,
            Self::Plus | Self::Minus | Self::Star | Self::Slash => FOLLOWS_OPERATOR,
            Self::LParen => FOLLOWS_LPAREN,
        }
    }

    #[must_use]
    pub fn can_be_followed_by(self, next: Self) -> bool {
        self.follow_set().contains(&next)
    }

    /// Compact label used when listing recognized tokens.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::Plus => "ADD",
            Self::Minus => "MINUS",
            Self::Star => "MUL",
            Self::Slash => "DIV",
            Self::LParen => "OP",
            Self::RParen => "CP",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier => write!(f, "'identifier'"),
            Self::Number => write!(f, "'number'"),
            Self::Plus => write!(f, "'addition operator'"),
            Self::Minus => write!(f, "'minus sign'"),
            Self::Star => write!(f, "'multiplication operator'"),
            Self::Slash => write!(f, "'division operator'"),
            Self::LParen => write!(f, "'opening parenthesis'"),
            Self::RParen => write!(f, "'closing parenthesis'"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind:   TokenKind,
    /// exact source text covered by `span`
    pub lexeme: &'a str,
    pub span:   Span,
}

impl<'a> Token<'a> {
    #[must_use]
    pub const fn new(kind: TokenKind, lexeme: &'a str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{}')", self.kind.short_name(), self.lexeme)
    }
}

/// Space separated rendering of a token sequence, e.g. `IDENTIFIER('a') ADD('+')`.
#[derive(Debug, Clone, Copy)]
pub struct TokenList<'t, 'a>(pub &'t [Token<'a>]);

impl Display for TokenList<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
        }
        for token in tokens {
            write!(f, " {token}")?;
        }
        Ok(())
    }
}
