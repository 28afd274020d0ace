//! Token kinds, tokens, and the handles that address them inside a
//! [`TokenStream`](crate::TokenStream).

use core::fmt;

/// Lexical kind of a token.
///
/// The brace rules only ever inspect the delimiter and trivia kinds; the
/// remaining kinds exist so a lexer can describe the rest of a manifest
/// without collapsing everything into [`TokenKind::Other`].
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LBrace,
    RBrace,
    LBrack,
    RBrack,
    LParen,
    RParen,
    Colon,
    Comma,
    Semicolon,
    FatArrow,
    Equals,
    Comment,
    Whitespace,
    Indent,
    Newline,
    Class,
    Define,
    Inherits,
    Name,
    ClassRef,
    Variable,
    String,
    Number,
    Other,
}

impl TokenKind {
    /// Whitespace, indentation, or a line break.
    #[inline]
    pub const fn is_formatting(self) -> bool {
        matches!(self, Self::Whitespace | Self::Indent | Self::Newline)
    }

    /// Formatting tokens plus comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        self.is_formatting() || matches!(self, Self::Comment)
    }

    /// Human-readable name used in debug output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBrack => "LBRACK",
            Self::RBrack => "RBRACK",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Colon => "COLON",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMIC",
            Self::FatArrow => "FARROW",
            Self::Equals => "EQUALS",
            Self::Comment => "COMMENT",
            Self::Whitespace => "WHITESPACE",
            Self::Indent => "INDENT",
            Self::Newline => "NEWLINE",
            Self::Class => "CLASS",
            Self::Define => "DEFINE",
            Self::Inherits => "INHERITS",
            Self::Name => "NAME",
            Self::ClassRef => "CLASSREF",
            Self::Variable => "VARIABLE",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 1-based source position.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Stable handle to a token inside one [`TokenStream`](crate::TokenStream).
///
/// Handles survive insertions and removals of other tokens. A handle whose
/// token has been removed is reported as stale by the stream; slots are never
/// reused, so a stale handle can never alias a newer token.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub(crate) u32);

impl TokenId {
    #[inline]
    pub(crate) fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single lexical unit.
///
/// The position is fixed when the token is created. Only the value can be
/// rewritten in place, through [`TokenStream::set_value`](crate::TokenStream::set_value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    value: String,
    position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            position: Position::new(line, column),
        }
    }

    /// A `Whitespace` token holding exactly one space.
    pub fn single_space(position: Position) -> Self {
        Self {
            kind: TokenKind::Whitespace,
            value: " ".to_string(),
            position,
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.position.line
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.position.column
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }
}
