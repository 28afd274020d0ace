use crate::{Token, TokenId, TokenKind};

/// Read-only neighbour queries over a token sequence.
///
/// Implementors supply the three link lookups; every other query is derived
/// from them. All queries are pure and answer `None`/`false` at stream
/// boundaries or for removed handles.
///
/// Two skipping walks exist because the lint rules need to *see* comments:
///
/// | Walk | Skips |
/// |------|-------|
/// | `*_non_space` | `Whitespace`, `Indent`, `Newline` |
/// | `*_non_trivia` | the above plus `Comment` |
///
/// # Example
///
/// ```
/// use bracelint_core::{Navigator, Token, TokenKind, TokenStream};
///
/// let stream = TokenStream::from_tokens([
///     Token::new(TokenKind::Name, "example", 1, 1),
///     Token::new(TokenKind::Whitespace, " ", 1, 8),
///     Token::new(TokenKind::Comment, "# note", 1, 9),
///     Token::new(TokenKind::Newline, "\n", 1, 15),
///     Token::new(TokenKind::LBrace, "{", 2, 1),
/// ]);
/// let brace = stream.last().unwrap();
///
/// assert_eq!(stream.prev_non_space(brace), stream.get(2));
/// assert_eq!(stream.prev_non_trivia(brace), stream.get(0));
/// assert!(stream.is_single_space(stream.get(1)));
/// ```
pub trait Navigator {
    /// The live token behind `id`.
    fn token(&self, id: TokenId) -> Option<&Token>;

    /// Immediate predecessor.
    fn prev_token(&self, id: TokenId) -> Option<TokenId>;

    /// Immediate successor.
    fn next_token(&self, id: TokenId) -> Option<TokenId>;

    /// Kind of the token behind `id`.
    #[inline]
    fn kind(&self, id: TokenId) -> Option<TokenKind> {
        self.token(id).map(Token::kind)
    }

    /// Nearest predecessor that is not whitespace, indentation, or a newline.
    fn prev_non_space(&self, id: TokenId) -> Option<TokenId> {
        self.walk_prev(id, TokenKind::is_formatting)
    }

    /// Nearest successor that is not whitespace, indentation, or a newline.
    fn next_non_space(&self, id: TokenId) -> Option<TokenId> {
        self.walk_next(id, TokenKind::is_formatting)
    }

    /// Nearest predecessor that is not trivia (comments included).
    fn prev_non_trivia(&self, id: TokenId) -> Option<TokenId> {
        self.walk_prev(id, TokenKind::is_trivia)
    }

    /// Nearest successor that is not trivia (comments included).
    fn next_non_trivia(&self, id: TokenId) -> Option<TokenId> {
        self.walk_next(id, TokenKind::is_trivia)
    }

    /// `true` iff `id` is present, is `Whitespace`, and holds exactly `" "`.
    fn is_single_space(&self, id: Option<TokenId>) -> bool {
        id.and_then(|id| self.token(id))
            .is_some_and(|t| t.is(TokenKind::Whitespace) && t.value() == " ")
    }

    /// Walk backwards from `id` (exclusive) while `skip` holds.
    fn walk_prev(&self, id: TokenId, skip: fn(TokenKind) -> bool) -> Option<TokenId> {
        let mut cur = self.prev_token(id)?;
        while skip(self.kind(cur)?) {
            cur = self.prev_token(cur)?;
        }
        Some(cur)
    }

    /// Walk forwards from `id` (exclusive) while `skip` holds.
    fn walk_next(&self, id: TokenId, skip: fn(TokenKind) -> bool) -> Option<TokenId> {
        let mut cur = self.next_token(id)?;
        while skip(self.kind(cur)?) {
            cur = self.next_token(cur)?;
        }
        Some(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenStream;

    fn stream(kinds: &[(TokenKind, &str)]) -> TokenStream {
        kinds
            .iter()
            .enumerate()
            .map(|(i, (kind, value))| Token::new(*kind, *value, 1, i + 1))
            .collect()
    }

    #[test]
    fn test_boundaries_return_none() {
        let s = stream(&[(TokenKind::LBrace, "{")]);
        let only = s.first().unwrap();
        assert_eq!(s.prev_token(only), None);
        assert_eq!(s.next_token(only), None);
        assert_eq!(s.prev_non_space(only), None);
        assert_eq!(s.next_non_trivia(only), None);
    }

    #[test]
    fn test_walk_over_mixed_trivia() {
        let s = stream(&[
            (TokenKind::Name, "a"),
            (TokenKind::Newline, "\n"),
            (TokenKind::Indent, "  "),
            (TokenKind::Whitespace, "\t"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Newline, "\n"),
            (TokenKind::Comment, "# x"),
            (TokenKind::Newline, "\n"),
            (TokenKind::RBrace, "}"),
        ]);
        let brace = s.get(4).unwrap();
        assert_eq!(s.prev_non_space(brace), s.get(0));
        assert_eq!(s.prev_non_trivia(brace), s.get(0));
        assert_eq!(s.next_non_space(brace), s.get(6));
        assert_eq!(s.next_non_trivia(brace), s.get(8));
    }

    #[test]
    fn test_only_trivia_before_returns_none() {
        let s = stream(&[
            (TokenKind::Newline, "\n"),
            (TokenKind::Whitespace, "  "),
            (TokenKind::LBrace, "{"),
        ]);
        assert_eq!(s.prev_non_space(s.get(2).unwrap()), None);
    }

    #[test_case::test_case(TokenKind::Whitespace, " ", true; "one space")]
    #[test_case::test_case(TokenKind::Whitespace, "  ", false; "two spaces")]
    #[test_case::test_case(TokenKind::Whitespace, "\t", false; "tab")]
    #[test_case::test_case(TokenKind::Indent, " ", false; "indent")]
    #[test_case::test_case(TokenKind::Name, " ", false; "not whitespace")]
    fn test_is_single_space(kind: TokenKind, value: &str, expected: bool) {
        let s = stream(&[(kind, value)]);
        assert_eq!(s.is_single_space(s.first()), expected);
    }

    #[test]
    fn test_is_single_space_absent() {
        let s = TokenStream::new();
        assert!(!s.is_single_space(None));
    }
}
