//! The mutable token sequence rules operate on.
//!
//! Tokens live in an arena and are addressed by [`TokenId`]. Three views are
//! kept in sync on every edit:
//!
//! - `prev`/`next` links on each slot, for O(1) neighbour walks;
//! - the `order` vector, for O(1) positional lookup;
//! - an order-maintenance `label` per slot, strictly increasing along the
//!   sequence, so `index_of` is a binary search over `order` instead of a
//!   linear scan.
//!
//! Removed slots become tombstones and are never reused.

use crate::{Error, Navigator, Token, TokenId, TokenKind};
use tracing::trace;

/// Spacing between labels after a (re)labelling pass.
const LABEL_GAP: u64 = 1 << 20;

#[derive(Debug, Clone)]
struct Slot {
    token: Token,
    prev: Option<TokenId>,
    next: Option<TokenId>,
    label: u64,
    live: bool,
}

/// Ordered, indexable, doubly linked sequence of tokens.
///
/// # Example
///
/// ```
/// use bracelint_core::{Token, TokenKind, TokenStream};
///
/// let mut stream = TokenStream::from_tokens([
///     Token::new(TokenKind::Name, "example", 1, 1),
///     Token::new(TokenKind::LBrace, "{", 1, 8),
/// ]);
/// let brace = stream.get(1).unwrap();
/// stream
///     .insert_before(brace, Token::new(TokenKind::Whitespace, " ", 1, 8))
///     .unwrap();
/// assert_eq!(stream.index_of(brace), Some(2));
/// assert_eq!(stream.to_source(), "example {");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    slots: Vec<Slot>,
    order: Vec<TokenId>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            slots: Vec::with_capacity(cap),
            order: Vec::with_capacity(cap),
        }
    }

    /// Build a stream from tokens in source order.
    pub fn from_tokens<I: IntoIterator<Item = Token>>(tokens: I) -> Self {
        let iter = tokens.into_iter();
        let mut stream = Self::with_capacity(iter.size_hint().0);
        for token in iter {
            stream.push(token);
        }
        stream
    }

    /// Append a token at the end.
    pub fn push(&mut self, token: Token) -> TokenId {
        let prev = self.order.last().copied();
        let label = match prev {
            Some(last) => self.slots[last.slot()].label.saturating_add(LABEL_GAP),
            None => LABEL_GAP,
        };
        let id = self.alloc(token, prev, None, label);
        if let Some(last) = prev {
            self.slots[last.slot()].next = Some(id);
        }
        self.order.push(id);
        if label == u64::MAX {
            self.relabel();
        }
        id
    }

    /// Number of live tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Handle of the token at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<TokenId> {
        self.order.get(index).copied()
    }

    #[inline]
    pub fn first(&self) -> Option<TokenId> {
        self.order.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<TokenId> {
        self.order.last().copied()
    }

    /// `true` if `id` belongs to this stream and has not been removed.
    #[inline]
    pub fn contains(&self, id: TokenId) -> bool {
        self.live_slot(id).is_some()
    }

    /// Current position of `id`, or `None` if it was removed.
    pub fn index_of(&self, id: TokenId) -> Option<usize> {
        let label = self.live_slot(id)?.label;
        self.order
            .binary_search_by_key(&label, |t| self.slots[t.slot()].label)
            .ok()
    }

    /// Live token handles in order.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = TokenId> + ExactSizeIterator + '_ {
        self.order.iter().copied()
    }

    /// Live tokens in order, paired with their handles.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (TokenId, &Token)> + '_ {
        self.order
            .iter()
            .map(move |id| (*id, &self.slots[id.slot()].token))
    }

    /// Live tokens in order.
    pub fn tokens(&self) -> impl DoubleEndedIterator<Item = &Token> + '_ {
        self.iter().map(|(_, token)| token)
    }

    /// Handles of every live token of `kind`, in order.
    pub fn ids_of_kind(&self, kind: TokenKind) -> Vec<TokenId> {
        self.iter()
            .filter(|(_, token)| token.is(kind))
            .map(|(id, _)| id)
            .collect()
    }

    /// Insert `token` so that it ends up at `index`.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, token: Token) -> Result<TokenId, Error> {
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        if index == len {
            return Ok(self.push(token));
        }

        let next = self.order[index];
        let prev = index.checked_sub(1).map(|i| self.order[i]);
        let lo = prev.map_or(0, |p| self.slots[p.slot()].label);
        let hi = self.slots[next.slot()].label;

        let id = self.alloc(token, prev, Some(next), lo + (hi - lo) / 2);
        self.slots[next.slot()].prev = Some(id);
        if let Some(prev) = prev {
            self.slots[prev.slot()].next = Some(id);
        }
        self.order.insert(index, id);
        if hi - lo < 2 {
            self.relabel();
        }

        trace!(index, token = %id, kind = %self.slots[id.slot()].token.kind(), "insert");
        Ok(id)
    }

    /// Insert `token` immediately before `anchor`.
    pub fn insert_before(&mut self, anchor: TokenId, token: Token) -> Result<TokenId, Error> {
        let index = self
            .index_of(anchor)
            .ok_or(Error::StaleToken { token: anchor })?;
        self.insert(index, token)
    }

    /// Insert a single-space `Whitespace` token before `anchor`, borrowing
    /// the anchor's position.
    pub fn insert_space_before(&mut self, anchor: TokenId) -> Result<TokenId, Error> {
        let position = self
            .token(anchor)
            .map(Token::position)
            .ok_or(Error::StaleToken { token: anchor })?;
        self.insert_before(anchor, Token::single_space(position))
    }

    /// Unlink `id` from the stream and return its token.
    ///
    /// The slot is kept as a tombstone, so later lookups through `id` report
    /// it as stale instead of aliasing another token.
    pub fn remove(&mut self, id: TokenId) -> Result<Token, Error> {
        let index = self.index_of(id).ok_or(Error::StaleToken { token: id })?;
        let (prev, next) = {
            let slot = &self.slots[id.slot()];
            (slot.prev, slot.next)
        };
        if let Some(prev) = prev {
            self.slots[prev.slot()].next = next;
        }
        if let Some(next) = next {
            self.slots[next.slot()].prev = prev;
        }
        self.order.remove(index);

        let slot = &mut self.slots[id.slot()];
        slot.live = false;
        slot.prev = None;
        slot.next = None;
        trace!(index, token = %id, kind = %slot.token.kind(), "remove");
        Ok(slot.token.clone())
    }

    /// Replace the value of `id`, keeping its kind and position.
    pub fn set_value(&mut self, id: TokenId, value: impl Into<String>) -> Result<(), Error> {
        let slot = self
            .live_slot_mut(id)
            .ok_or(Error::StaleToken { token: id })?;
        slot.token.set_value(value.into());
        Ok(())
    }

    /// Re-emit the stream as source text.
    pub fn to_source(&self) -> String {
        use crate::{Printer, SourcePrinter};
        let mut printer = SourcePrinter::with_capacity(self.len() * 4);
        printer.write_stream(self);
        printer.into_string()
    }

    /// Checks every structural invariant: links mirror `order`, labels are
    /// strictly increasing, and every live slot appears exactly once.
    pub fn is_consistent(&self) -> bool {
        let live = self.slots.iter().filter(|s| s.live).count();
        if live != self.order.len() {
            return false;
        }
        let mut last_label = None;
        for (index, id) in self.order.iter().enumerate() {
            let Some(slot) = self.live_slot(*id) else {
                return false;
            };
            if last_label.is_some_and(|l| l >= slot.label) {
                return false;
            }
            last_label = Some(slot.label);
            let expected_prev = index.checked_sub(1).map(|i| self.order[i]);
            let expected_next = self.order.get(index + 1).copied();
            if slot.prev != expected_prev || slot.next != expected_next {
                return false;
            }
        }
        true
    }

    fn alloc(
        &mut self,
        token: Token,
        prev: Option<TokenId>,
        next: Option<TokenId>,
        label: u64,
    ) -> TokenId {
        let raw = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        let id = TokenId(raw);
        self.slots.push(Slot {
            token,
            prev,
            next,
            label,
            live: true,
        });
        id
    }

    fn relabel(&mut self) {
        trace!(len = self.order.len(), "relabel");
        let mut label = 0u64;
        for id in &self.order {
            label = label.saturating_add(LABEL_GAP);
            self.slots[id.slot()].label = label;
        }
    }

    #[inline]
    fn live_slot(&self, id: TokenId) -> Option<&Slot> {
        self.slots.get(id.slot()).filter(|s| s.live)
    }

    #[inline]
    fn live_slot_mut(&mut self, id: TokenId) -> Option<&mut Slot> {
        self.slots.get_mut(id.slot()).filter(|s| s.live)
    }
}

impl Navigator for TokenStream {
    #[inline]
    fn token(&self, id: TokenId) -> Option<&Token> {
        self.live_slot(id).map(|s| &s.token)
    }

    #[inline]
    fn prev_token(&self, id: TokenId) -> Option<TokenId> {
        self.live_slot(id)?.prev
    }

    #[inline]
    fn next_token(&self, id: TokenId) -> Option<TokenId> {
        self.live_slot(id)?.next
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn ws(value: &str) -> Token {
        Token::new(TokenKind::Whitespace, value, 1, 1)
    }

    fn sample() -> TokenStream {
        TokenStream::from_tokens([
            Token::new(TokenKind::Class, "class", 1, 1),
            ws(" "),
            Token::new(TokenKind::Name, "example", 1, 7),
            Token::new(TokenKind::LBrace, "{", 1, 14),
        ])
    }

    #[test]
    fn test_from_tokens_links() {
        let stream = sample();
        assert_eq!(stream.len(), 4);
        assert!(stream.is_consistent());

        let first = stream.first().unwrap();
        let last = stream.last().unwrap();
        assert_eq!(stream.prev_token(first), None);
        assert_eq!(stream.next_token(last), None);
        assert_eq!(stream.next_token(first), stream.get(1));
        assert_eq!(stream.prev_token(last), stream.get(2));
    }

    #[test]
    fn test_index_of_matches_order() {
        let stream = sample();
        for (index, id) in stream.ids().enumerate() {
            assert_eq!(stream.index_of(id), Some(index));
        }
    }

    #[test]
    fn test_insert_middle() {
        let mut stream = sample();
        let brace = stream.get(3).unwrap();
        let space = stream.insert_space_before(brace).unwrap();

        assert!(stream.is_consistent());
        assert_eq!(stream.index_of(space), Some(3));
        assert_eq!(stream.index_of(brace), Some(4));
        assert_eq!(stream.prev_token(brace), Some(space));
        assert_eq!(stream.token(space).unwrap().position(), Position::new(1, 14));
        assert_eq!(stream.to_source(), "class example {");
    }

    #[test]
    fn test_insert_front_and_end() {
        let mut stream = sample();
        let head = stream
            .insert(0, Token::new(TokenKind::Comment, "# c", 1, 1))
            .unwrap();
        let tail = stream
            .insert(stream.len(), Token::new(TokenKind::RBrace, "}", 1, 15))
            .unwrap();

        assert!(stream.is_consistent());
        assert_eq!(stream.first(), Some(head));
        assert_eq!(stream.last(), Some(tail));
        assert_eq!(stream.to_source(), "# cclass example{}");
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut stream = sample();
        let err = stream.insert(9, ws(" ")).unwrap_err();
        assert_eq!(err, Error::IndexOutOfBounds { index: 9, len: 4 });
    }

    #[test]
    fn test_remove_relinks_neighbours() {
        let mut stream = sample();
        let space = stream.get(1).unwrap();
        let removed = stream.remove(space).unwrap();

        assert_eq!(removed.value(), " ");
        assert!(stream.is_consistent());
        assert!(!stream.contains(space));
        assert_eq!(stream.index_of(space), None);
        assert_eq!(stream.next_token(stream.get(0).unwrap()), stream.get(1));
        assert_eq!(stream.to_source(), "classexample{");
    }

    #[test]
    fn test_stale_handle_is_reported() {
        let mut stream = sample();
        let space = stream.get(1).unwrap();
        stream.remove(space).unwrap();

        assert_eq!(
            stream.remove(space).unwrap_err(),
            Error::StaleToken { token: space }
        );
        assert_eq!(
            stream.set_value(space, " ").unwrap_err(),
            Error::StaleToken { token: space }
        );
        assert!(stream.insert_before(space, ws(" ")).is_err());
        assert_eq!(stream.token(space), None);
        assert_eq!(stream.prev_token(space), None);
    }

    #[test]
    fn test_set_value() {
        let mut stream = sample();
        let space = stream.get(1).unwrap();
        stream.set_value(space, "\t").unwrap();
        assert_eq!(stream.to_source(), "class\texample{");
    }

    #[test]
    fn test_repeated_inserts_force_relabel() {
        let mut stream = sample();
        let brace = stream.get(3).unwrap();
        // Halving the same gap exhausts it after ~20 inserts.
        for _ in 0..64 {
            stream.insert_before(brace, ws(" ")).unwrap();
            assert!(stream.is_consistent());
        }
        assert_eq!(stream.index_of(brace), Some(67));
        for (index, id) in stream.ids().enumerate() {
            assert_eq!(stream.index_of(id), Some(index));
        }
    }

    #[test]
    fn test_ids_of_kind() {
        let stream = sample();
        assert_eq!(stream.ids_of_kind(TokenKind::LBrace), vec![stream.get(3).unwrap()]);
        assert!(stream.ids_of_kind(TokenKind::Comma).is_empty());
    }

    #[test]
    fn test_empty_stream() {
        let stream = TokenStream::new();
        assert!(stream.is_empty());
        assert!(stream.is_consistent());
        assert_eq!(stream.first(), None);
        assert_eq!(stream.to_source(), "");
    }
}
