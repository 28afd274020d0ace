//! Core error types for bracelint.
//!
//! `check` never fails; these errors come out of stream mutation and rule
//! fixers. A fixer error is local to one finding: the runner records it next
//! to the finding and carries on with the rest of the batch.

use crate::TokenId;
use thiserror::Error;

/// Core bracelint error type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The tokens around a finding do not match the trivia pattern its fixer
    /// knows how to rewrite.
    ///
    /// The finding stays reported and the stream is left as it was for that
    /// site. Callers should surface this as a failed fix, not drop it.
    #[error("no safe fix available at token {token}: {reason}")]
    UnfixableArrangement {
        /// Token the fixer was anchored on.
        token: TokenId,
        /// Short description of what the fixer ran into.
        reason: &'static str,
    },

    /// The handle refers to a token that has already been removed.
    #[error("token {token} is no longer part of the stream")]
    StaleToken {
        /// The removed token.
        token: TokenId,
    },

    /// An insertion index past the end of the stream.
    #[error("index {index} out of bounds for stream of length {len}")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Length of the stream at the time of the call.
        len: usize,
    },
}

impl Error {
    #[inline]
    pub fn unfixable(token: TokenId, reason: &'static str) -> Self {
        Self::UnfixableArrangement { token, reason }
    }

    /// `true` for [`Error::UnfixableArrangement`].
    #[inline]
    pub fn is_unfixable(&self) -> bool {
        matches!(self, Self::UnfixableArrangement { .. })
    }
}
