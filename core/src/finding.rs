use core::fmt;

use crate::{Position, Token, TokenId};

/// How serious a finding is.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A single style violation.
///
/// The position is a snapshot taken at detection time; `token` is the handle
/// a fixer uses to find the site again after earlier fixes in the same batch
/// have shifted indices.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: &'static str,
    pub position: Position,
    pub token: TokenId,
}

impl Finding {
    /// An error-level finding anchored at `token`, reported at its position.
    pub fn error(message: &'static str, id: TokenId, token: &Token) -> Self {
        Self {
            severity: Severity::Error,
            message,
            position: token.position(),
            token: id,
        }
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.position.line
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.position.column
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} on line {} column {}",
            self.severity, self.message, self.position.line, self.position.column
        )
    }
}
