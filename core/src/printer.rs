//! Built-in [`Printer`] implementations.

use crate::{Printer, Token};

/// Re-emits token values verbatim.
///
/// Printing a freshly lexed stream reproduces the source byte for byte;
/// printing a fixed stream yields the corrected source.
#[derive(Debug, Default)]
pub struct SourcePrinter {
    buf: String,
}

impl SourcePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: String::with_capacity(cap),
        }
    }
}

impl Printer for SourcePrinter {
    fn buf(&self) -> &str {
        &self.buf
    }

    fn buf_mut(&mut self) -> &mut String {
        &mut self.buf
    }

    fn into_string(self) -> String {
        self.buf
    }

    fn token(&mut self, t: &Token) {
        self.word(t.value());
    }
}

/// One line per token: `KIND "value" @line:col`.
///
/// Values are escaped so whitespace differences stay visible in snapshots.
#[derive(Debug, Default)]
pub struct DebugPrinter {
    buf: String,
    skip_formatting: bool,
}

impl DebugPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave whitespace, indentation, and newline tokens out.
    pub fn skip_formatting(mut self) -> Self {
        self.skip_formatting = true;
        self
    }
}

impl Printer for DebugPrinter {
    fn buf(&self) -> &str {
        &self.buf
    }

    fn buf_mut(&mut self) -> &mut String {
        &mut self.buf
    }

    fn into_string(self) -> String {
        self.buf
    }

    fn token(&mut self, t: &Token) {
        if self.skip_formatting && t.kind().is_formatting() {
            return;
        }
        let line = format!("{} {:?} @{}\n", t.kind(), t.value(), t.position());
        self.word(&line);
    }
}
