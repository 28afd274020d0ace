use crate::{Token, TokenStream};

/// Trait for rendering a token stream back to text.
///
/// `Printer` is the output half of a lint run: after fixes have mutated the
/// stream, a printer turns it back into something a host can write to disk
/// or compare in a test.
///
/// # Required Methods
///
/// - `buf_mut()`: Get mutable buffer for appending
/// - `into_string()`: Consume and return final output
/// - `token(t)`: Render one token
///
/// # Provided Methods
///
/// - `word(s)`, `char(c)`: Append text
/// - `write_stream(stream)`: Render every live token in order
///
/// # Example
///
/// ```
/// use bracelint_core::{Printer, Token};
///
/// #[derive(Default)]
/// struct KindsOnly {
///     buf: String,
/// }
///
/// impl Printer for KindsOnly {
///     fn buf(&self) -> &str { &self.buf }
///     fn buf_mut(&mut self) -> &mut String { &mut self.buf }
///     fn into_string(self) -> String { self.buf }
///
///     fn token(&mut self, t: &Token) {
///         self.word(t.kind().name());
///         self.char(' ');
///     }
/// }
/// ```
pub trait Printer: Sized {
    /// Get the current buffer contents.
    fn buf(&self) -> &str;
    /// Get a mutable reference to the buffer for appending.
    fn buf_mut(&mut self) -> &mut String;
    /// Consume the printer and return the final string.
    fn into_string(self) -> String;

    /// Render a single token.
    fn token(&mut self, t: &Token);

    /// Append a string to the buffer.
    fn word(&mut self, s: &str) {
        self.buf_mut().push_str(s);
    }

    /// Append a single character to the buffer.
    fn char(&mut self, c: char) {
        self.buf_mut().push(c);
    }

    /// Render every live token of `stream` in order.
    fn write_stream(&mut self, stream: &TokenStream) {
        for token in stream.tokens() {
            self.token(token);
        }
    }
}
