#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Token, stream, and finding types shared by every bracelint rule.

pub mod config;
mod error;
mod finding;
pub mod printer;
mod stream;
mod token;
pub mod traits;

pub use config::LintConfig;
pub use error::Error;
pub use finding::{Finding, Severity};
pub use printer::{DebugPrinter, SourcePrinter};
pub use stream::TokenStream;
pub use token::{Position, Token, TokenId, TokenKind};
pub use traits::{Navigator, Printer};
