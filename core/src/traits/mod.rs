//! Core traits for bracelint.
//!
//! # Trait Hierarchy
//!
//! ```text
//! Navigator (neighbour queries)
//!     ├── prev_token / next_token          (required, O(1))
//!     ├── prev_non_space / next_non_space  (skip formatting)
//!     ├── prev_non_trivia / next_non_trivia (skip formatting + comments)
//!     └── is_single_space
//!
//! Printer (output)
//!     └── write_stream(stream)
//! ```
//!
//! Rules are written against [`Navigator`] for every read and against the
//! concrete [`TokenStream`](crate::TokenStream) only where they mutate.

mod navigator;
mod printer;

pub use navigator::Navigator;
pub use printer::Printer;
