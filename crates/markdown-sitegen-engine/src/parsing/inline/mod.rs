//! # Inline Parsing
//!
//! Splits the text of a block into a flat sequence of [`InlineSpan`]s.
//!
//! ## Pipeline
//!
//! Each stage only rewrites `Plain` spans; styled spans pass through:
//!
//! 1. Delimiters, longest first: `**` (bold), `*` (italic), `` ` `` (code)
//! 2. Images `![alt](url)`
//! 3. Links `[text](url)` not preceded by `!`
//!
//! Spans never nest. A delimiter inside another delimiter's span is literal
//! text of the outer span.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum and its mapping to [`HtmlNode`](crate::html::HtmlNode)
//! - **`kinds`**: delimiter and media syntax (`Delimiter`, `Media`)
//! - **`parser`**: `parse_inline()` and the individual split stages

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineSpan;
