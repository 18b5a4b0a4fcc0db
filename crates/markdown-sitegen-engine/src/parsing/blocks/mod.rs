//! # Block Parsing
//!
//! Three steps turn a document into its HTML tree:
//!
//! 1. **Splitting** (`split`): the text is cut on blank lines into trimmed
//!    blocks
//! 2. **Classification** (`classify`): each block gets exactly one
//!    `BlockKind`, first matching rule wins
//! 3. **Construction** (`builder`): `BlockBuilder` turns each block into a
//!    node, delegating leaf text to inline parsing, and wraps the result in
//!    a `div`
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`, `Block`
//! - **`kinds`**: block-specific syntax (Heading, CodeFence, BlockQuote,
//!   lists, Paragraph)
//! - **`split`**: `split_blocks`
//! - **`classify`**: `BlockClassifier`
//! - **`builder`**: `BlockBuilder`
//!
//! ## Key Invariants
//!
//! - Code blocks are raw zones: their text is never inline-parsed
//! - A misnumbered ordered list is a paragraph, never a partial list

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::BlockClassifier;
pub use kinds::block_quote::QuoteStyle;
pub use split::split_blocks;
pub use types::{Block, BlockKind};
