pub mod blocks;
pub mod inline;

use serde::{Deserialize, Serialize};

use crate::html::HtmlNode;
use blocks::{Block, BlockBuilder, QuoteStyle, split_blocks};
use inline::kinds::Media;

/// Errors that abort conversion of a single document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("Invalid markdown: `{0}` delimiter is not closed")]
    UnterminatedDelimiter(&'static str),
    #[error("Invalid markdown: {kind} section not closed: {markup}")]
    UnterminatedMedia { kind: Media, markup: String },
}

/// Knobs for document conversion. The defaults reproduce the reference output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub quote_style: QuoteStyle,
}

/// Splits and classifies a document without building anything.
pub fn parse_blocks(markdown: &str) -> Vec<Block<'_>> {
    split_blocks(markdown)
        .into_iter()
        .map(Block::classify)
        .collect()
}

/// Converts a document into its HTML tree with default options.
///
/// The result is always a `div` parent; an empty document gives an empty `div`.
pub fn parse_document(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    parse_document_with(markdown, &ParseOptions::default())
}

pub fn parse_document_with(
    markdown: &str,
    options: &ParseOptions,
) -> Result<HtmlNode, MarkdownError> {
    let mut builder = BlockBuilder::new(options);

    for block in parse_blocks(markdown) {
        builder.push(&block)?;
    }

    Ok(builder.finish())
}

/// Convenience: document text straight to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    parse_document(markdown).map(|tree| tree.to_html())
}

#[cfg(test)]
mod tests;
