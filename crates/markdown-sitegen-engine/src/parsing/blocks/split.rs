/// The literal separator between blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed blocks.
///
/// Empty pieces are dropped before trimming, so a whitespace-only piece
/// survives as an empty block.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .filter(|block| !block.is_empty())
        .map(str::trim)
        .collect()
}
