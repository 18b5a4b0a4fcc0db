use serde::{Deserialize, Serialize};

/// How the `>` markers of a quote block are removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteStyle {
    /// Strip only the first `>` of the block; later lines keep theirs.
    #[default]
    FirstMarker,
    /// Strip the `>` from every line.
    PerLine,
}

/// Blockquote block type with owned prefix constant.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    /// Every line starts with `>`. An empty block is one empty line.
    pub fn matches(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::PREFIX))
    }

    pub fn content(block: &str, style: QuoteStyle) -> String {
        match style {
            QuoteStyle::FirstMarker => block
                .strip_prefix(Self::PREFIX)
                .unwrap_or(block)
                .trim()
                .to_string(),
            QuoteStyle::PerLine => block
                .lines()
                .map(|line| line.strip_prefix(Self::PREFIX).unwrap_or(line).trim())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_quotes() {
        assert!(BlockQuote::matches("> This is a quote"));
        assert!(BlockQuote::matches("> one\n>two"));
        assert!(!BlockQuote::matches("> one\ntwo"));
        assert!(!BlockQuote::matches(""));
    }

    #[test]
    fn first_marker_keeps_later_markers() {
        assert_eq!(
            BlockQuote::content(
                "> This is a quote\n> Another line of the quote",
                QuoteStyle::FirstMarker
            ),
            "This is a quote\n> Another line of the quote"
        );
    }

    #[test]
    fn per_line_strips_every_marker() {
        assert_eq!(
            BlockQuote::content(
                "> This is a quote\n> Another line of the quote",
                QuoteStyle::PerLine
            ),
            "This is a quote\nAnother line of the quote"
        );
    }
}
