use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::{Block, BlockKind},
};

/// Classifies whole blocks.
///
/// Rules are tried in precedence order and the first match wins:
/// heading, code, quote, unordered list, ordered list, paragraph.
pub struct BlockClassifier;

impl BlockClassifier {
    pub fn classify(&self, text: &str) -> BlockKind {
        let first_line = text.lines().next().unwrap_or("");

        if let Some(level) = Heading::level(first_line) {
            BlockKind::Heading { level }
        } else if CodeFence::matches(text) {
            BlockKind::Code
        } else if BlockQuote::matches(text) {
            BlockKind::Quote
        } else if UnorderedList::matches(text) {
            BlockKind::UnorderedList
        } else if OrderedList::matches(text) {
            BlockKind::OrderedList
        } else {
            BlockKind::Paragraph
        }
    }
}

impl<'a> Block<'a> {
    pub fn classify(text: &'a str) -> Self {
        Block {
            text,
            kind: BlockClassifier.classify(text),
        }
    }
}
