use crate::html::HtmlNode;
use crate::parsing::inline::{InlineSpan, parse_inline};
use crate::parsing::{MarkdownError, ParseOptions};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::{Block, BlockKind},
};

/// Tag of the container that wraps every document.
pub const DOCUMENT_TAG: &str = "div";

/// Turns classified blocks into HTML nodes, collecting them in block order.
pub struct BlockBuilder<'o> {
    options: &'o ParseOptions,
    nodes: Vec<HtmlNode>,
}

impl<'o> BlockBuilder<'o> {
    pub fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
        }
    }

    /// Builds the node for one block and appends it.
    pub fn push(&mut self, block: &Block<'_>) -> Result<(), MarkdownError> {
        let node = self.build(block)?;
        self.nodes.push(node);
        Ok(())
    }

    /// Wraps all pushed nodes in the document container.
    pub fn finish(self) -> HtmlNode {
        HtmlNode::parent(DOCUMENT_TAG, self.nodes)
    }

    fn build(&self, block: &Block<'_>) -> Result<HtmlNode, MarkdownError> {
        let text = block.text;
        let node = match block.kind {
            BlockKind::Heading { level } => HtmlNode::parent(
                Heading::tag(level),
                inline_children(Heading::content(text, level))?,
            ),
            BlockKind::Code => HtmlNode::parent(
                "pre",
                vec![HtmlNode::leaf("code", CodeFence::content(text))],
            ),
            BlockKind::Quote => HtmlNode::parent(
                "blockquote",
                inline_children(&BlockQuote::content(text, self.options.quote_style))?,
            ),
            BlockKind::UnorderedList => {
                HtmlNode::parent("ul", list_items(text, UnorderedList::item)?)
            }
            BlockKind::OrderedList => HtmlNode::parent("ol", list_items(text, OrderedList::item)?),
            BlockKind::Paragraph => HtmlNode::parent(Paragraph::TAG, inline_children(text)?),
        };
        Ok(node)
    }
}

fn inline_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    Ok(parse_inline(text)?
        .into_iter()
        .map(InlineSpan::into_element)
        .collect())
}

fn list_items(text: &str, item: fn(&str) -> &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    text.lines()
        .map(|line| {
            inline_children(item(line)).map(|children| HtmlNode::parent("li", children))
        })
        .collect()
}
