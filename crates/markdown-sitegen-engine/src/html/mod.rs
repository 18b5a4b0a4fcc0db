//! # HTML Element Tree
//!
//! The output side of the conversion pipeline: a small immutable tree of
//! [`HtmlNode`]s built bottom-up by the block builder and consumed once by
//! serialization.
//!
//! ## Shapes
//!
//! - **Leaf**: optional tag, text, attributes. Without a tag the text is
//!   spliced verbatim (plain inline text). With a tag it renders as
//!   `<tag attrs>text</tag>`.
//! - **Parent**: required tag, children, attributes. Renders the children
//!   in order between the opening and closing tag.
//!
//! ## Validation
//!
//! The typed variants make a parent without a tag or children
//! unrepresentable. Untyped input (optional tag/text/children) goes through
//! [`HtmlNode::try_leaf`] / [`HtmlNode::try_parent`], which reject malformed
//! nodes with [`HtmlError::MalformedNode`] before a tree exists.

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::HtmlNode;

/// Errors raised while constructing HTML nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("Invalid HTML: {0}")]
    MalformedNode(&'static str),
}
