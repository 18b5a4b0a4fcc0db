use std::fmt;

use super::{Attributes, HtmlError};

/// Elements that have no closing tag when they carry no text.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A node in the HTML output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A childless node. `tag: None` means raw text spliced into the parent.
    Leaf {
        tag: Option<String>,
        text: String,
        attributes: Attributes,
    },
    /// An element whose content is the concatenation of its children.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Raw text without wrapping markup.
    pub fn text(text: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            text: text.into(),
            attributes: Attributes::new(),
        }
    }

    /// A tagged leaf element such as `<b>text</b>`.
    pub fn leaf(tag: impl Into<String>, text: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            text: text.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Builder-style attribute setter used while the node is being constructed.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.insert(key, value)
            }
        }
        self
    }

    /// Builds a leaf from loosely-typed parts.
    ///
    /// # Errors
    /// [`HtmlError::MalformedNode`] when `text` is absent.
    pub fn try_leaf(
        tag: Option<String>,
        text: Option<String>,
        attributes: Attributes,
    ) -> Result<Self, HtmlError> {
        let text = text.ok_or(HtmlError::MalformedNode("leaf requires a value"))?;
        Ok(HtmlNode::Leaf {
            tag,
            text,
            attributes,
        })
    }

    /// Builds a parent from loosely-typed parts.
    ///
    /// An empty children vector is valid; a missing one is not.
    ///
    /// # Errors
    /// [`HtmlError::MalformedNode`] when `tag` is absent or empty, or when
    /// `children` is absent.
    pub fn try_parent(
        tag: Option<String>,
        children: Option<Vec<HtmlNode>>,
        attributes: Attributes,
    ) -> Result<Self, HtmlError> {
        let tag = tag
            .filter(|t| !t.is_empty())
            .ok_or(HtmlError::MalformedNode("parent requires a tag"))?;
        let children = children.ok_or(HtmlError::MalformedNode("parent requires children"))?;
        Ok(HtmlNode::Parent {
            tag,
            children,
            attributes,
        })
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag),
        }
    }

    /// Children of a parent; empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Serializes the tree, emitting text and attribute values verbatim.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, false);
        out
    }

    /// Serializes the tree, escaping text and attribute values.
    pub fn to_escaped_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, true);
        out
    }

    /// Pre-order serialization into `out`.
    pub fn write_html(&self, out: &mut String, escape: bool) {
        match self {
            HtmlNode::Leaf {
                tag: None, text, ..
            } => push_text(out, text, escape),
            HtmlNode::Leaf {
                tag: Some(tag),
                text,
                attributes,
            } => {
                open_tag(out, tag, attributes, escape);
                if text.is_empty() && VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                push_text(out, text, escape);
                close_tag(out, tag);
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                open_tag(out, tag, attributes, escape);
                for child in children {
                    child.write_html(out, escape);
                }
                close_tag(out, tag);
            }
        }
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes, escape: bool) {
    out.push('<');
    out.push_str(tag);
    attributes.write_to(out, escape);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_text(out: &mut String, text: &str, escape: bool) {
    if escape {
        out.push_str(&html_escape::encode_text(text));
    } else {
        out.push_str(text);
    }
}
