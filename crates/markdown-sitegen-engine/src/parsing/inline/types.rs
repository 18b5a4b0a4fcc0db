use crate::html::HtmlNode;

/// One run of inline text carrying a single style.
///
/// Equality is structural: kind, text and url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    /// `text` is the alt text.
    Image { text: String, url: String },
}

impl InlineSpan {
    pub fn url(&self) -> Option<&str> {
        match self {
            InlineSpan::Link { url, .. } | InlineSpan::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Converts the span into a single leaf node.
    pub fn into_element(self) -> HtmlNode {
        match self {
            InlineSpan::Plain(text) => HtmlNode::text(text),
            InlineSpan::Bold(text) => HtmlNode::leaf("b", text),
            InlineSpan::Italic(text) => HtmlNode::leaf("i", text),
            InlineSpan::Code(text) => HtmlNode::leaf("code", text),
            InlineSpan::Link { text, url } => HtmlNode::leaf("a", text).with_attribute("href", url),
            InlineSpan::Image { text, url } => HtmlNode::leaf("img", "")
                .with_attribute("src", url)
                .with_attribute("alt", text),
        }
    }

    pub fn to_element(&self) -> HtmlNode {
        self.clone().into_element()
    }
}
