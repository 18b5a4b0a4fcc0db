use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::InlineSpan;

/// Bracket/paren inline syntax: `![alt](url)` and `[text](url)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Media {
    Image,
    Link,
}

impl Media {
    /// Prefix that distinguishes an image from a link.
    pub const IMAGE_BANG: char = '!';

    /// Matches `[label](url)`; label has no brackets, url has no parens.
    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid media regex")
        })
    }

    /// Returns every `(label, url)` pair of this kind in `text`, in order.
    ///
    /// Images require a `!` directly before the bracket; links require its
    /// absence.
    pub fn extract(self, text: &str) -> Vec<(String, String)> {
        Self::pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let banged = text[..whole.start()].ends_with(Self::IMAGE_BANG);
                if banged != (self == Media::Image) {
                    return None;
                }
                Some((caps[1].to_string(), caps[2].to_string()))
            })
            .collect()
    }

    /// The exact source text for a `(label, url)` pair.
    pub fn markup(self, label: &str, url: &str) -> String {
        match self {
            Media::Image => format!("![{label}]({url})"),
            Media::Link => format!("[{label}]({url})"),
        }
    }

    pub fn span(self, label: String, url: String) -> InlineSpan {
        match self {
            Media::Image => InlineSpan::Image { text: label, url },
            Media::Link => InlineSpan::Link { text: label, url },
        }
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Media::Image => f.write_str("image"),
            Media::Link => f.write_str("link"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extract_images() {
        let matches =
            Media::Image.extract("This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)");
        assert_eq!(
            matches,
            vec![(
                "image".to_string(),
                "https://i.imgur.com/zjjcJKZ.png".to_string()
            )]
        );
    }

    #[test]
    fn extract_links() {
        let matches = Media::Link.extract(
            "This is text with a [link](https://boot.dev) and [another link](https://blog.boot.dev)",
        );
        assert_eq!(
            matches,
            vec![
                ("link".to_string(), "https://boot.dev".to_string()),
                ("another link".to_string(), "https://blog.boot.dev".to_string()),
            ]
        );
    }

    #[test]
    fn links_skip_images_and_images_skip_links() {
        let text = "![pic](a.png) and [page](b.html)";
        assert_eq!(
            Media::Link.extract(text),
            vec![("page".to_string(), "b.html".to_string())]
        );
        assert_eq!(
            Media::Image.extract(text),
            vec![("pic".to_string(), "a.png".to_string())]
        );
    }

    #[test]
    fn adjacent_links() {
        assert_eq!(Media::Link.extract("[a](1)[b](2)").len(), 2);
    }

    #[test]
    fn nested_brackets_do_not_match() {
        assert!(Media::Link.extract("[a [b]](url)").is_empty());
        assert!(Media::Link.extract("[a](u(r)l)").is_empty());
    }

    #[test]
    fn markup_reproduces_source() {
        assert_eq!(Media::Image.markup("alt", "u.png"), "![alt](u.png)");
        assert_eq!(Media::Link.markup("text", "/x"), "[text](/x)");
    }
}
