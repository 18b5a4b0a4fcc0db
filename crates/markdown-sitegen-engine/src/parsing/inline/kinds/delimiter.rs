use crate::parsing::inline::InlineSpan;

/// A symmetric marker that opens and closes a styled span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    /// Application order. `**` must run before `*` since it contains it.
    pub const ORDER: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Italic, Delimiter::Code];

    pub const fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "*",
            Delimiter::Code => "`",
        }
    }

    /// Wraps text found between a pair of markers.
    pub fn wrap(self, text: String) -> InlineSpan {
        match self {
            Delimiter::Bold => InlineSpan::Bold(text),
            Delimiter::Italic => InlineSpan::Italic(text),
            Delimiter::Code => InlineSpan::Code(text),
        }
    }
}
