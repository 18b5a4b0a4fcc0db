/// The kind of a block. Exactly one applies to every block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#`..`######` followed by a space; level is 1..=6.
    Heading { level: u8 },
    /// Fenced with ```` ``` ```` at both ends.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- ` or `* `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps.
    OrderedList,
    /// Default when nothing else matches.
    Paragraph,
}

/// A trimmed run of document text between blank lines, with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub kind: BlockKind,
}
