/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters. They are the default when no other block
/// matches, and their whole text is inline-parsed.
pub struct Paragraph;

impl Paragraph {
    pub const TAG: &'static str = "p";
}
