/// ATX heading syntax: `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Level of a heading line, or `None` when the line is not a heading.
    ///
    /// The `#` run must be 1..=6 long and followed directly by a space, so
    /// `####### x` and `#x` are not headings.
    pub fn level(line: &str) -> Option<u8> {
        let hashes = line.chars().take_while(|&c| c == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        line[hashes..].starts_with(' ').then_some(hashes as u8)
    }

    /// Heading content: everything after the `#` run and its space.
    ///
    /// `level` must be what [`Heading::level`] returned for the block's
    /// first line, i.e. the count of one-byte `#` markers, so the prefix is
    /// exactly `level + 1` bytes.
    pub fn content(block: &str, level: u8) -> &str {
        block.get(level as usize + 1..).unwrap_or("")
    }

    pub fn tag(level: u8) -> String {
        format!("h{level}")
    }
}
