/// `- item` / `* item` lists.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    pub fn matches(block: &str) -> bool {
        block
            .split('\n')
            .all(|line| Self::MARKERS.iter().any(|m| line.starts_with(m)))
    }

    /// Item text after the two-character marker.
    pub fn item(line: &str) -> &str {
        line.get(2..).unwrap_or("")
    }
}

/// `1. item` lists numbered consecutively from one.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// Line `i` (1-based) must start with `{i}. ` after trimming. A single
    /// gap or misnumbered line disqualifies the whole block.
    pub fn matches(block: &str) -> bool {
        let mut count = 0;
        for (i, line) in block.lines().enumerate() {
            let prefix = format!("{}{}", i + 1, Self::SEPARATOR);
            if !line.trim().starts_with(&prefix) {
                return false;
            }
            count += 1;
        }
        count > 0
    }

    /// Item text after the first `. `.
    pub fn item(line: &str) -> &str {
        line.split_once(Self::SEPARATOR)
            .map_or(line, |(_, rest)| rest)
    }
}
