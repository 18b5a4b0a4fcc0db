/// A fenced code block: the whole block opens and closes with ```` ``` ````.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    pub fn matches(block: &str) -> bool {
        block.starts_with(Self::FENCE) && block.ends_with(Self::FENCE)
    }

    /// Text between the fences, trimmed. Code is literal: no inline parsing.
    pub fn content(block: &str) -> &str {
        let len = Self::FENCE.len();
        block
            .get(len..block.len().saturating_sub(len))
            .unwrap_or("")
            .trim()
    }
}
