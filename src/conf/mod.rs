//! Compiled-in shell settings.

/// Maximum line size in bytes, counting the line terminator and a trailing NUL.
pub const LINE_SIZE: usize = 512;

/// Label shown in front of the `> ` prompt marker.
pub const PROMPT_LABEL: &str = "chainsh";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt_label: String,
    pub line_size: usize,
}

impl ShellConfig {
    /// Largest number of content bytes a line may carry, excluding its newline.
    pub fn max_line_content(&self) -> usize {
        self.line_size.saturating_sub(2)
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt_label: PROMPT_LABEL.to_string(),
            line_size: LINE_SIZE,
        }
    }
}
