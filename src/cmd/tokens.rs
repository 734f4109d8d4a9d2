//! Whitespace word splitting for input lines.

use crate::error::ShellResult;

/// Characters that separate words on a command line.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Split a raw line into its non-empty words, preserving order.
///
/// There is no quoting or escaping: a word boundary is purely a run of
/// [`DELIMITERS`]. Storage is reserved fallibly so memory exhaustion surfaces
/// as [`ShellError::Allocation`](crate::error::ShellError::Allocation).
pub fn tokenize(line: &str) -> ShellResult<Vec<String>> {
    let mut tokens = Vec::new();

    for word in line.split(is_delimiter).filter(|word| !word.is_empty()) {
        tokens.try_reserve(1)?;
        let mut token = String::new();
        token.try_reserve_exact(word.len())?;
        token.push_str(word);
        tokens.push(token);
    }

    Ok(tokens)
}

fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}
