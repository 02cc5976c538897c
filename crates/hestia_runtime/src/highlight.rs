//! Syntax highlighting for the REPL.

use std::borrow::Cow;

/// Highlighter for REPL commands and rule text.
pub struct HestiaHighlighter;

impl HestiaHighlighter {
    /// Creates a new highlighter.
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    ///
    /// Meta commands (`:assert`, `:rule`, ...) are bold, condition
    /// operators are cyan, and the rule arrow and `+fact` actions are
    /// magenta.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.contains([':', '&', '|', '!', '-', '+']) {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut rest = line;

        if rest.starts_with(':') {
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            result.push_str("\x1b[1m");
            result.push_str(&rest[..end]);
            result.push_str("\x1b[0m");
            rest = &rest[end..];
        }

        let mut chars = rest.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            match c {
                '&' | '|' | '!' => {
                    result.push_str("\x1b[36m");
                    result.push(c);
                    result.push_str("\x1b[0m");
                }
                '-' if rest[i..].starts_with("->") => {
                    chars.next();
                    result.push_str("\x1b[35m->\x1b[0m");
                }
                '+' if rest[..i].trim_end().ends_with("->") => {
                    result.push_str("\x1b[35m+");
                    while let Some(&(_, next)) = chars.peek() {
                        if next.is_whitespace() {
                            break;
                        }
                        result.push(next);
                        chars.next();
                    }
                    result.push_str("\x1b[0m");
                }
                _ => result.push(c),
            }
        }

        Cow::Owned(result)
    }
}

impl Default for HestiaHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
