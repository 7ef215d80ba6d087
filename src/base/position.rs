//! Position tracking for tokens, AST nodes and diagnostics
//!
//! Lines and columns are 1-based, matching what editors and terminal
//! reports display. Columns count characters, not bytes.

use serde::Serialize;
use text_size::TextSize;

/// A position in source code (1-indexed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps byte offsets to 1-based line/column positions.
///
/// Built once per source text; every lookup is a binary search over
/// the recorded line starts.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<TextSize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (offset, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(TextSize::new((offset + 1) as u32));
            }
        }
        Self { text, line_starts }
    }

    /// Convert a byte offset into a position.
    ///
    /// The column is the number of characters between the last newline
    /// before `offset` and `offset`, plus one.
    pub fn position(&self, offset: TextSize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = usize::from(self.line_starts[line]);
        let end = usize::from(offset).min(self.text.len());
        let column = self
            .text
            .get(start..end)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0);
        Position::new(line as u32 + 1, column as u32 + 1)
    }

    /// Raw text of a 1-based line, without its line terminator.
    pub fn line_text(&self, line: u32) -> &'a str {
        let Some(idx) = (line as usize).checked_sub(1) else {
            return "";
        };
        let Some(start) = self.line_starts.get(idx) else {
            return "";
        };
        let start = usize::from(*start);
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|s| usize::from(*s))
            .unwrap_or(self.text.len());
        self.text
            .get(start..end)
            .unwrap_or("")
            .trim_end_matches(['\n', '\r'])
    }
}

/// Build a caret string pointing at `column` (1-based), for terminal display.
pub fn caret_pointer(column: u32) -> String {
    let mut pointer = " ".repeat(column.saturating_sub(1) as usize);
    pointer.push('^');
    pointer
}
