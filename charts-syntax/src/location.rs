//! UTF-16 position arithmetic for protocol ranges.
//!
//! Scanners work on `&str` byte offsets; editors address documents in
//! UTF-16 code units. The helpers here convert byte spans inside a single
//! line into `lsp_types` ranges.

use lsp_types::{Position, Range};

/// Length of `s` in UTF-16 code units.
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Range covering the byte span `start..end` of `line` on line `line_no`.
///
/// Both offsets must lie on character boundaries of `line`.
pub fn token_range(line: &str, line_no: usize, start: usize, end: usize) -> Range {
    let from = utf16_len(&line[..start]);
    let to = from + utf16_len(&line[start..end]);
    Range::new(
        Position::new(line_no as u32, from as u32),
        Position::new(line_no as u32, to as u32),
    )
}

/// Range covering the whole of `line`.
pub fn line_range(line: &str, line_no: usize) -> Range {
    token_range(line, line_no, 0, line.len())
}
