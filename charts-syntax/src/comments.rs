//! Shape-preserving comment removal.
//!
//! Charts configs allow `/* ... */` block comments (possibly spanning
//! lines) and `#` line comments. Downstream analysis wants the comments
//! gone but every position kept intact, so each masked character is
//! replaced by as many spaces as it occupies in UTF-16, and newlines are
//! preserved as newlines.

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
}

/// Replace every comment in `text` with whitespace of identical shape.
///
/// The result has the same line count and the same per-line UTF-16 length
/// as the input, so ranges computed against it are valid against the
/// original text. The operation is idempotent.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut state = State::Code;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => {
                if c == '/' && chars.peek() == Some(&'*') {
                    chars.next();
                    out.push_str("  ");
                    state = State::BlockComment;
                } else if c == '#' {
                    out.push(' ');
                    state = State::LineComment;
                } else {
                    out.push(c);
                }
            }
            State::LineComment => {
                if c == '\n' {
                    out.push('\n');
                    state = State::Code;
                } else {
                    push_blank(&mut out, c);
                }
            }
            State::BlockComment => {
                if c == '\n' {
                    out.push('\n');
                } else if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("  ");
                    state = State::Code;
                } else {
                    push_blank(&mut out, c);
                }
            }
        }
    }

    out
}

fn push_blank(out: &mut String, c: char) {
    for _ in 0..c.len_utf16() {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::utf16_len;

    #[test]
    fn test_line_comment_blanked_to_eol() {
        let text = "entity = srv # comment\nmetric = cpu\n";
        let stripped = strip_comments(text);
        assert_eq!(stripped, "entity = srv          \nmetric = cpu\n");
    }

    #[test]
    fn test_block_comment_keeps_line_layout() {
        let text = "for srv /* one\ntwo */ in servers";
        let stripped = strip_comments(text);
        assert_eq!(stripped, "for srv       \n       in servers");
    }

    #[test]
    fn test_inline_block_comment() {
        let text = "for srv /* note */ in servers";
        assert_eq!(strip_comments(text), "for srv            in servers");
    }

    #[test]
    fn test_unterminated_block_comment() {
        let text = "a = 1\n/* open\nb = 2";
        assert_eq!(strip_comments(text), "a = 1\n       \n     ");
    }

    #[test]
    fn test_idempotent() {
        let text = "x = 1 # c\n/* y */ z = 2\n";
        let once = strip_comments(text);
        assert_eq!(strip_comments(&once), once);
    }

    #[test]
    fn test_utf16_shape_preserved() {
        let text = "a = 1 # caché 😀\nb = 2";
        let stripped = strip_comments(text);
        for (orig, out) in text.lines().zip(stripped.lines()) {
            assert_eq!(utf16_len(orig), utf16_len(out));
        }
    }
}
