//! Single-line-completion rules for `list`, `var` and `script`.
//!
//! These three keywords open a block only when their declaration
//! continues past the current line. The validator and the formatter both
//! consult the same rules so their nesting models never diverge.

use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_CONTINUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(=|,)[ \t]*$").expect("continuation pattern"));

static LEADING_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*,").expect("leading comma pattern"));

static END_LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bendlist\b").expect("endlist pattern"));

static VAR_CONTINUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"=\s*[\[{](.*,)?\s*$").expect("var continuation pattern"));

static END_SCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bendscript\b").expect("endscript pattern"));

static SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bscript\b").expect("script pattern"));

static SCRIPT_EXPR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bscript\s*=\s*\S").expect("script expr pattern"));

static BLANK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*$").expect("blank pattern"));

pub fn is_blank(line: &str) -> bool {
    BLANK.is_match(line)
}

/// A `list` declaration continues past its line when the line ends with
/// `=` or `,`, or when the next non-blank line begins with `,` or holds
/// the `endlist`.
pub fn list_opens_block(line: &str, following: &[&str]) -> bool {
    if TRAILING_CONTINUATION.is_match(line) {
        return true;
    }
    match following.iter().find(|l| !is_blank(l)) {
        Some(next) => LEADING_COMMA.is_match(next) || END_LIST.is_match(next),
        None => false,
    }
}

/// A `var` declaration continues when its value opens a bracket left
/// unclosed on the line.
pub fn var_opens_block(line: &str) -> bool {
    VAR_CONTINUATION.is_match(line)
}

/// Whether the line is the one-line `script = <expr>` form rather than a
/// bare `script` block opener.
pub fn is_script_expr(line: &str) -> bool {
    SCRIPT_EXPR.is_match(line)
}

/// A `script = <expr>` opens a multi-line body only when an `endscript`
/// appears later, before the next `script`.
pub fn script_expr_opens_block(following: &[&str]) -> bool {
    for line in following {
        if END_SCRIPT.is_match(line) {
            return true;
        }
        if SCRIPT.is_match(line) {
            return false;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_list_stays_closed() {
        assert!(!list_opens_block("list servers = 'a', 'b'", &["entity = e"]));
    }

    #[test]
    fn test_list_trailing_comma_opens() {
        assert!(list_opens_block("list servers = 'a',", &[]));
        assert!(list_opens_block("list servers =", &[]));
    }

    #[test]
    fn test_list_continuation_on_next_line() {
        assert!(list_opens_block("list servers = 'a'", &["", "  , 'b'"]));
        assert!(list_opens_block("list servers = 'a' 'b'", &["endlist"]));
        assert!(!list_opens_block("list servers = 'a'", &["", "metric = m"]));
    }

    #[test]
    fn test_var_continuation() {
        assert!(var_opens_block("var v = ["));
        assert!(var_opens_block("var v = { 'a': 1,"));
        assert!(!var_opens_block("var v = [1, 2]"));
    }

    #[test]
    fn test_script_forms() {
        assert!(is_script_expr("script = console.log(1)"));
        assert!(!is_script_expr("script"));
        assert!(script_expr_opens_block(&["alert('x')", "endscript"]));
        assert!(!script_expr_opens_block(&["entity = e", "script = a"]));
        assert!(!script_expr_opens_block(&[]));
    }
}
