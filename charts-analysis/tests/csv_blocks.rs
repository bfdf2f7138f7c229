//! Column counting inside `csv` blocks.

use charts_analysis::validate;
use lsp_types::{Position, Range};

fn range(line: u32, start: u32, end: u32) -> Range {
    Range::new(Position::new(line, start), Position::new(line, end))
}

#[test]
fn test_inline_header_mismatch() {
    let text = "csv cities = name, country\n\
                Moscow, Russia\n\
                Vienna\n\
                endcsv\n";
    let diags = validate(text);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "Expected 2 columns, but found 1");
    assert_eq!(diags[0].range, range(2, 0, 6));
}

#[test]
fn test_header_on_following_line() {
    let text = "csv cities =\n\
                name, country, population\n\
                Moscow, Russia, 12000000\n\
                endcsv\n";
    assert!(validate(text).is_empty());
}

#[test]
fn test_quoted_value_is_one_column() {
    let text = "csv cities = name, location\n\
                Vienna, '48N, 16E'\n\
                endcsv\n";
    assert!(validate(text).is_empty());
}

#[test]
fn test_blank_rows_skipped() {
    let text = "csv data = key, value\n\
                \n\
                a, 1\n\
                endcsv\n";
    assert!(validate(text).is_empty());
}

#[test]
fn test_keywords_inside_rows_not_interpreted() {
    let text = "csv data = key, value\n\
                for, 1\n\
                if, 2\n\
                endcsv\n";
    assert!(validate(text).is_empty());
}

#[test]
fn test_unterminated_csv() {
    let text = "csv cities = name, country\n\
                Moscow, Russia\n\
                encsv\n";
    let diags = validate(text);
    assert_eq!(diags.len(), 2);
    assert_eq!(diags[0].message, "Expected 2 columns, but found 1");
    assert_eq!(diags[0].range, range(2, 0, 5));
    assert_eq!(diags[1].message, "csv has no matching endcsv");
    assert_eq!(diags[1].range, range(0, 0, 3));
}
