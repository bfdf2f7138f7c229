//! Declaration, scoping and reference resolution checks.

use charts_analysis::validate;
use lsp_types::{Position, Range};

fn range(line: u32, start: u32, end: u32) -> Range {
    Range::new(Position::new(line, start), Position::new(line, end))
}

#[test]
fn test_list_and_var_share_a_namespace() {
    let text = "list servers = 'srv1', 'srv2'\nvar servers = 'srv3'\n";
    let diags = validate(text);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "servers is already defined");
    assert_eq!(diags[0].range, range(1, 4, 11));
}

#[test]
fn test_csv_name_collides_with_list() {
    let text = "list servers = 'srv1'\n\
                csv servers = name, value\n\
                srv2, 1\n\
                endcsv\n";
    let diags = validate(text);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "servers is already defined");
    assert_eq!(diags[0].range, range(1, 4, 11));
}

#[test]
fn test_loop_variable_freed_after_endfor() {
    let text = "list servers = 'srv1'\n\
                for srv in servers\n\
                endfor\n\
                for srv in servers\n\
                endfor\n";
    assert!(validate(text).is_empty());
}

#[test]
fn test_nested_loop_variable_shadowing_reported() {
    let text = "list servers = 'srv1'\n\
                for srv in servers\n\
                for srv in servers\n\
                endfor\n\
                endfor\n";
    let diags = validate(text);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "srv is already defined");
    assert_eq!(diags[0].range, range(2, 4, 7));
}

#[test]
fn test_undeclared_loop_source_suggestion() {
    let text = "list servers = 'srv1'\nfor srv in server\nendfor\n";
    let diags = validate(text);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "server is unknown. Did you mean servers?");
    assert_eq!(diags[0].range, range(1, 11, 17));
}

#[test]
fn test_empty_in_statement() {
    let diags = validate("for srv in   \nendfor\n");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "Empty 'in' statement");
    assert_eq!(diags[0].range, range(0, 10, 11));
}

#[test]
fn test_interpolation_decomposes_expressions() {
    let text = "list servers = 'srv1', 'srv2'\n\
                var coef = 2\n\
                for srv in servers\n\
                entity = @{srv + coef * 10}\n\
                label = @{trim(srv)} @{srv.name} @{'plain'}\n\
                endfor\n";
    assert!(validate(text).is_empty());
}

#[test]
fn test_interpolation_unknown_identifier() {
    let text = "list servers = 'srv1'\n\
                for server in servers\n\
                entity = @{serv}\n\
                endfor\n";
    let diags = validate(text);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "serv is unknown. Did you mean server?");
    assert_eq!(diags[0].range, range(2, 11, 15));
}

#[test]
fn test_alias_redeclaration() {
    let text = "[series]\nentity = e\nmetric = m\nalias = total\n\
                [series]\nentity = e\nmetric = m\nalias = total\n";
    let diags = validate(text);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "total is already defined");
    assert_eq!(diags[0].range, range(7, 8, 13));
}

#[test]
fn test_dealias_forward_reference_allowed() {
    let text = "[series]\nentity = e\nmetric = m\nvalue = value('total') * 2\n\
                [series]\nentity = e\nmetric = m\nalias = total\n";
    assert!(validate(text).is_empty());
}

#[test]
fn test_dealias_without_declaration() {
    let text = "[series]\nentity = e\nmetric = m\nalias = total\n\
                [series]\nentity = e\nmetric = m\nvalue = value('sum') / 2\n";
    let diags = validate(text);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "sum is unknown. Did you mean total?");
    assert_eq!(diags[0].range, range(7, 15, 18));
}
