//! The document validator.
//!
//! One pass over the comment-stripped lines. Each line is handled
//! according to the current mode: inside a `csv` block only column
//! counts are checked, inside a `script` body nothing is interpreted
//! until `endscript`, and ordinary lines go through the lexical checks
//! followed by the keyword scanner feeding the nesting stack. Deferred
//! checks (alias dereferences, required settings of the last section,
//! constructs still open) run once after the last line.

use charts_syntax::comments::strip_comments;
use charts_syntax::dictionary::{
    is_known_section, is_known_setting, normalize_key, SECTION_NAMES, SETTING_NAMES,
};
use charts_syntax::keyword::{
    line_start_keyword, next_keyword, parse_section_header, ControlKeyword, FoundKeyword,
    SectionHeader,
};
use charts_syntax::location::{line_range, token_range, utf16_len};
use charts_syntax::sections::{is_tag_exempt, required_settings};
use charts_syntax::suggest::{closest, unknown_message};
use lsp_types::{Diagnostic, Position, Range};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::blocks;
use crate::csv::count_columns;
use crate::diagnostic::{error, information, warning};
use crate::registry::{SettingsScope, SymbolRegistry};
use crate::stack::NestingStack;

/// Validate a whole document, producing diagnostics in scan order.
pub fn validate(text: &str) -> Vec<Diagnostic> {
    let stripped = strip_comments(text);
    let lines: Vec<&str> = stripped.split('\n').collect();
    let mut validator = Validator::new(&lines);
    validator.run();
    validator.diagnostics
}

static SETTING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^['" \t]*([-\w]+)['" \t]*="#).expect("setting pattern"));

static ALIAS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*alias[ \t]*=[ \t]*(\S+)").expect("alias pattern"));

static VALUE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*value[ \t]*=").expect("value line pattern"));

static DEREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"value\(['"](\w+)['"]\)"#).expect("deref pattern"));

static FOR_IN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bfor\s+(\w+)\s+(in)\b").expect("for pattern"));

static FOR_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bfor\s+(\w+)").expect("for var pattern"));

static LIST_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\blist\s+(\w+)\s*=").expect("list pattern"));

static VAR_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bvar\s+(\w+)\s*=").expect("var pattern"));

static CSV_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bcsv\s+(\w+)\s*(?:=[ \t]*(.*))?$").expect("csv pattern"));

static AT_EXPR: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\{([^}]*)\}").expect("interpolation pattern"));

static IDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z_]\w*").expect("identifier pattern"));

enum Mode {
    Code,
    Script,
    Csv { expected: Option<usize> },
}

struct Validator<'a> {
    lines: &'a [&'a str],
    diagnostics: Vec<Diagnostic>,
    stack: NestingStack,
    registry: SymbolRegistry,
    settings: SettingsScope,
    section: Option<SectionHeader>,
    tag_scope: bool,
    mode: Mode,
}

impl<'a> Validator<'a> {
    fn new(lines: &'a [&'a str]) -> Self {
        Validator {
            lines,
            diagnostics: Vec::new(),
            stack: NestingStack::default(),
            registry: SymbolRegistry::default(),
            settings: SettingsScope::default(),
            section: None,
            tag_scope: false,
            mode: Mode::Code,
        }
    }

    fn run(&mut self) {
        for i in 0..self.lines.len() {
            match self.mode {
                Mode::Code => self.code_line(i),
                Mode::Script => self.script_line(i),
                Mode::Csv { .. } => self.csv_line(i),
            }
        }
        self.check_required();
        self.diagnostics.extend(self.registry.resolve_dealiases());
        let stack = std::mem::take(&mut self.stack);
        self.diagnostics.extend(stack.unclosed());
    }

    /// Inside a script body only `endscript` is recognized.
    fn script_line(&mut self, i: usize) {
        let line = self.lines[i];
        if let Some((found, after)) = line_start_keyword(line, i) {
            if found.keyword == ControlKeyword::EndScript {
                self.mode = Mode::Code;
                self.close_keyword(&found);
                let next = next_keyword(line, i, after);
                self.scan_keywords(i, next);
            }
        }
    }

    /// Inside a csv block rows are column-counted and nothing else.
    fn csv_line(&mut self, i: usize) {
        let line = self.lines[i];
        if let Some((found, after)) = line_start_keyword(line, i) {
            if found.keyword == ControlKeyword::EndCsv {
                self.mode = Mode::Code;
                self.close_keyword(&found);
                let next = next_keyword(line, i, after);
                self.scan_keywords(i, next);
                return;
            }
        }
        if blocks::is_blank(line) {
            return;
        }
        let found = count_columns(line);
        if let Mode::Csv { expected } = &mut self.mode {
            match *expected {
                None => *expected = Some(found),
                Some(header) if header != found => self.diagnostics.push(error(
                    line_range(line, i),
                    format!("Expected {header} columns, but found {found}"),
                )),
                Some(_) => {}
            }
        }
    }

    fn code_line(&mut self, i: usize) {
        let line = self.lines[i];
        if let Some(header) = parse_section_header(line, i) {
            self.enter_section(header);
            return;
        }
        if blocks::is_blank(line) {
            // a blank line terminates a tag scope
            self.tag_scope = false;
            return;
        }
        self.check_alias(line, i);
        self.check_setting(line, i);
        self.check_references(line, i);
        let first = line_start_keyword(line, i);
        self.scan_keywords(i, first);
    }

    /// Section transition: settle the previous section first, then
    /// spell-check the new name and open a fresh settings scope.
    fn enter_section(&mut self, header: SectionHeader) {
        self.check_required();
        if !is_known_section(&header.name) {
            self.diagnostics.push(error(
                header.range,
                unknown_message(&header.name, SECTION_NAMES.iter().copied()),
            ));
        }
        self.tag_scope = is_tag_exempt(&header.name);
        self.settings.reset();
        self.section = Some(header);
    }

    /// Missing required settings are reported at the section header,
    /// since the setting itself has no range.
    fn check_required(&mut self) {
        let Some(section) = &self.section else { return };
        for group in required_settings(&section.name) {
            if !group.iter().any(|name| self.settings.contains(name)) {
                self.diagnostics
                    .push(error(section.range, format!("{} is required", group[0])));
            }
        }
    }

    fn check_alias(&mut self, line: &str, i: usize) {
        if let Some(caps) = ALIAS.captures(line) {
            let name = match caps.get(1) {
                Some(name) => name,
                None => return,
            };
            let range = token_range(line, i, name.start(), name.end());
            if let Some(diag) = self.registry.declare_alias(name.as_str(), range) {
                self.diagnostics.push(diag);
            }
        }
        if VALUE_LINE.is_match(line) {
            for caps in DEREF.captures_iter(line) {
                if let Some(name) = caps.get(1) {
                    let range = token_range(line, i, name.start(), name.end());
                    self.registry.add_dealias(name.as_str(), range);
                }
            }
        }
    }

    fn check_setting(&mut self, line: &str, i: usize) {
        let Some(caps) = SETTING.captures(line) else { return };
        let Some(key) = caps.get(1) else { return };
        let normalized = normalize_key(key.as_str());
        // user-defined table columns carry arbitrary suffixes
        if normalized.starts_with("column") {
            return;
        }
        let range = token_range(line, i, key.start(), key.end());
        if self.tag_scope {
            if is_known_setting(&normalized) {
                self.diagnostics.push(information(
                    range,
                    format!("{normalized} is interpreted as a tag"),
                ));
            }
            return;
        }
        if !is_known_setting(&normalized) {
            let message = match closest(&normalized, SETTING_NAMES.iter().copied()) {
                Some(suggestion) => {
                    format!("{} is unknown. Did you mean {suggestion}?", key.as_str())
                }
                None => format!("{} is unknown.", key.as_str()),
            };
            self.diagnostics.push(error(range, message));
            return;
        }
        if !self.settings.declare(&normalized) {
            self.diagnostics.push(warning(
                range,
                format!("{} is already defined", key.as_str()),
            ));
        }
    }

    /// Every bare identifier inside `@{...}` must resolve to a declared
    /// name. Property accesses, calls and string literals are skipped.
    fn check_references(&mut self, line: &str, i: usize) {
        if !self.registry.in_for_body() {
            return;
        }
        for caps in AT_EXPR.captures_iter(line) {
            let Some(content) = caps.get(1) else { continue };
            for ident in IDENT.find_iter(content.as_str()) {
                let start = content.start() + ident.start();
                let end = content.start() + ident.end();
                if let Some(before) = line[..start].chars().next_back() {
                    if before == '.' || before == '\'' || before == '"' {
                        continue;
                    }
                }
                if let Some(after) = line[end..].chars().next() {
                    if after == '(' || after == '\'' || after == '"' {
                        continue;
                    }
                }
                let range = token_range(line, i, start, end);
                if let Some(diag) = self.registry.resolve_reference(ident.as_str(), range) {
                    self.diagnostics.push(diag);
                }
            }
        }
    }

    /// Keyword-driven stack transitions. Scanning resumes on the same
    /// line after a closer or `else`/`elseif`; an opener consumes the
    /// rest of its line.
    fn scan_keywords(&mut self, i: usize, mut next: Option<(FoundKeyword, usize)>) {
        let line = self.lines[i];
        while let Some((found, after)) = next {
            next = None;
            match found.keyword {
                ControlKeyword::For => {
                    self.stack.push(found);
                    self.handle_for(line, i);
                }
                ControlKeyword::If => {
                    self.stack.push(found);
                    self.settings.enter_branch();
                }
                ControlKeyword::List => self.handle_list(found, line, i),
                ControlKeyword::Var => self.handle_var(found, line, i),
                ControlKeyword::Csv => self.handle_csv(found, line, i),
                ControlKeyword::Script => self.handle_script(found, line, i),
                ControlKeyword::Else | ControlKeyword::ElseIf => {
                    if let Some(diag) = self.stack.handle_else(&found) {
                        self.diagnostics.push(diag);
                    }
                    self.settings.next_branch();
                    next = next_keyword(line, i, after);
                }
                ControlKeyword::EndFor
                | ControlKeyword::EndIf
                | ControlKeyword::EndList
                | ControlKeyword::EndVar
                | ControlKeyword::EndCsv
                | ControlKeyword::EndScript => {
                    self.close_keyword(&found);
                    next = next_keyword(line, i, after);
                }
            }
        }
    }

    fn close_keyword(&mut self, found: &FoundKeyword) {
        let outcome = self.stack.close(found);
        if let Some(diag) = outcome.diagnostic {
            self.diagnostics.push(diag);
        }
        match outcome.removed {
            Some(ControlKeyword::For) => self.registry.end_for(),
            Some(ControlKeyword::If) => self.settings.exit_branch(),
            _ => {}
        }
    }

    fn handle_for(&mut self, line: &str, i: usize) {
        let Some(caps) = FOR_IN.captures(line) else {
            // no `in` clause; a loop variable scope still opens
            let name = FOR_VAR.captures(line).and_then(|caps| caps.get(1));
            match name {
                Some(name) => {
                    let range = token_range(line, i, name.start(), name.end());
                    if let Some(diag) = self.registry.declare_for_var(name.as_str(), range) {
                        self.diagnostics.push(diag);
                    }
                }
                None => {
                    let _ = self.registry.declare_for_var("", line_range(line, i));
                }
            }
            return;
        };
        let variable = match caps.get(1) {
            Some(variable) => variable,
            None => unreachable!("for pattern always captures the variable"),
        };
        let range = token_range(line, i, variable.start(), variable.end());
        if let Some(diag) = self.registry.declare_for_var(variable.as_str(), range) {
            self.diagnostics.push(diag);
        }
        let in_end = match caps.get(2) {
            Some(kw) => kw.end(),
            None => unreachable!("for pattern always captures `in`"),
        };
        let rest = &line[in_end..];
        match IDENT.find(rest.trim_end()) {
            Some(source) if rest[..source.start()].trim().is_empty() => {
                let start = in_end + source.start();
                let end = in_end + source.end();
                let range = token_range(line, i, start, end);
                if let Some(diag) = self.registry.resolve_reference(source.as_str(), range) {
                    self.diagnostics.push(diag);
                }
            }
            Some(_) => {}
            None if rest.trim().is_empty() => {
                let column = utf16_len(&line[..in_end]) as u32;
                let range = Range::new(
                    Position::new(i as u32, column),
                    Position::new(i as u32, column + 1),
                );
                self.diagnostics
                    .push(error(range, "Empty 'in' statement".to_string()));
            }
            None => {}
        }
    }

    fn handle_list(&mut self, found: FoundKeyword, line: &str, i: usize) {
        if let Some(name) = LIST_DECL.captures(line).and_then(|caps| caps.get(1)) {
            let range = token_range(line, i, name.start(), name.end());
            if let Some(diag) = self.registry.declare(name.as_str(), range) {
                self.diagnostics.push(diag);
            }
        }
        if blocks::list_opens_block(line, &self.lines[i + 1..]) {
            self.stack.push(found);
        }
    }

    fn handle_var(&mut self, found: FoundKeyword, line: &str, i: usize) {
        if let Some(name) = VAR_DECL.captures(line).and_then(|caps| caps.get(1)) {
            let range = token_range(line, i, name.start(), name.end());
            if let Some(diag) = self.registry.declare(name.as_str(), range) {
                self.diagnostics.push(diag);
            }
        }
        if blocks::var_opens_block(line) {
            self.stack.push(found);
        }
    }

    fn handle_csv(&mut self, found: FoundKeyword, line: &str, i: usize) {
        let mut expected = None;
        if let Some(caps) = CSV_DECL.captures(line) {
            if let Some(name) = caps.get(1) {
                let range = token_range(line, i, name.start(), name.end());
                if let Some(diag) = self.registry.declare(name.as_str(), range) {
                    self.diagnostics.push(diag);
                }
            }
            if let Some(header) = caps.get(2) {
                if !header.as_str().trim().is_empty() {
                    expected = Some(count_columns(header.as_str()));
                }
            }
        }
        self.stack.push(found);
        self.mode = Mode::Csv { expected };
    }

    fn handle_script(&mut self, found: FoundKeyword, line: &str, i: usize) {
        if blocks::is_script_expr(line) {
            // the one-line form opens a body only if an endscript follows
            if blocks::script_expr_opens_block(&self.lines[i + 1..]) {
                self.stack.push(found);
                self.mode = Mode::Script;
            }
        } else {
            self.stack.push(found);
            self.mode = Mode::Script;
        }
    }
}
