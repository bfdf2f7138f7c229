//! The indentation engine.
//!
//! Replays the keyword and section stream of the comment-stripped
//! document through its own depth model, independent of the validator,
//! so formatting works on documents that do not validate. Section
//! indent comes from the parent-allowance tables; block keywords push
//! and pop snapshots of the indent in effect when they opened. Only
//! leading whitespace is ever edited.

use charts_syntax::comments::strip_comments;
use charts_syntax::keyword::{line_start_keyword, parse_section_header, ControlKeyword};
use charts_syntax::sections::{is_nested, is_same_level, resets_indent};
use lsp_types::{FormattingOptions, Position, Range, TextEdit};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::blocks;

/// Compute one leading-whitespace edit per misindented line.
pub fn format(text: &str, options: &FormattingOptions) -> Vec<TextEdit> {
    let stripped = strip_comments(text);
    let lines: Vec<&str> = stripped.split('\n').collect();
    let unit = if options.insert_spaces {
        " ".repeat(options.tab_size as usize)
    } else {
        "\t".to_string()
    };
    let mut formatter = Formatter::new(&lines, unit);
    formatter.run();
    formatter.edits
}

static CLOSING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[ \t]*(?:end(?:for|if|list|var|script|csv)|elseif|else)\b")
        .expect("closing pattern")
});

static ELSE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[ \t]*(?:elseif|else)\b").expect("else pattern"));

static END_SCRIPT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[ \t]*endscript\b").expect("endscript line pattern"));

static END_CSV_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[ \t]*endcsv\b").expect("endcsv line pattern"));

struct Formatter<'a> {
    lines: &'a [&'a str],
    unit: String,
    current: String,
    snapshots: Vec<String>,
    previous_section: Option<String>,
    in_script: bool,
    in_csv: bool,
    edits: Vec<TextEdit>,
}

impl<'a> Formatter<'a> {
    fn new(lines: &'a [&'a str], unit: String) -> Self {
        Formatter {
            lines,
            unit,
            current: String::new(),
            snapshots: Vec::new(),
            previous_section: None,
            in_script: false,
            in_csv: false,
            edits: Vec::new(),
        }
    }

    fn run(&mut self) {
        for i in 0..self.lines.len() {
            self.handle_line(i);
        }
    }

    fn handle_line(&mut self, i: usize) {
        let line = self.lines[i];
        if self.in_script {
            // script bodies keep whatever layout the author wrote
            if !END_SCRIPT_LINE.is_match(line) {
                return;
            }
            self.in_script = false;
        }
        if self.in_csv {
            if END_CSV_LINE.is_match(line) {
                self.in_csv = false;
            } else {
                // rows align with the block body, nothing else applies
                if !blocks::is_blank(line) {
                    self.check_indent(line, i);
                }
                return;
            }
        }
        if let Some(header) = parse_section_header(line, i) {
            self.section_indent(&header.name);
            self.check_indent(line, i);
            self.increase();
            self.previous_section = Some(header.name);
            return;
        }
        if blocks::is_blank(line) {
            return;
        }
        if CLOSING.is_match(line) {
            if let Some(snapshot) = self.snapshots.pop() {
                self.current = snapshot;
            }
            if ELSE_LINE.is_match(line) {
                self.snapshots.push(self.current.clone());
            }
        }
        self.check_indent(line, i);
        if let Some((found, _)) = line_start_keyword(line, i) {
            match found.keyword {
                ControlKeyword::For | ControlKeyword::If => self.open_block(),
                ControlKeyword::Csv => {
                    self.open_block();
                    self.in_csv = true;
                }
                ControlKeyword::List => {
                    if blocks::list_opens_block(line, &self.lines[i + 1..]) {
                        self.open_block();
                    }
                }
                ControlKeyword::Var => {
                    if blocks::var_opens_block(line) {
                        self.open_block();
                    }
                }
                ControlKeyword::Script => {
                    if !blocks::is_script_expr(line)
                        || blocks::script_expr_opens_block(&self.lines[i + 1..])
                    {
                        self.open_block();
                        self.in_script = true;
                    }
                }
                ControlKeyword::Else | ControlKeyword::ElseIf => self.increase(),
                _ => {}
            }
        }
    }

    /// Header indent relative to the previous section, per the
    /// hierarchy tables.
    fn section_indent(&mut self, name: &str) {
        if resets_indent(name) {
            self.current.clear();
            return;
        }
        let Some(previous) = self.previous_section.clone() else {
            return;
        };
        self.decrease();
        if is_nested(&previous, name) {
            self.increase();
        } else if !is_same_level(&previous, name) {
            self.decrease();
        }
    }

    fn check_indent(&mut self, line: &str, i: usize) {
        let trimmed = line.trim_start_matches([' ', '\t']);
        let observed = &line[..line.len() - trimmed.len()];
        if observed != self.current {
            self.edits.push(TextEdit {
                range: Range::new(
                    Position::new(i as u32, 0),
                    Position::new(i as u32, observed.len() as u32),
                ),
                new_text: self.current.clone(),
            });
        }
    }

    fn open_block(&mut self) {
        self.snapshots.push(self.current.clone());
        self.increase();
    }

    fn increase(&mut self) {
        self.current.push_str(&self.unit);
    }

    fn decrease(&mut self) {
        let len = self.current.len().saturating_sub(self.unit.len());
        self.current.truncate(len);
    }
}
