//! Control keywords and the re-entrant line scanner.
//!
//! The charts format has a closed vocabulary of fourteen block keywords.
//! `next_keyword` is a resumable scanner: it takes a line and a byte
//! cursor and returns the next keyword at or after the cursor together
//! with the cursor for the following call, so several keywords on one
//! line are recovered one by one. `line_start_keyword` applies the
//! stricter rule used for the first token on a line: nothing but blanks
//! may precede it.

use std::fmt;

use lsp_types::Range;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::location::token_range;

/// A reserved block-control keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKeyword {
    For,
    EndFor,
    If,
    ElseIf,
    Else,
    EndIf,
    List,
    EndList,
    Var,
    EndVar,
    Csv,
    EndCsv,
    Script,
    EndScript,
}

/// Every keyword, in declaration order. Exposed as the data source for
/// completion providers.
pub const CONTROL_KEYWORDS: [ControlKeyword; 14] = [
    ControlKeyword::For,
    ControlKeyword::EndFor,
    ControlKeyword::If,
    ControlKeyword::ElseIf,
    ControlKeyword::Else,
    ControlKeyword::EndIf,
    ControlKeyword::List,
    ControlKeyword::EndList,
    ControlKeyword::Var,
    ControlKeyword::EndVar,
    ControlKeyword::Csv,
    ControlKeyword::EndCsv,
    ControlKeyword::Script,
    ControlKeyword::EndScript,
];

impl ControlKeyword {
    /// The lowercase source spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ControlKeyword::For => "for",
            ControlKeyword::EndFor => "endfor",
            ControlKeyword::If => "if",
            ControlKeyword::ElseIf => "elseif",
            ControlKeyword::Else => "else",
            ControlKeyword::EndIf => "endif",
            ControlKeyword::List => "list",
            ControlKeyword::EndList => "endlist",
            ControlKeyword::Var => "var",
            ControlKeyword::EndVar => "endvar",
            ControlKeyword::Csv => "csv",
            ControlKeyword::EndCsv => "endcsv",
            ControlKeyword::Script => "script",
            ControlKeyword::EndScript => "endscript",
        }
    }

    /// Parse a lowercase spelling back into a keyword.
    pub fn parse(word: &str) -> Option<Self> {
        CONTROL_KEYWORDS.iter().copied().find(|k| k.as_str() == word)
    }

    /// Keywords that open a block construct. `list` and `var` open one
    /// only when their declaration continues past the line; that decision
    /// belongs to the caller.
    pub fn is_opener(self) -> bool {
        matches!(
            self,
            ControlKeyword::For
                | ControlKeyword::If
                | ControlKeyword::List
                | ControlKeyword::Var
                | ControlKeyword::Csv
                | ControlKeyword::Script
        )
    }

    /// `end*` keywords.
    pub fn is_closer(self) -> bool {
        self.opener().is_some()
    }

    /// For an `end*` keyword, the opener it closes.
    pub fn opener(self) -> Option<ControlKeyword> {
        match self {
            ControlKeyword::EndFor => Some(ControlKeyword::For),
            ControlKeyword::EndIf => Some(ControlKeyword::If),
            ControlKeyword::EndList => Some(ControlKeyword::List),
            ControlKeyword::EndVar => Some(ControlKeyword::Var),
            ControlKeyword::EndCsv => Some(ControlKeyword::Csv),
            ControlKeyword::EndScript => Some(ControlKeyword::Script),
            _ => None,
        }
    }

    /// For an opener, the `end*` keyword that closes it.
    pub fn closer(self) -> Option<ControlKeyword> {
        match self {
            ControlKeyword::For => Some(ControlKeyword::EndFor),
            ControlKeyword::If => Some(ControlKeyword::EndIf),
            ControlKeyword::List => Some(ControlKeyword::EndList),
            ControlKeyword::Var => Some(ControlKeyword::EndVar),
            ControlKeyword::Csv => Some(ControlKeyword::EndCsv),
            ControlKeyword::Script => Some(ControlKeyword::EndScript),
            _ => None,
        }
    }
}

impl fmt::Display for ControlKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A keyword occurrence with its position, produced fresh per scan.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundKeyword {
    pub keyword: ControlKeyword,
    pub range: Range,
}

// Longer spellings listed first so `endfor` is never read as `for`.
static KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(endvar|endcsv|endfor|elseif|endif|endscript|endlist|script|else|if|list|for|csv|var)\b",
    )
    .expect("keyword pattern")
});

static LEADING_BLANKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*").expect("leading blanks pattern"));

/// Next keyword at or after byte offset `cursor`, with the cursor for the
/// following call.
pub fn next_keyword(line: &str, line_no: usize, cursor: usize) -> Option<(FoundKeyword, usize)> {
    let m = KEYWORD.find_at(line, cursor)?;
    let word = line[m.start()..m.end()].to_ascii_lowercase();
    let keyword = match ControlKeyword::parse(&word) {
        Some(k) => k,
        None => unreachable!("scanner matched a word outside the keyword vocabulary"),
    };
    let found = FoundKeyword {
        keyword,
        range: token_range(line, line_no, m.start(), m.end()),
    };
    Some((found, m.end()))
}

/// The keyword opening a line, if the line starts with one (only blanks
/// before it).
pub fn line_start_keyword(line: &str, line_no: usize) -> Option<(FoundKeyword, usize)> {
    let indent_end = LEADING_BLANKS
        .find(line)
        .map(|m| m.end())
        .unwrap_or_default();
    let m = KEYWORD.find_at(line, indent_end)?;
    if m.start() != indent_end {
        return None;
    }
    next_keyword(line, line_no, indent_end)
}

/// A `[name]` section header with the range of the bare name.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionHeader {
    /// Lowercased section name.
    pub name: String,
    /// Range covering the name, brackets excluded.
    pub range: Range,
}

static SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t]*)\[(\w+)\]").expect("section pattern"));

/// Parse a section header such as `  [series]`.
pub fn parse_section_header(line: &str, line_no: usize) -> Option<SectionHeader> {
    let caps = SECTION.captures(line)?;
    let name = caps.get(2)?;
    Some(SectionHeader {
        name: name.as_str().to_ascii_lowercase(),
        range: token_range(line, line_no, name.start(), name.end()),
    })
}
