//! The nesting stack of open block constructs.
//!
//! Openers are pushed as they are scanned. A closer pops the top entry
//! when it matches; otherwise the stack is searched for the expected
//! opener so an out-of-order close removes the right entry without
//! disturbing the constructs still open above it.

use charts_syntax::keyword::{ControlKeyword, FoundKeyword};
use lsp_types::Diagnostic;

use crate::diagnostic::error;

/// What a close attempt did to the stack.
pub struct CloseOutcome {
    pub diagnostic: Option<Diagnostic>,
    /// The opener removed from the stack, if one was found.
    pub removed: Option<ControlKeyword>,
}

#[derive(Default)]
pub struct NestingStack {
    entries: Vec<FoundKeyword>,
}

impl NestingStack {
    pub fn push(&mut self, opener: FoundKeyword) {
        self.entries.push(opener);
    }

    /// Close the construct matching `closer`, which must be an `end*`
    /// keyword.
    pub fn close(&mut self, closer: &FoundKeyword) -> CloseOutcome {
        let expected = match closer.keyword.opener() {
            Some(opener) => opener,
            None => unreachable!("close called with a non-closer keyword"),
        };
        let top = match self.entries.pop() {
            Some(top) => top,
            None => {
                return CloseOutcome {
                    diagnostic: Some(no_matching(closer, expected)),
                    removed: None,
                }
            }
        };
        if top.keyword == expected {
            return CloseOutcome {
                diagnostic: None,
                removed: Some(expected),
            };
        }
        self.entries.push(top);
        match self.entries.iter().rposition(|e| e.keyword == expected) {
            Some(index) => {
                let head = self.entries[self.entries.len() - 1].keyword;
                self.entries.remove(index);
                CloseOutcome {
                    diagnostic: Some(error(
                        closer.range,
                        format!("{expected} has finished before {head}"),
                    )),
                    removed: Some(expected),
                }
            }
            None => CloseOutcome {
                diagnostic: Some(no_matching(closer, expected)),
                removed: None,
            },
        }
    }

    /// `else`/`elseif` require an open `if` on top of the stack and do
    /// not pop it. A non-`if` top over an open `if` is reported as an
    /// unfinished construct; without any `if` on the stack the branch
    /// keyword has nothing to attach to.
    pub fn handle_else(&self, found: &FoundKeyword) -> Option<Diagnostic> {
        match self.entries.last() {
            Some(top) if top.keyword == ControlKeyword::If => None,
            Some(top) if self.entries.iter().any(|e| e.keyword == ControlKeyword::If) => {
                Some(error(
                    found.range,
                    format!("{} has started before {} has finished", found.keyword, top.keyword),
                ))
            }
            _ => Some(error(
                found.range,
                format!("{} has no matching if", found.keyword),
            )),
        }
    }

    /// One diagnostic per construct still open at end of document, at
    /// the opener's own range.
    pub fn unclosed(self) -> Vec<Diagnostic> {
        self.entries
            .into_iter()
            .map(|entry| {
                let closer = match entry.keyword.closer() {
                    Some(closer) => closer,
                    None => unreachable!("only openers are pushed"),
                };
                error(
                    entry.range,
                    format!("{} has no matching {}", entry.keyword, closer),
                )
            })
            .collect()
    }
}

fn no_matching(closer: &FoundKeyword, expected: ControlKeyword) -> Diagnostic {
    error(
        closer.range,
        format!("{} has no matching {}", closer.keyword, expected),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsp_types::{Position, Range};

    fn kw(keyword: ControlKeyword, line: u32) -> FoundKeyword {
        FoundKeyword {
            keyword,
            range: Range::new(Position::new(line, 0), Position::new(line, 3)),
        }
    }

    #[test]
    fn test_matched_close() {
        let mut stack = NestingStack::default();
        stack.push(kw(ControlKeyword::For, 0));
        let outcome = stack.close(&kw(ControlKeyword::EndFor, 2));
        assert!(outcome.diagnostic.is_none());
        assert_eq!(outcome.removed, Some(ControlKeyword::For));
        assert!(stack.unclosed().is_empty());
    }

    #[test]
    fn test_close_without_opener() {
        let mut stack = NestingStack::default();
        let outcome = stack.close(&kw(ControlKeyword::EndIf, 0));
        let diag = outcome.diagnostic.unwrap();
        assert_eq!(diag.message, "endif has no matching if");
        assert!(outcome.removed.is_none());
    }

    #[test]
    fn test_out_of_order_close() {
        let mut stack = NestingStack::default();
        stack.push(kw(ControlKeyword::For, 0));
        stack.push(kw(ControlKeyword::If, 1));
        let outcome = stack.close(&kw(ControlKeyword::EndFor, 2));
        let diag = outcome.diagnostic.unwrap();
        assert_eq!(diag.message, "for has finished before if");
        assert_eq!(outcome.removed, Some(ControlKeyword::For));
        // the inner `if` stays open and still closes cleanly
        let outcome = stack.close(&kw(ControlKeyword::EndIf, 3));
        assert!(outcome.diagnostic.is_none());
        assert!(stack.unclosed().is_empty());
    }

    #[test]
    fn test_else_needs_if_on_top() {
        let mut stack = NestingStack::default();
        assert_eq!(
            stack.handle_else(&kw(ControlKeyword::Else, 0)).unwrap().message,
            "else has no matching if"
        );
        stack.push(kw(ControlKeyword::If, 0));
        stack.push(kw(ControlKeyword::For, 1));
        assert_eq!(
            stack.handle_else(&kw(ControlKeyword::ElseIf, 2)).unwrap().message,
            "elseif has started before for has finished"
        );
        let outcome = stack.close(&kw(ControlKeyword::EndFor, 3));
        assert!(outcome.diagnostic.is_none());
        assert!(stack.handle_else(&kw(ControlKeyword::Else, 4)).is_none());
    }

    #[test]
    fn test_else_with_no_if_anywhere() {
        let mut stack = NestingStack::default();
        stack.push(kw(ControlKeyword::For, 0));
        assert_eq!(
            stack.handle_else(&kw(ControlKeyword::Else, 1)).unwrap().message,
            "else has no matching if"
        );
    }

    #[test]
    fn test_unclosed_reports_opener_ranges() {
        let mut stack = NestingStack::default();
        stack.push(kw(ControlKeyword::Csv, 0));
        stack.push(kw(ControlKeyword::If, 3));
        let diags = stack.unclosed();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].message, "csv has no matching endcsv");
        assert_eq!(diags[0].range.start.line, 0);
        assert_eq!(diags[1].message, "if has no matching endif");
    }
}
