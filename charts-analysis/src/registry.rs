//! Declared names and their scopes.
//!
//! `list`, `var`, `csv` and `for` variables share one namespace; the
//! first three live for the whole document while loop variables are
//! popped with their `endfor`. Aliases form a second namespace whose
//! references are resolved once at end of document, so forward
//! references are fine. Settings are tracked per section with a
//! sub-scope for the current `if` branch.

use charts_syntax::suggest::unknown_message;
use lsp_types::{Diagnostic, Range};

use crate::diagnostic::error;

#[derive(Default)]
pub struct SymbolRegistry {
    declared: Vec<String>,
    for_vars: Vec<String>,
    aliases: Vec<String>,
    dealiases: Vec<(String, Range)>,
}

impl SymbolRegistry {
    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.iter().any(|n| n == name) || self.for_vars.iter().any(|n| n == name)
    }

    /// Record a `list`/`var`/`csv` name.
    pub fn declare(&mut self, name: &str, range: Range) -> Option<Diagnostic> {
        if self.is_declared(name) {
            return Some(error(range, format!("{name} is already defined")));
        }
        self.declared.push(name.to_string());
        None
    }

    /// Record a loop variable; visible until the matching `endfor`.
    pub fn declare_for_var(&mut self, name: &str, range: Range) -> Option<Diagnostic> {
        let diagnostic = self
            .is_declared(name)
            .then(|| error(range, format!("{name} is already defined")));
        self.for_vars.push(name.to_string());
        diagnostic
    }

    pub fn end_for(&mut self) {
        self.for_vars.pop();
    }

    pub fn in_for_body(&self) -> bool {
        !self.for_vars.is_empty()
    }

    /// Reject an unresolvable reference with a nearest-match suggestion.
    pub fn resolve_reference(&self, name: &str, range: Range) -> Option<Diagnostic> {
        if self.is_declared(name) {
            return None;
        }
        Some(error(range, unknown_message(name, self.candidates())))
    }

    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.declared
            .iter()
            .chain(self.for_vars.iter())
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn declare_alias(&mut self, name: &str, range: Range) -> Option<Diagnostic> {
        if self.aliases.iter().any(|a| a == name) {
            return Some(error(range, format!("{name} is already defined")));
        }
        self.aliases.push(name.to_string());
        None
    }

    /// Defer a `value('name')` dereference until end of document.
    pub fn add_dealias(&mut self, name: &str, range: Range) {
        self.dealiases.push((name.to_string(), range));
    }

    /// Check every deferred dereference against the aliases seen.
    pub fn resolve_dealiases(&self) -> Vec<Diagnostic> {
        self.dealiases
            .iter()
            .filter(|(name, _)| !self.aliases.iter().any(|a| a == name))
            .map(|(name, range)| {
                error(
                    *range,
                    unknown_message(name, self.aliases.iter().map(String::as_str)),
                )
            })
            .collect()
    }
}

/// Setting names seen in the current section, with an `if`-branch
/// sub-scope cleared at every branch boundary.
#[derive(Default)]
pub struct SettingsScope {
    section: Vec<String>,
    branch: Vec<String>,
    in_branch: bool,
}

impl SettingsScope {
    pub fn reset(&mut self) {
        self.section.clear();
        self.branch.clear();
        self.in_branch = false;
    }

    pub fn enter_branch(&mut self) {
        self.in_branch = true;
    }

    /// `else`/`elseif` start a fresh branch; `endif` returns to the
    /// section scope.
    pub fn next_branch(&mut self) {
        self.branch.clear();
    }

    pub fn exit_branch(&mut self) {
        self.branch.clear();
        self.in_branch = false;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.section.iter().any(|n| n == name) || self.branch.iter().any(|n| n == name)
    }

    /// Record a normalized setting name; repetition is reported by the
    /// caller as a warning.
    pub fn declare(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        if self.in_branch {
            self.branch.push(name.to_string());
        } else {
            self.section.push(name.to_string());
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsp_types::Position;

    fn range(line: u32) -> Range {
        Range::new(Position::new(line, 0), Position::new(line, 5))
    }

    #[test]
    fn test_shared_namespace() {
        let mut registry = SymbolRegistry::default();
        assert!(registry.declare("servers", range(0)).is_none());
        let diag = registry.declare("servers", range(1)).unwrap();
        assert_eq!(diag.message, "servers is already defined");
        let diag = registry.declare_for_var("servers", range(2)).unwrap();
        assert_eq!(diag.message, "servers is already defined");
    }

    #[test]
    fn test_for_var_scope_ends() {
        let mut registry = SymbolRegistry::default();
        assert!(registry.declare_for_var("srv", range(0)).is_none());
        assert!(registry.resolve_reference("srv", range(1)).is_none());
        registry.end_for();
        assert!(registry.resolve_reference("srv", range(2)).is_some());
        // the name is free again after its loop closed
        assert!(registry.declare_for_var("srv", range(3)).is_none());
    }

    #[test]
    fn test_reference_suggestion() {
        let mut registry = SymbolRegistry::default();
        registry.declare("servers", range(0));
        registry.declare_for_var("server", range(1));
        let diag = registry.resolve_reference("serv", range(2)).unwrap();
        assert_eq!(diag.message, "serv is unknown. Did you mean server?");
    }

    #[test]
    fn test_alias_forward_reference() {
        let mut registry = SymbolRegistry::default();
        registry.add_dealias("s1", range(0));
        assert!(registry.declare_alias("s1", range(3)).is_none());
        assert!(registry.resolve_dealiases().is_empty());
        registry.add_dealias("s2", range(5));
        let diags = registry.resolve_dealiases();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "s2 is unknown. Did you mean s1?");
    }

    #[test]
    fn test_settings_branch_scope() {
        let mut scope = SettingsScope::default();
        assert!(scope.declare("color"));
        scope.enter_branch();
        assert!(scope.declare("entity"));
        assert!(!scope.declare("entity"));
        assert!(!scope.declare("color"));
        scope.next_branch();
        assert!(scope.declare("entity"));
        scope.exit_branch();
        assert!(scope.declare("entity"));
        assert!(!scope.declare("color"));
        scope.reset();
        assert!(scope.declare("color"));
    }
}
