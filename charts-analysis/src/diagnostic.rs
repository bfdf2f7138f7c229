//! Diagnostic construction.

use lsp_types::{Diagnostic, DiagnosticSeverity, Range};

pub const SOURCE: &str = "charts";

pub fn create_diagnostic(range: Range, severity: DiagnosticSeverity, message: String) -> Diagnostic {
    Diagnostic {
        range,
        severity: Some(severity),
        code: None,
        code_description: None,
        source: Some(SOURCE.to_string()),
        message,
        related_information: None,
        tags: None,
        data: None,
    }
}

pub fn error(range: Range, message: String) -> Diagnostic {
    create_diagnostic(range, DiagnosticSeverity::ERROR, message)
}

pub fn warning(range: Range, message: String) -> Diagnostic {
    create_diagnostic(range, DiagnosticSeverity::WARNING, message)
}

pub fn information(range: Range, message: String) -> Diagnostic {
    create_diagnostic(range, DiagnosticSeverity::INFORMATION, message)
}
