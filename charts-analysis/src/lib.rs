//! Validation and formatting for charts configuration documents.
//!
//! Two pure analyzers over the full document text. [`validate`] walks the
//! comment-stripped lines once and reports structural, reference,
//! consistency and lexical problems as protocol diagnostics. [`format`]
//! replays the same keyword and section stream through an independent
//! indentation model and emits one leading-whitespace edit per misindented
//! line. Neither keeps state between calls.
//!
//! The keyword vocabulary and name dictionaries consumed here are
//! re-exported for completion providers built on top of this crate.

mod blocks;
mod csv;
mod diagnostic;
mod formatter;
mod registry;
mod stack;
mod validator;

pub use formatter::format;
pub use validator::validate;

pub use charts_syntax::dictionary::{SECTION_NAMES, SETTING_NAMES};
pub use charts_syntax::keyword::{ControlKeyword, CONTROL_KEYWORDS};
