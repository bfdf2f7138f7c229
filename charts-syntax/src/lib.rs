//! # charts-syntax
//!
//! The language-structure layer for the charts dashboard configuration
//! format: section headers, control keywords, comment handling and the
//! static tables (section hierarchy, setting dictionaries) shared by the
//! validator and the formatter in `charts-analysis`.
//!
//! Everything here is position-aware: scanners report `lsp_types::Range`
//! values in UTF-16 code units so diagnostics and edits line up with what
//! an editor expects.

pub mod comments;
pub mod dictionary;
pub mod keyword;
pub mod location;
pub mod sections;
pub mod suggest;
