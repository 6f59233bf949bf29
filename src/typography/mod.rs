//! Typographic HTML scanner
//!
//! Converts the "smart" punctuation subset of plain text into HTML glyph
//! references: curly quotes, em/en dashes, ellipses, and copyright marks.
//! `<tt>`/`<code>` spans and other HTML tags pass through untouched, so the
//! scanner can run over text that already carries markup.
//!
//! This is a formatter-side transform: it is meant for the leaf text nodes
//! of a parsed document, never for structural markup, and it is independent
//! of the comment normalizer.
//!
//! The scan is a single pass with an ordered list of recognizers and a
//! small per-call state record for quote pairing.
//! It never fails; constructs it does not recognize are copied through
//! verbatim, and malformed spans surface as [`Diagnostic`] values.

pub mod glyphs;
mod scanner;
mod tokens;

pub use scanner::{scan, to_html, Diagnostic, DiagnosticKind, ScanOutput};
