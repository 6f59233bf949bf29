//! # smarten
//!
//! Comment text normalization and typographic HTML conversion.
//!
//! The crate is a preprocessing stage for documentation tooling. It takes the
//! raw body of a source-code comment, strips the comment decoration while
//! keeping the relative indentation of the content, and can render the
//! "smart" typographic subset of that text as HTML with proper punctuation
//! glyphs (curly quotes, dashes, ellipses, copyright marks).
//!
//! Pipeline Layout
//!
//! Processing happens in independent stages that can be composed or called
//! on their own:
//!
//! - [`normalize`] strips comment markers, expands tabs, flushes the common
//!   left margin, and trims surrounding newlines.
//! - [`typography`] is a single-pass scanner that substitutes punctuation
//!   glyphs while leaving verbatim spans and HTML tags untouched.
//! - [`document`] ties normalization to an injected markup parser and
//!   reports parse failures with full context before propagating them.
//! - [`processor`] exposes the stages behind `stage-format` spec strings,
//!   which is also what the `smarten` binary runs.
//!
//! The normalizer and the scanner are total over arbitrary text: they never
//! fail, and anything they do not recognize is copied through verbatim.

pub mod document;
pub mod normalize;
pub mod processor;
pub mod typography;

pub use document::{BuildInput, DocumentBuilder, MarkupParser, ParseError, SourceLocation};
pub use normalize::{normalize, normalize_with_style, CommentStyle};
pub use typography::{scan, to_html, Diagnostic, DiagnosticKind, ScanOutput};
