//! Document building
//!
//! The facade between comment text and the markup parser that turns it into
//! a document tree. The parser is an injected collaborator: this module
//! defines the [`MarkupParser`] contract and owns the glue: normalize the
//! input, short-circuit blank comments to the parser's empty-document
//! sentinel, and surface parse failures with enough context to debug them.
//!
//! Failure reporting is two separate steps on purpose: the dump is written
//! to a diagnostic sink first, then the same error is returned to the
//! caller. Pipelines that catch-and-continue further out still leave a
//! visible trace of what failed and on which text.

use crate::normalize::normalize;
use std::fmt;
use std::io::{self, Write};

/// A location in the text being parsed, as reported by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Structured parse failure from the markup parser: a classification, a
/// human-readable message, and the locations it originated from, outermost
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub classification: String,
    pub message: String,
    pub trace: Vec<SourceLocation>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.classification, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The markup parser contract. The document type is the parser's own; this
/// crate never looks inside it.
pub trait MarkupParser {
    type Document;

    /// The sentinel returned for comments with no content.
    fn empty_document(&self) -> Self::Document;

    /// Parse normalized comment text into a document.
    fn parse(&self, text: &str) -> Result<Self::Document, ParseError>;
}

/// Input to a build: raw comment text, or a document that was already built
/// and only needs passing through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildInput<D> {
    Text(String),
    Document(D),
}

impl<D> From<&str> for BuildInput<D> {
    fn from(text: &str) -> Self {
        BuildInput::Text(text.to_string())
    }
}

impl<D> From<String> for BuildInput<D> {
    fn from(text: String) -> Self {
        BuildInput::Text(text)
    }
}

/// Builds documents from comment text with an injected parser.
pub struct DocumentBuilder<P> {
    parser: P,
}

impl<P: MarkupParser> DocumentBuilder<P> {
    pub fn new(parser: P) -> Self {
        DocumentBuilder { parser }
    }

    /// Build a document, dumping any parse failure to standard error before
    /// returning it.
    pub fn build(&self, input: BuildInput<P::Document>) -> Result<P::Document, ParseError> {
        self.build_with_sink(input, &mut io::stderr())
    }

    /// Build a document, dumping any parse failure to the given sink.
    ///
    /// An already-built document is returned unchanged without
    /// re-normalization. Text is normalized first; if nothing but newlines
    /// remains, the parser's empty-document sentinel is returned and the
    /// parser is never invoked.
    pub fn build_with_sink(
        &self,
        input: BuildInput<P::Document>,
        sink: &mut dyn Write,
    ) -> Result<P::Document, ParseError> {
        let text = match input {
            BuildInput::Document(document) => return Ok(document),
            BuildInput::Text(text) => text,
        };

        let normalized = normalize(&text);
        if normalized.chars().all(|c| c == '\n') {
            return Ok(self.parser.empty_document());
        }

        match self.parser.parse(&normalized) {
            Ok(document) => Ok(document),
            Err(error) => {
                report_parse_failure(&error, &normalized, sink);
                Err(error)
            }
        }
    }
}

/// Write the full context of a parse failure: classification, message,
/// location trace, and the exact text under parse, clearly delimited.
///
/// Sink write failures are ignored; a broken diagnostic stream must not
/// turn a parse error into a second failure.
pub fn report_parse_failure(error: &ParseError, text: &str, sink: &mut dyn Write) {
    let _ = writeln!(sink, "parse failure [{}]: {}", error.classification, error.message);
    for location in &error.trace {
        let _ = writeln!(sink, "  at {}", location);
    }
    let _ = writeln!(sink, "--- text under parse ---");
    let _ = writeln!(sink, "{}", text);
    let _ = writeln!(sink, "--- end text ---");
}
