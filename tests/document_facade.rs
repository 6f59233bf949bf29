//! Integration tests for the document-build facade

use smarten::document::{
    report_parse_failure, BuildInput, DocumentBuilder, MarkupParser, ParseError, SourceLocation,
};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
struct FakeDocument {
    text: String,
}

/// Parser stub that records how often it ran and can be primed to fail.
struct RecordingParser {
    calls: Rc<Cell<usize>>,
    failure: Option<ParseError>,
}

impl RecordingParser {
    fn succeeding() -> (Self, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let parser = RecordingParser {
            calls: Rc::clone(&calls),
            failure: None,
        };
        (parser, calls)
    }

    fn failing(error: ParseError) -> Self {
        RecordingParser {
            calls: Rc::new(Cell::new(0)),
            failure: Some(error),
        }
    }
}

impl MarkupParser for RecordingParser {
    type Document = FakeDocument;

    fn empty_document(&self) -> FakeDocument {
        FakeDocument {
            text: String::new(),
        }
    }

    fn parse(&self, text: &str) -> Result<FakeDocument, ParseError> {
        self.calls.set(self.calls.get() + 1);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(FakeDocument {
                text: text.to_string(),
            }),
        }
    }
}

fn syntax_error() -> ParseError {
    ParseError {
        classification: "syntax".to_string(),
        message: "unexpected block terminator".to_string(),
        trace: vec![
            SourceLocation { line: 2, column: 5 },
            SourceLocation { line: 4, column: 1 },
        ],
    }
}

#[test]
fn test_text_input_is_normalized_before_parsing() {
    let (parser, _) = RecordingParser::succeeding();
    let builder = DocumentBuilder::new(parser);
    let document = builder.build(BuildInput::from("# first\n# second\n")).unwrap();
    assert_eq!(document.text, "first\nsecond");
}

#[test]
fn test_document_input_is_returned_unchanged() {
    let (parser, calls) = RecordingParser::succeeding();
    let builder = DocumentBuilder::new(parser);
    let document = FakeDocument {
        text: "# raw markers left alone".to_string(),
    };
    let rebuilt = builder
        .build(BuildInput::Document(document.clone()))
        .unwrap();
    assert_eq!(rebuilt, document);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_empty_input_returns_sentinel_without_parsing() {
    let (parser, calls) = RecordingParser::succeeding();
    let builder = DocumentBuilder::new(parser);
    let document = builder.build(BuildInput::from("")).unwrap();
    assert_eq!(document.text, "");
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_blank_input_normalizes_to_space_and_is_parsed() {
    // Newline-and-space input collapses to a single space, which is not a
    // newline-only string, so it does reach the parser.
    let (parser, calls) = RecordingParser::succeeding();
    let builder = DocumentBuilder::new(parser);
    let document = builder.build(BuildInput::from("\n \n")).unwrap();
    assert_eq!(document.text, " ");
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_parse_failure_is_dumped_and_returned() {
    let builder = DocumentBuilder::new(RecordingParser::failing(syntax_error()));
    let mut sink = Vec::new();

    let result = builder.build_with_sink(BuildInput::from("# broken\n"), &mut sink);
    assert_eq!(result, Err(syntax_error()));

    let dump = String::from_utf8(sink).unwrap();
    assert!(dump.contains("parse failure [syntax]: unexpected block terminator"));
    assert!(dump.contains("  at line 2, column 5"));
    assert!(dump.contains("  at line 4, column 1"));
    assert!(dump.contains("--- text under parse ---"));
    assert!(dump.contains("broken"));
    assert!(dump.contains("--- end text ---"));
}

#[test]
fn test_report_contains_the_exact_text_parsed() {
    let mut sink = Vec::new();
    report_parse_failure(&syntax_error(), "line one\nline two", &mut sink);
    let dump = String::from_utf8(sink).unwrap();
    assert!(dump.contains("line one\nline two"));
}
