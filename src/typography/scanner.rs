//! The scan loop and its state
//!
//! A single left-to-right pass over the input. Quote pairing is tracked
//! with two booleans plus a word-boundary flag recording whether the most
//! recently emitted character was alphanumeric. The flag is what lets an
//! apostrophe after a word read as a contraction closer ("don't", "Mary's")
//! instead of opening a new quote pair. It is a heuristic: a closing single
//! quote directly after a sentence-ending word also reads as a contraction
//! closer, and downstream output depends on that exact behavior.

use super::glyphs;
use super::tokens::{next_token, Token};
use serde::Serialize;
use std::fmt;

/// Non-fatal problem found while scanning. The input around it is copied
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Byte offset of the offending opener in the scanned text.
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// A `<tt>`/`<code>` opener with no matching closer.
    UnterminatedSpan,
    /// A `<` that opens neither a verbatim span nor a complete tag.
    MalformedTag,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnterminatedSpan => {
                write!(f, "unterminated verbatim span at byte {}", self.offset)
            }
            DiagnosticKind::MalformedTag => {
                write!(f, "malformed tag opening at byte {}", self.offset)
            }
        }
    }
}

/// Result of one scan: the rendered HTML and whatever diagnostics the pass
/// collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanOutput {
    pub html: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Whether the character most recently emitted was a word character.
/// Unknown after substitutions, which never leave a word character behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordEdge {
    Word,
    Other,
    Unknown,
}

/// Per-scan quote state. Fresh for every call, discarded at scan end.
#[derive(Debug)]
struct ScanState {
    single_open: bool,
    double_open: bool,
    word_edge: WordEdge,
}

impl ScanState {
    fn new() -> Self {
        ScanState {
            single_open: false,
            double_open: false,
            word_edge: WordEdge::Unknown,
        }
    }
}

/// Convert text to HTML with typographic punctuation, collecting
/// diagnostics for malformed spans. Total over arbitrary input.
pub fn scan(text: &str) -> ScanOutput {
    let mut html = String::with_capacity(text.len() + text.len() / 8);
    let mut diagnostics = Vec::new();
    let mut state = ScanState::new();

    let mut pos = 0;
    while pos < text.len() {
        let (token, consumed) = next_token(&text[pos..]);
        emit(token, pos, &mut html, &mut diagnostics, &mut state);
        pos += consumed;
    }

    ScanOutput { html, diagnostics }
}

/// Convert text to HTML with typographic punctuation, discarding
/// diagnostics.
pub fn to_html(text: &str) -> String {
    scan(text).html
}

fn emit(
    token: Token<'_>,
    pos: usize,
    html: &mut String,
    diagnostics: &mut Vec<Diagnostic>,
    state: &mut ScanState,
) {
    match token {
        // Verbatim spans pass through untouched except for the one escape
        // they honor: a doubled backslash collapses to a single one.
        Token::VerbatimSpan { raw } => {
            if raw.contains("\\\\") {
                html.push_str(&raw.replace("\\\\", "\\"));
            } else {
                html.push_str(raw);
            }
        }
        Token::DanglingOpener { raw } => {
            diagnostics.push(Diagnostic {
                kind: DiagnosticKind::UnterminatedSpan,
                offset: pos,
            });
            html.push_str(raw);
        }
        Token::Tag { raw } => html.push_str(raw),
        Token::Escaped { ch } => {
            html.push(ch);
            state.word_edge = WordEdge::Unknown;
        }
        Token::Ellipsis { trailing_dot } => {
            if trailing_dot {
                html.push('.');
            }
            html.push_str(glyphs::ELLIPSIS);
            state.word_edge = WordEdge::Unknown;
        }
        Token::Copyright => {
            html.push_str(glyphs::COPYRIGHT);
            state.word_edge = WordEdge::Unknown;
        }
        Token::Registered => {
            html.push_str(glyphs::REGISTERED);
            state.word_edge = WordEdge::Unknown;
        }
        Token::EmDash => {
            html.push_str(glyphs::EM_DASH);
            state.word_edge = WordEdge::Unknown;
        }
        Token::EnDash => {
            html.push_str(glyphs::EN_DASH);
            state.word_edge = WordEdge::Unknown;
        }
        Token::DoubleQuote => {
            html.push_str(if state.double_open {
                glyphs::CLOSE_DQUOTE
            } else {
                glyphs::OPEN_DQUOTE
            });
            state.double_open = !state.double_open;
            state.word_edge = WordEdge::Unknown;
        }
        Token::OpenDoubleMark => {
            html.push_str(glyphs::OPEN_DQUOTE);
            state.word_edge = WordEdge::Unknown;
        }
        Token::CloseDoubleMark => {
            html.push_str(glyphs::CLOSE_DQUOTE);
            state.word_edge = WordEdge::Unknown;
        }
        Token::Apostrophe => {
            if state.single_open {
                html.push_str(glyphs::CLOSE_SQUOTE);
                state.single_open = false;
            } else if state.word_edge == WordEdge::Word {
                // A contraction or possessive; close without pairing.
                html.push_str(glyphs::CLOSE_SQUOTE);
            } else {
                html.push_str(glyphs::OPEN_SQUOTE);
                state.single_open = true;
            }
            state.word_edge = WordEdge::Unknown;
        }
        Token::Literal { raw, ends_word } => {
            html.push_str(raw);
            state.word_edge = if ends_word {
                WordEdge::Word
            } else {
                WordEdge::Other
            };
        }
        Token::Stalled { raw } => {
            if raw.starts_with('<') {
                diagnostics.push(Diagnostic {
                    kind: DiagnosticKind::MalformedTag,
                    offset: pos,
                });
            }
            html.push_str(raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_quote_state_toggles() {
        assert_eq!(to_html("\"a\" \"b\""), "&#8220;a&#8221; &#8220;b&#8221;");
    }

    #[test]
    fn test_apostrophe_after_word_closes_without_pairing() {
        assert_eq!(to_html("don't stop"), "don&#8217;t stop");
        // The pair state stays closed, so the next bare apostrophe opens.
        assert_eq!(to_html("a' 'b'"), "a&#8217; &#8216;b&#8217;");
    }

    #[test]
    fn test_quote_marks_do_not_toggle_state() {
        assert_eq!(to_html("``a'' \"b\""), "&#8220;a&#8221; &#8220;b&#8221;");
    }

    #[test]
    fn test_tag_leaves_word_edge_untouched() {
        // The word edge set by "wow" survives the closing tag, so the
        // apostrophe still reads as a possessive closer.
        assert_eq!(to_html("<em>wow</em>'s"), "<em>wow</em>&#8217;s");
    }

    #[test]
    fn test_substitution_resets_word_edge() {
        // After the en-dash the scanner no longer believes a word precedes,
        // so the apostrophe opens a pair.
        assert_eq!(to_html("a--'b"), "a&#8211;&#8216;b");
    }

    #[test]
    fn test_unterminated_span_diagnostic() {
        let output = scan("<tt>hi");
        assert_eq!(output.html, "<tt>hi");
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(
            output.diagnostics[0],
            Diagnostic {
                kind: DiagnosticKind::UnterminatedSpan,
                offset: 0,
            }
        );
    }

    #[test]
    fn test_malformed_tag_copies_remainder() {
        let output = scan("5 < 6 -- ok");
        assert_eq!(output.html, "5 < 6 -- ok");
        assert_eq!(output.diagnostics[0].kind, DiagnosticKind::MalformedTag);
        assert_eq!(output.diagnostics[0].offset, 2);
    }

    #[test]
    fn test_clean_input_has_no_diagnostics() {
        assert!(scan("plain -- text...").diagnostics.is_empty());
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic {
            kind: DiagnosticKind::UnterminatedSpan,
            offset: 7,
        };
        assert_eq!(diag.to_string(), "unterminated verbatim span at byte 7");
    }
}
