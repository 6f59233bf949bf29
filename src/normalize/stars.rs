//! Star stripping for C-style comment blocks
//!
//! `/* ... */` blocks carry their decoration in three places: the opening
//! and closing delimiter runs, an optional leading `*` on each interior
//! line, and an optional `Document-method:` directive naming the method the
//! block documents. All of it is blanked to spaces (length preserved, so
//! columns survive for the margin flush) and lines left holding only
//! whitespace are emptied.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Recognizes a `Document-method: <identifier>` directive, including
/// operator and setter method names.
static DOC_METHOD_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Document-method:\s+[\w:.#=!?|^&<>~+\-/*%@`\[\]]+").unwrap());

/// The opening delimiter run, `/*` or longer.
static OPENING_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*+").unwrap());

/// The closing delimiter run, `*/` or longer.
static CLOSING_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*+/").unwrap());

/// A leading `*` on a line, together with the whitespace before it.
static LEADING_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*\*").unwrap());

/// A line holding nothing but spaces and tabs.
static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]+$").unwrap());

/// Whether the text contains a delimited block at all.
static STAR_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*\*/").unwrap());

/// Blank the `/* ... */` decoration out of a comment block, preserving the
/// column of every content character. Text without a delimited block is
/// returned unchanged.
pub fn strip_stars(text: &str) -> String {
    if !STAR_BLOCK.is_match(text) {
        return text.to_string();
    }

    let text = DOC_METHOD_DIRECTIVE.replace_all(text, "");
    let text = OPENING_RUN.replacen(&text, 1, spaces_for_match);
    let text = CLOSING_RUN.replacen(&text, 1, spaces_for_match);
    let text = LEADING_STAR.replace_all(&text, spaces_for_match);
    BLANK_LINE.replace_all(&text, "").into_owned()
}

fn spaces_for_match(caps: &Captures<'_>) -> String {
    " ".repeat(caps[0].len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_stars_basic_block() {
        assert_eq!(strip_stars("/*\n * Hello\n */\n"), "\n   Hello\n\n");
    }

    #[test]
    fn test_strip_stars_preserves_columns() {
        // Delimiters become spaces of the same length.
        assert_eq!(strip_stars("/** x **/"), "    x    ");
    }

    #[test]
    fn test_strip_stars_removes_doc_method_directive() {
        let text = "/*\n * Document-method: each_line\n * Iterates lines.\n */\n";
        assert_eq!(strip_stars(text), "\n\n   Iterates lines.\n\n");
    }

    #[test]
    fn test_strip_stars_without_block_unchanged() {
        assert_eq!(strip_stars("no delimiters here"), "no delimiters here");
    }

    #[test]
    fn test_strip_stars_only_first_delimiter_runs() {
        // Interior delimiter pairs after the first are left alone.
        assert_eq!(strip_stars("/* a */ b */"), "   a    b */");
    }
}
