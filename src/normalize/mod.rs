//! Comment text normalization
//!
//! This module turns the raw body of a source-code comment into canonical
//! plain text. The pipeline runs four transforms in a fixed order, and the
//! order matters because each transform relies on the output shape of the
//! previous one:
//!
//! 1. strip the comment markers (`strip_markers`, or `strip_stars` for
//!    `/* ... */` blocks)
//! 2. expand tabs to 8-column stops (`expand_tabs`)
//! 3. remove the common left margin (`flush_left`)
//! 4. trim surrounding newlines (`strip_newlines`)
//!
//! Marker stripping replaces markers with spaces instead of deleting them,
//! so a block written as
//!
//! ```text
//! ##
//! # text
//! #
//! #   more text
//! ```
//!
//! keeps the relative indentation of the content when the margin is flushed.
//!
//! Every function here is total: any string input produces a string output,
//! and the empty string is returned unchanged.

mod stars;

pub use stars::strip_stars;

/// Comment block styles understood by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// Lines introduced by `#` markers.
    Hash,
    /// A `/* ... */` block with optional leading stars per line.
    Star,
}

/// Normalize a hash-marked comment body into canonical plain text.
pub fn normalize(text: &str) -> String {
    normalize_with_style(text, CommentStyle::Hash)
}

/// Normalize a comment body, selecting the marker-stripping first stage by
/// comment style. The remaining stages are identical for every style.
pub fn normalize_with_style(text: &str, style: CommentStyle) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = match style {
        CommentStyle::Hash => strip_markers(text),
        CommentStyle::Star => strip_stars(text),
    };
    let text = expand_tabs(&text);
    let text = flush_left(&text);
    strip_newlines(&text)
}

/// Replace the leading `#` marker run on each line with an equal number of
/// spaces, then blank out lines that are left holding only whitespace.
///
/// If any line opens with something other than a marker, the block is not a
/// uniformly marked comment and the text is returned unchanged. Whitespace
/// before a marker run is kept, so every character after the run stays in
/// its original column.
pub fn strip_markers(text: &str) -> String {
    let has_unmarked_line = text.split('\n').any(|line| {
        let content = line.trim_start();
        !content.is_empty() && !content.starts_with('#')
    });
    if has_unmarked_line {
        return text.to_string();
    }

    let lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            let indent_len = line.len() - line.trim_start().len();
            let content = &line[indent_len..];
            let markers = content.chars().take_while(|&c| c == '#').count();
            if markers == 0 {
                return line.to_string();
            }
            let mut stripped = String::with_capacity(line.len());
            stripped.push_str(&line[..indent_len]);
            stripped.extend(std::iter::repeat(' ').take(markers));
            stripped.push_str(&content[markers..]);
            stripped
        })
        .map(blank_if_whitespace)
        .collect();

    lines.join("\n")
}

/// Replace each tab with enough spaces to reach the next multiple-of-8
/// column. Columns are counted in characters and reset at every line start,
/// so a tab after a partial run only pads to the next stop: one space
/// followed by a tab consumes seven spaces, not eight.
pub fn expand_tabs(text: &str) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }

    let mut expanded = String::with_capacity(text.len());
    let mut column = 0usize;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let pad = 8 - column % 8;
                expanded.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' => {
                expanded.push('\n');
                column = 0;
            }
            _ => {
                expanded.push(ch);
                column += 1;
            }
        }
    }
    expanded
}

/// Strip the common left margin: the minimum first-content column over all
/// non-blank lines is removed from every line. Blank lines contribute no
/// constraint and are stripped as far as they reach.
pub fn flush_left(text: &str) -> String {
    let mut margin: Option<usize> = None;
    for line in text.split('\n') {
        if let Some(column) = line.chars().position(|c| !c.is_whitespace()) {
            margin = Some(margin.map_or(column, |m| m.min(column)));
        }
    }
    let margin = match margin {
        Some(m) if m > 0 => m,
        _ => return text.to_string(),
    };

    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| {
            let leading = line.bytes().take_while(|&b| b == b' ').count();
            &line[leading.min(margin)..]
        })
        .collect();
    lines.join("\n")
}

/// Trim leading and trailing newline characters from the whole text,
/// preserving interior blank lines. A result holding only whitespace
/// collapses to a single space rather than the empty string; callers depend
/// on all-blank comments staying distinguishable from absent ones.
pub fn strip_newlines(text: &str) -> String {
    let stripped = text.trim_matches('\n');
    if stripped.chars().all(char::is_whitespace) {
        return " ".to_string();
    }
    stripped.to_string()
}

fn blank_if_whitespace(line: String) -> String {
    if !line.is_empty() && line.chars().all(char::is_whitespace) {
        String::new()
    } else {
        line
    }
}
