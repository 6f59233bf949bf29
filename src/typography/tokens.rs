//! Token recognition for the typographic scanner
//!
//! At every scan position the matchers below are tried in a fixed priority
//! order and the first hit wins; the scanner never backtracks past a
//! committed match. Longer patterns sit above their own prefixes (three
//! dots above one, three hyphens above two, tick pairs above a single
//! apostrophe), otherwise the short form would shadow the long one.

/// One recognized piece of input, paired with how the scanner must emit it.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Token<'a> {
    /// A complete `<tt>...</tt>` or `<code>...</code>` span, tags included.
    VerbatimSpan { raw: &'a str },
    /// A verbatim-span opener with no matching closer anywhere after it.
    DanglingOpener { raw: &'a str },
    /// Any other complete HTML tag.
    Tag { raw: &'a str },
    /// A backslash-escaped character, emitted without special handling.
    Escaped { ch: char },
    /// Three dots, with an optional fourth emitted literally before the glyph.
    Ellipsis { trailing_dot: bool },
    Copyright,
    Registered,
    EmDash,
    EnDash,
    /// `"` or `&quot;`; open/close resolved against scan state.
    DoubleQuote,
    /// A backtick pair, always an opening mark.
    OpenDoubleMark,
    /// A tick pair, always a closing mark.
    CloseDoubleMark,
    /// A single apostrophe, resolved against scan state.
    Apostrophe,
    /// A run of plain characters up to the next potentially significant one.
    Literal { raw: &'a str, ends_word: bool },
    /// A significant character no pattern claimed; the rest of the input is
    /// copied through verbatim and the scan ends.
    Stalled { raw: &'a str },
}

type Matcher = for<'a> fn(&'a str) -> Option<(Token<'a>, usize)>;

/// Recognizers in priority order. The default literal rule is not listed;
/// it runs when everything else has declined.
const MATCHERS: [Matcher; 9] = [
    match_verbatim_span,
    match_tag,
    match_escape,
    match_ellipsis,
    match_paren_glyph,
    match_dashes,
    match_double_quote,
    match_quote_marks,
    match_apostrophe,
];

/// Classify the input at the current position. Always succeeds and always
/// consumes at least one byte.
pub(super) fn next_token(rest: &str) -> (Token<'_>, usize) {
    for matcher in MATCHERS {
        if let Some(hit) = matcher(rest) {
            return hit;
        }
    }
    match_literal(rest)
}

/// A character that could begin one of the prioritized patterns. The
/// literal rule stops in front of these.
pub(super) fn is_boundary(c: char) -> bool {
    matches!(c, '<' | '\\' | '.' | '(' | '-' | '&' | '"' | '\'' | '`')
}

fn match_verbatim_span(rest: &str) -> Option<(Token<'_>, usize)> {
    let (opener, closer) = if rest.starts_with("<tt>") {
        ("<tt>", "</tt>")
    } else if rest.starts_with("<code>") {
        ("<code>", "</code>")
    } else {
        return None;
    };

    match rest[opener.len()..].find(closer) {
        Some(at) => {
            let end = opener.len() + at + closer.len();
            Some((Token::VerbatimSpan { raw: &rest[..end] }, end))
        }
        None => Some((
            Token::DanglingOpener {
                raw: &rest[..opener.len()],
            },
            opener.len(),
        )),
    }
}

fn match_tag(rest: &str) -> Option<(Token<'_>, usize)> {
    if !rest.starts_with('<') {
        return None;
    }
    let close = rest.find('>')?;
    if close == 1 {
        // "<>" has no tag name; let the stall rule copy it through.
        return None;
    }
    Some((Token::Tag { raw: &rest[..=close] }, close + 1))
}

fn match_escape(rest: &str) -> Option<(Token<'_>, usize)> {
    let mut chars = rest.chars();
    if chars.next()? != '\\' {
        return None;
    }
    let ch = chars.next()?;
    Some((Token::Escaped { ch }, 1 + ch.len_utf8()))
}

fn match_ellipsis(rest: &str) -> Option<(Token<'_>, usize)> {
    if !rest.starts_with("...") {
        return None;
    }
    if rest[3..].starts_with('.') {
        Some((Token::Ellipsis { trailing_dot: true }, 4))
    } else {
        Some((Token::Ellipsis { trailing_dot: false }, 3))
    }
}

fn match_paren_glyph(rest: &str) -> Option<(Token<'_>, usize)> {
    if rest.starts_with("(c)") {
        Some((Token::Copyright, 3))
    } else if rest.starts_with("(r)") {
        Some((Token::Registered, 3))
    } else {
        None
    }
}

fn match_dashes(rest: &str) -> Option<(Token<'_>, usize)> {
    if rest.starts_with("---") {
        Some((Token::EmDash, 3))
    } else if rest.starts_with("--") {
        Some((Token::EnDash, 2))
    } else {
        None
    }
}

fn match_double_quote(rest: &str) -> Option<(Token<'_>, usize)> {
    if rest.starts_with('"') {
        Some((Token::DoubleQuote, 1))
    } else if rest.starts_with("&quot;") {
        Some((Token::DoubleQuote, 6))
    } else {
        None
    }
}

fn match_quote_marks(rest: &str) -> Option<(Token<'_>, usize)> {
    if rest.starts_with("``") {
        Some((Token::OpenDoubleMark, 2))
    } else if rest.starts_with("''") {
        Some((Token::CloseDoubleMark, 2))
    } else {
        None
    }
}

fn match_apostrophe(rest: &str) -> Option<(Token<'_>, usize)> {
    if rest.starts_with('\'') {
        Some((Token::Apostrophe, 1))
    } else {
        None
    }
}

fn match_literal(rest: &str) -> (Token<'_>, usize) {
    match rest.find(is_boundary) {
        // The current character is significant but matched no rule; there is
        // nowhere to advance to, so the remainder passes through untouched.
        Some(0) => (Token::Stalled { raw: rest }, rest.len()),
        Some(at) => {
            let raw = &rest[..at];
            let ends_word = raw.chars().last().is_some_and(char::is_alphanumeric);
            (Token::Literal { raw, ends_word }, at)
        }
        None => {
            let ends_word = rest.chars().last().is_some_and(char::is_alphanumeric);
            (Token::Literal { raw: rest, ends_word }, rest.len())
        }
    }
}
