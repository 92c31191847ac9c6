use std::collections::HashSet;

use crate::models::InlineElement;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link},
};

/// Nesting limit for emphasis; deeper openers are left as literal text.
const MAX_DEPTH: usize = 128;

/// Parses a run of text into inline elements.
///
/// Precedence at each position: code span, link, then emphasis (`**` is
/// always tried as bold before `*` as italic). Unclosed delimiters stay in
/// the output as literal text, so this never fails.
pub fn parse_inline(s: &str) -> Vec<InlineElement> {
    let mut parser = InlineParser {
        failed: HashSet::new(),
    };
    let mut cur = Cursor::new(s);
    parser.parse_seq(&mut cur, None, 0).unwrap_or_default()
}

struct InlineParser {
    /// Openers already known not to close, keyed by byte position.
    failed: HashSet<(usize, Emphasis)>,
}

impl InlineParser {
    /// Parses elements until `open`'s closer or end of input.
    ///
    /// Returns `None` when `open` is set and the input ends before its closer.
    /// On success the cursor sits just after the closer.
    fn parse_seq(
        &mut self,
        cur: &mut Cursor<'_>,
        open: Option<Emphasis>,
        depth: usize,
    ) -> Option<Vec<InlineElement>> {
        let mut out = vec![];
        let mut text_start = cur.pos();

        while !cur.eof() {
            let at = cur.pos();

            if let Some(node) = try_parse_code_span(cur).or_else(|| try_parse_link(cur)) {
                flush_text(&mut out, cur.s, text_start, at);
                out.push(node);
                text_start = cur.pos();
                continue;
            }

            if cur.peek() != Some(Emphasis::STAR) {
                cur.bump();
                continue;
            }

            let double = cur.starts_with(Emphasis::Bold.delimiter().as_bytes());
            let closes = match open {
                Some(Emphasis::Bold) => double,
                Some(Emphasis::Italic) => {
                    // `**` inside italic: a nested bold wins if it can close
                    if double {
                        if let Some(node) = self.try_parse_emphasis(cur, Emphasis::Bold, depth) {
                            flush_text(&mut out, cur.s, text_start, at);
                            out.push(node);
                            text_start = cur.pos();
                            continue;
                        }
                    }
                    true
                }
                None => false,
            };

            if let Some(kind) = open.filter(|_| closes) {
                flush_text(&mut out, cur.s, text_start, at);
                cur.bump_n(kind.delimiter().len());
                return Some(out);
            }

            let kind = if double {
                Emphasis::Bold
            } else {
                Emphasis::Italic
            };
            if let Some(node) = self.try_parse_emphasis(cur, kind, depth) {
                flush_text(&mut out, cur.s, text_start, at);
                out.push(node);
                text_start = cur.pos();
            } else {
                // unmatched delimiter is literal
                cur.bump_n(kind.delimiter().len());
            }
        }

        if open.is_some() {
            return None;
        }
        flush_text(&mut out, cur.s, text_start, cur.pos());
        Some(out)
    }

    /// Attempts `kind` at the current position. On failure the cursor is
    /// restored and the position is remembered as a dead opener.
    fn try_parse_emphasis(
        &mut self,
        cur: &mut Cursor<'_>,
        kind: Emphasis,
        depth: usize,
    ) -> Option<InlineElement> {
        let start = cur.pos();
        if depth >= MAX_DEPTH || self.failed.contains(&(start, kind)) {
            return None;
        }

        let saved = cur.clone();
        cur.bump_n(kind.delimiter().len());
        match self.parse_seq(cur, Some(kind), depth + 1) {
            Some(children) if !children.is_empty() => Some(kind.wrap(children)),
            _ => {
                self.failed.insert((start, kind));
                *cur = saved;
                None
            }
        }
    }
}

fn flush_text(out: &mut Vec<InlineElement>, s: &str, start: usize, end: usize) {
    if end > start {
        out.push(InlineElement::Text(s[start..end].to_string()));
    }
}

/// Attempts a code span at the current position.
///
/// Returns `None` if not at a backtick or if the span isn't closed.
/// On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineElement> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();
    if !cur.seek(CodeSpan::TICK) {
        *cur = saved;
        return None;
    }
    let code = cur.slice_from(inner_start).to_string();
    cur.bump(); // closing `

    Some(InlineElement::Code(code))
}

/// Attempts a `[text](url)` link at the current position.
///
/// The text runs to the first `]`, which must be followed directly by `(`;
/// the url runs to the first `)`. On failure, cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineElement> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let parsed = (|| {
        cur.bump(); // [
        let text_start = cur.pos();
        if !cur.seek(Link::TEXT_CLOSE) {
            return None;
        }
        let text = cur.slice_from(text_start).to_string();
        cur.bump(); // ]
        if cur.bump() != Some(Link::URL_OPEN) {
            return None;
        }
        let url_start = cur.pos();
        if !cur.seek(Link::URL_CLOSE) {
            return None;
        }
        let url = cur.slice_from(url_start).to_string();
        cur.bump(); // )
        Some(InlineElement::Link { text, url })
    })();

    if parsed.is_none() {
        *cur = saved;
    }
    parsed
}
