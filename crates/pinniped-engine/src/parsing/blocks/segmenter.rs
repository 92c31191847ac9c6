use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    content::ContentLine,
    kinds::{BlockQuote, CodeFence, FenceKind, FenceSig, ListMarker, TableRow},
    types::{RawBlock, RawBlockKind},
};

#[derive(Debug, Clone)]
enum LeafState {
    None,
    /// Lines between blank lines, classified as a whole when flushed.
    Chunk { lines: Vec<LineClass> },
    Fence {
        open: FenceSig,
        language: Option<String>,
        start: Span,
        body: Vec<Span>,
        last_line_end: usize,
    },
}

/// Groups classified lines into raw block candidates.
///
/// Headings and fence openers act on a single line and end any pending
/// chunk. Every other rule looks at a whole blank-line-delimited chunk, with
/// precedence quote, bullet list, ordered list, table, paragraph.
pub struct BlockSegmenter {
    leaf: LeafState,
    out: Vec<RawBlock>,
}

impl BlockSegmenter {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush_chunk();
            return;
        }

        if let Some(sig) = c.fence_sig {
            self.flush_chunk();
            self.open_fence(c, sig);
            return;
        }

        if let Some(heading) = c.heading {
            self.flush_chunk();
            let ts = c.trimmed_span();
            let rest = &c.trimmed()[heading.text_offset..];
            let lead = rest.len() - rest.trim_start().len();
            let content_start = ts.start + heading.text_offset + lead;
            self.emit(RawBlock {
                kind: RawBlockKind::Heading {
                    level: heading.level,
                },
                span: c.content,
                lines: vec![ContentLine {
                    raw_line: c.content,
                    prefix: Span::new(c.content.start, content_start),
                    content: Span::new(content_start, ts.end.max(content_start)),
                }],
            });
            return;
        }

        match &mut self.leaf {
            LeafState::Chunk { lines } => lines.push(c.clone()),
            _ => {
                self.leaf = LeafState::Chunk {
                    lines: vec![c.clone()],
                }
            }
        }
    }

    pub fn finish(mut self) -> Vec<RawBlock> {
        // EOF flush
        self.flush_chunk();
        self.flush_fence();
        self.out
    }

    fn emit(&mut self, block: RawBlock) {
        log::trace!("raw block {:?} at {:?}", block.kind, block.span);
        self.out.push(block);
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn open_fence(&mut self, c: &LineClass, sig: FenceSig) {
        self.leaf = LeafState::Fence {
            open: sig,
            language: CodeFence::language(&c.text, sig),
            start: c.content,
            body: vec![],
            last_line_end: c.content.end,
        };
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence {
            open,
            body,
            last_line_end,
            ..
        } = &mut self.leaf
        else {
            return;
        };

        *last_line_end = c.content.end;
        if !CodeFence::closes(*open, c.fence_sig) {
            body.push(c.content);
            return;
        }

        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            open,
            language,
            start,
            body,
            last_line_end,
        } = prev
        {
            self.emit(fence_block(open.kind, language, start, body, last_line_end, true));
        }
    }

    fn flush_chunk(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        match prev {
            LeafState::Chunk { lines } => {
                if let Some(block) = classify_chunk(&lines) {
                    self.emit(block);
                }
            }
            other => self.leaf = other, // put back non-chunk leaf (e.g. fence)
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            open,
            language,
            start,
            body,
            last_line_end,
        } = prev
        {
            // Unterminated fence: emit as fence block anyway
            self.emit(fence_block(
                open.kind,
                language,
                start,
                body,
                last_line_end,
                false,
            ));
        }
    }
}

impl Default for BlockSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn fence_block(
    kind: FenceKind,
    language: Option<String>,
    start: Span,
    body: Vec<Span>,
    last_line_end: usize,
    closed: bool,
) -> RawBlock {
    RawBlock {
        kind: RawBlockKind::FencedCode {
            kind,
            language,
            closed,
        },
        span: Span::new(start.start, last_line_end),
        lines: body.into_iter().map(ContentLine::verbatim).collect(),
    }
}

/// Applies the chunk-level rules to a run of non-blank lines.
fn classify_chunk(lines: &[LineClass]) -> Option<RawBlock> {
    let first = lines.first()?;
    let last = lines.last()?;
    let span = first.content.cover(last.content);

    let (kind, content) = if let Some(content) = marked_lines(lines, BlockQuote::strip_marker) {
        (RawBlockKind::BlockQuote, content)
    } else if let Some(content) = marked_lines(lines, ListMarker::bullet) {
        (RawBlockKind::UnorderedList, content)
    } else if let Some(content) = marked_lines(lines, ListMarker::ordered) {
        (RawBlockKind::OrderedList, content)
    } else if lines.iter().all(|l| TableRow::is_row(l.trimmed())) {
        (RawBlockKind::Table, unmarked_lines(lines))
    } else {
        (RawBlockKind::Paragraph, unmarked_lines(lines))
    };

    Some(RawBlock {
        kind,
        span,
        lines: content,
    })
}

/// Strips a per-line marker, or `None` if any line lacks it.
fn marked_lines(
    lines: &[LineClass],
    marker: impl Fn(&str) -> Option<usize>,
) -> Option<Vec<ContentLine>> {
    lines
        .iter()
        .map(|l| {
            let offset = marker(l.trimmed())?;
            let ts = l.trimmed_span();
            let rest = &l.trimmed()[offset..];
            let lead = rest.len() - rest.trim_start().len();
            let content_start = ts.start + offset + lead;
            Some(ContentLine {
                raw_line: l.content,
                prefix: Span::new(l.content.start, content_start),
                content: Span::new(content_start, ts.end.max(content_start)),
            })
        })
        .collect()
}

fn unmarked_lines(lines: &[LineClass]) -> Vec<ContentLine> {
    lines
        .iter()
        .map(|l| {
            let ts = l.trimmed_span();
            ContentLine {
                raw_line: l.content,
                prefix: Span::new(l.content.start, ts.start),
                content: ts,
            }
        })
        .collect()
}
