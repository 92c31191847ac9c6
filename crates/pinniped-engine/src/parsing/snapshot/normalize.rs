use std::fmt;

use serde::Serialize;
use xi_rope::Rope;

use crate::parsing::{
    blocks::{RawBlock, RawBlockKind},
    rope::slice::preview,
};

/// Snapshot of segmenter output for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single raw block.
#[derive(Debug, Serialize)]
pub struct BlockSnap {
    /// Kind label, e.g. `Heading(2)` or `FencedCode(Backticks, rust)`.
    pub kind: String,
    pub span: (usize, usize),
    /// Per-line content previews, markers stripped.
    pub lines: Vec<String>,
}

pub fn normalize(rope: &Rope, blocks: &[RawBlock]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| BlockSnap {
            kind: kind_label(&b.kind),
            span: (b.span.start, b.span.end),
            lines: b
                .lines
                .iter()
                .map(|line| preview(rope, line.content, 60))
                .collect(),
        })
        .collect();

    Snap { blocks }
}

fn kind_label(kind: &RawBlockKind) -> String {
    match kind {
        RawBlockKind::Heading { level } => format!("Heading({level})"),
        RawBlockKind::FencedCode {
            kind,
            language,
            closed,
        } => {
            let language = language
                .as_deref()
                .map(|l| format!(", {l}"))
                .unwrap_or_default();
            let unclosed = if *closed { "" } else { ", unclosed" };
            format!("FencedCode({kind:?}{language}{unclosed})")
        }
        RawBlockKind::BlockQuote => "BlockQuote".to_string(),
        RawBlockKind::UnorderedList => "UnorderedList".to_string(),
        RawBlockKind::OrderedList => "OrderedList".to_string(),
        RawBlockKind::Table => "Table".to_string(),
        RawBlockKind::Paragraph => "Paragraph".to_string(),
    }
}

/// One line per block: `Kind start..end ["line", ...]`.
impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {}..{} {:?}", b.kind, b.span.0, b.span.1, b.lines)?;
        }
        Ok(())
    }
}
