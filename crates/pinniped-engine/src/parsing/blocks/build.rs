use xi_rope::Rope;

use crate::{
    models::{Block, InlineText, Table},
    parsing::{inline::parse_inline, rope::slice::slice_to_string},
};

use super::{
    content::join_content,
    kinds::{Paragraph, TableRow},
    types::{RawBlock, RawBlockKind},
};

/// Turns a segmented candidate into a typed [`Block`].
pub fn build_block(rope: &Rope, raw: &RawBlock) -> Block {
    match &raw.kind {
        RawBlockKind::Heading { level } => Block::Header {
            level: *level,
            text: inline(&join_content(rope, &raw.lines, "")),
        },
        RawBlockKind::BlockQuote => Block::Blockquote(inline(&join_content(rope, &raw.lines, "\n"))),
        RawBlockKind::UnorderedList => Block::UnorderedList(items(rope, raw)),
        RawBlockKind::OrderedList => Block::OrderedList(items(rope, raw)),
        RawBlockKind::FencedCode { language, .. } => Block::CodeBlock {
            language: language.clone(),
            code: join_content(rope, &raw.lines, "\n"),
        },
        RawBlockKind::Table => {
            let rows = raw
                .lines
                .iter()
                .map(|line| TableRow::cells(&slice_to_string(rope, line.content)))
                .collect();
            Block::Table(Table::new(rows))
        }
        RawBlockKind::Paragraph => {
            let lines: Vec<String> = raw
                .lines
                .iter()
                .map(|line| slice_to_string(rope, line.content))
                .collect();
            Block::Paragraph(inline(&Paragraph::join(lines.iter().map(String::as_str))))
        }
    }
}

fn inline(s: &str) -> InlineText {
    InlineText::new(parse_inline(s))
}

fn items(rope: &Rope, raw: &RawBlock) -> Vec<InlineText> {
    raw.lines
        .iter()
        .map(|line| inline(&slice_to_string(rope, line.content)))
        .collect()
}
