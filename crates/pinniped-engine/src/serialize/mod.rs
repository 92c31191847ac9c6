//! # Markdown Serializer
//!
//! Renders a [`Document`] as canonical markdown: one blank line between
//! blocks, no trailing newline. Output parsed again yields the same
//! document for anything the parser produced.

mod inline;

pub use inline::render_inline;

use crate::models::{Block, Document, InlineText, Table, is_separator_row};
use crate::parsing::blocks::kinds::{BlockQuote, CodeFence, Heading, ListMarker, TableRow};

/// Separator between rendered blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

pub fn serialize(doc: &Document) -> String {
    let out = doc
        .blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR);
    log::debug!(
        "serialized {} blocks into {} bytes",
        doc.blocks.len(),
        out.len()
    );
    out
}

pub fn render_block(block: &Block) -> String {
    match block {
        Block::Header { level, text } => {
            let text = render_inline(&text.elements);
            let marker = Heading::marker(*level);
            if text.is_empty() {
                marker
            } else {
                format!("{marker} {text}")
            }
        }
        Block::Paragraph(text) => render_inline(&text.elements),
        Block::UnorderedList(items) => render_list(items, |_| ListMarker::BULLET.to_string()),
        Block::OrderedList(items) => render_list(items, |i| format!("{}.", i + 1)),
        Block::CodeBlock { language, code } => {
            let fence = CodeFence::for_block(code, language.as_deref());
            let language = language.as_deref().unwrap_or_default();
            if code.is_empty() {
                format!("{fence}{language}\n{fence}")
            } else {
                format!("{fence}{language}\n{code}\n{fence}")
            }
        }
        Block::Blockquote(text) => render_inline(&text.elements)
            .split('\n')
            .map(|line| prefixed(BlockQuote::PREFIX.to_string(), line))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::Table(table) => render_table(table),
    }
}

fn render_list(items: &[InlineText], marker: impl Fn(usize) -> String) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| prefixed(marker(i), &render_inline(&item.elements)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `marker text`, or the bare marker for an empty line.
fn prefixed(marker: String, text: &str) -> String {
    if text.is_empty() {
        marker
    } else {
        format!("{marker} {text}")
    }
}

/// Pipe rows; a declared header without a stored separator row gets a
/// generated `---` row sized to the header.
fn render_table(table: &Table) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    for (i, row) in table.rows.iter().enumerate() {
        lines.push(TableRow::render(row));
        if i == 0 && table.has_header && !table.rows.get(1).is_some_and(|r| is_separator_row(r)) {
            let separator = vec!["---".to_string(); row.len().max(1)];
            lines.push(TableRow::render(&separator));
        }
    }
    lines.join("\n")
}
