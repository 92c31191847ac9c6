//! Segmenter and assembler tests.
//!
//! Segmenter output is checked with inline `insta` snapshots (one line per
//! raw block) after running the span invariants.

use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::models::{Block, InlineElement, InlineText, Table};
use crate::parsing::{
    blocks::RawBlockKind,
    parse_document, segment,
    snapshot::{invariants, normalize},
};

fn snap(md: &str) -> String {
    let rope = Rope::from(md);
    let blocks = segment(&rope);
    invariants(&rope, &blocks);
    normalize(&rope, &blocks).to_string()
}

fn parse(md: &str) -> Vec<Block> {
    parse_document(&Rope::from(md)).blocks
}

#[test]
fn segments_every_block_kind() {
    let md = "# Title\n\n> quoted *text*\n> second\n\n- one\n* two\n\n1. first\n2. second\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\nplain\nwrapped line\n";
    insta::assert_snapshot!(snap(md), @r#"
    Heading(1) 0..7 ["Title"]
    BlockQuote 9..33 ["quoted *text*", "second"]
    UnorderedList 35..46 ["one", "two"]
    OrderedList 48..66 ["first", "second"]
    Table 68..97 ["| A | B |", "|---|---|", "| 1 | 2 |"]
    Paragraph 99..117 ["plain", "wrapped line"]
    "#);
}

#[test]
fn fence_body_spans_blank_lines() {
    let md = "```rust\nfn main() {\n\n    let x = 1;\n}\n```\nafter";
    insta::assert_snapshot!(snap(md), @r#"
    FencedCode(Backticks, rust) 0..41 ["fn main() {", "", "    let x = 1;", "}"]
    Paragraph 42..47 ["after"]
    "#);
}

#[test]
fn shorter_or_foreign_fence_does_not_close() {
    let md = "````md\n```\n~~~\n````\nafter";
    insta::assert_snapshot!(snap(md), @r#"
    FencedCode(Backticks, md) 0..19 ["```", "~~~"]
    Paragraph 20..25 ["after"]
    "#);
}

#[test]
fn unterminated_fence_runs_to_end() {
    insta::assert_snapshot!(snap("text\n```\ncode"), @r#"
    Paragraph 0..4 ["text"]
    FencedCode(Backticks, unclosed) 5..13 ["code"]
    "#);
}

#[test]
fn heading_line_splits_chunk() {
    insta::assert_snapshot!(snap("intro\n## Next\nbody"), @r#"
    Paragraph 0..5 ["intro"]
    Heading(2) 6..13 ["Next"]
    Paragraph 14..18 ["body"]
    "#);
}

#[test]
fn crlf_line_endings() {
    insta::assert_snapshot!(snap("a\r\nb\r\n\r\n# H"), @r#"
    Paragraph 0..4 ["a", "b"]
    Heading(1) 8..11 ["H"]
    "#);
}

#[rstest]
#[case::mixed_list_markers("- a\n1. b")]
#[case::partial_quote("> a\nb")]
#[case::partial_table("| a |\nb")]
#[case::seven_hashes("####### x")]
#[case::quote_without_space(">text")]
fn falls_back_to_paragraph(#[case] md: &str) {
    let rope = Rope::from(md);
    let blocks = segment(&rope);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, RawBlockKind::Paragraph);
}

#[test]
fn quote_lines_join_with_newline() {
    assert_eq!(
        parse("> one\n>\n> two"),
        vec![Block::Blockquote(InlineText::plain("one\n\ntwo"))]
    );
}

#[test]
fn paragraph_lines_join_with_space() {
    assert_eq!(
        parse("  one  \ntwo *x*"),
        vec![Block::Paragraph(InlineText::new(vec![
            InlineElement::Text("one two ".into()),
            InlineElement::Italic(vec![InlineElement::Text("x".into())]),
        ]))]
    );
}

#[test]
fn code_block_is_not_inline_parsed() {
    assert_eq!(
        parse("```\n**not bold**\n  indented\n```"),
        vec![Block::CodeBlock {
            language: None,
            code: "**not bold**\n  indented".into(),
        }]
    );
}

#[test]
fn empty_code_block() {
    assert_eq!(
        parse("```sh\n```"),
        vec![Block::CodeBlock {
            language: Some("sh".into()),
            code: String::new(),
        }]
    );
}

#[test]
fn list_items_are_inline_parsed() {
    assert_eq!(
        parse("1. `a`\n2. b\n3."),
        vec![Block::OrderedList(vec![
            InlineText::new(vec![InlineElement::Code("a".into())]),
            InlineText::plain("b"),
            InlineText::default(),
        ])]
    );
}

#[test]
fn table_rows_are_split_and_trimmed() {
    assert_eq!(
        parse("| Name | Age |\n| :--- | ---: |\n| Ann  | 7 |"),
        vec![Block::Table(Table::with_header(
            vec![
                vec!["Name".into(), "Age".into()],
                vec![":---".into(), "---:".into()],
                vec!["Ann".into(), "7".into()],
            ],
            true,
        ))]
    );
}

#[test]
fn heading_text_is_trimmed() {
    assert_eq!(
        parse("###    Spaced   "),
        vec![Block::Header {
            level: 3,
            text: InlineText::plain("Spaced"),
        }]
    );
}

#[test]
fn empty_document() {
    assert!(parse("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse("\n \n\t\n").is_empty());
}
