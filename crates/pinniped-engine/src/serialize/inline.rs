use crate::models::InlineElement;
use crate::parsing::inline::kinds::{CodeSpan, Emphasis, Link};

/// Renders inline elements back to markdown. Text is emitted as-is; no
/// delimiter inside a `Text` element is escaped.
pub fn render_inline(elements: &[InlineElement]) -> String {
    let mut out = String::new();
    render_into(elements, &mut out);
    out
}

fn render_into(elements: &[InlineElement], out: &mut String) {
    for element in elements {
        match element {
            InlineElement::Text(text) => out.push_str(text),
            InlineElement::Bold(children) => emphasis(Emphasis::Bold, children, out),
            InlineElement::Italic(children) => emphasis(Emphasis::Italic, children, out),
            InlineElement::Code(code) => CodeSpan::render(code, out),
            InlineElement::Link { text, url } => Link::render(text, url, out),
        }
    }
}

fn emphasis(kind: Emphasis, children: &[InlineElement], out: &mut String) {
    out.push_str(kind.delimiter());
    render_into(children, out);
    out.push_str(kind.delimiter());
}
