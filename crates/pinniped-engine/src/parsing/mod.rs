pub mod blocks;
pub mod inline;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::models::Document;
use blocks::{BlockSegmenter, MarkdownLineClassifier, RawBlock, build_block};
use rope::lines_with_spans;

/// Runs line classification and segmentation over the whole rope.
pub fn segment(rope: &Rope) -> Vec<RawBlock> {
    let classifier = MarkdownLineClassifier;
    let mut segmenter = BlockSegmenter::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        segmenter.push(&lc);
    }

    segmenter.finish()
}

/// Builds every raw block and assembles them in source order.
pub fn parse_document(rope: &Rope) -> Document {
    let raw = segment(rope);
    Document::new(raw.iter().map(|b| build_block(rope, b)).collect())
}
