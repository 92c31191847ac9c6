use xi_rope::Rope;

use crate::parsing::blocks::RawBlock;

/// Validates segmenter output invariants.
///
/// Asserts that:
/// - All block spans are within rope bounds
/// - Every content line sits inside its raw line, after its prefix
/// - Content spans of non-fence blocks are contained within the block span
/// - Blocks are in source order and do not overlap
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, blocks: &[RawBlock]) {
    let n = rope.len();
    let mut prev_end = 0;
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        assert!(
            b.span.start >= prev_end,
            "block {:?} overlaps previous block ending at {}",
            b.span,
            prev_end
        );
        prev_end = b.span.end;

        for line in &b.lines {
            assert!(
                line.prefix.end <= line.content.start,
                "prefix {:?} runs into content {:?}",
                line.prefix,
                line.content
            );
            assert!(
                line.raw_line.contains(line.prefix) && line.raw_line.contains(line.content),
                "content line not contained in raw line: {line:?}"
            );
            assert!(
                b.span.contains(line.raw_line),
                "line {:?} outside block span {:?}",
                line.raw_line,
                b.span
            );
        }
    }
}
