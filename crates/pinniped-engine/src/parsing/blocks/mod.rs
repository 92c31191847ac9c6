//! # Block Parsing
//!
//! Two-phase block parsing over a rope.
//!
//! 1. **Line classification** (`classify`): each line gets a `LineClass` with
//!    local facts only (blank, fence signature, heading signature).
//! 2. **Segmentation** (`segmenter`): a `BlockSegmenter` groups lines into
//!    `RawBlock` candidates. Headings and fences are decided per line; quotes,
//!    lists, tables and paragraphs per blank-line-delimited chunk.
//!
//! `build` then turns each candidate into a typed `Block`, running the inline
//! parser over its content lines.
//!
//! ## Key Invariants
//!
//! - Fenced code is a raw zone: no block or inline parsing inside
//! - Every raw block stores byte spans into the rope
//! - Segmentation never fails; anything unrecognised is a paragraph

pub mod build;
pub mod classify;
pub mod content;
pub mod kinds;
pub mod segmenter;
pub mod types;

pub use build::build_block;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use content::ContentLine;
pub use segmenter::BlockSegmenter;
pub use types::{RawBlock, RawBlockKind};
