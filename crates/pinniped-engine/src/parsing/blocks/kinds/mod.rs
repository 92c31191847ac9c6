//! Block kinds own their syntax: markers, delimiters and per-line matchers
//! live here, never inline in the segmenter.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use heading::{Heading, HeadingSig};
pub use list::ListMarker;
pub use paragraph::Paragraph;
pub use table::TableRow;
