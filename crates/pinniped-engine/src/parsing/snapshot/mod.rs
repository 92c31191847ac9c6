//! # Snapshot Testing Support
//!
//! - **`normalize`**: converts raw blocks to a stable `Snap` that renders one
//!   line per block for `insta` inline snapshots
//! - **`invariants`**: checks on segmenter output (spans in bounds, content
//!   contained in the block, blocks ordered and non-overlapping)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
