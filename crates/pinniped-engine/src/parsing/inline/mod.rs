//! # Inline Parsing
//!
//! Cursor-based inline parsing over the text of a single block (a paragraph,
//! a heading, one list item, a quote).
//!
//! - **`kinds`**: inline types with owned delimiters (CodeSpan, Link, Emphasis)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `*not emphasis*` `` parses as a single code
//! span. Link display text is also taken verbatim.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
