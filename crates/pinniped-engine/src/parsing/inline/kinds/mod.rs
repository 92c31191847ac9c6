//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: `` ` `` pairs, a raw zone that suppresses other parsing
//! - **`Link`**: `[text](url)`
//! - **`Emphasis`**: `**bold**` and `*italic*`
//!
//! The parser and the serializer use these constants; neither hardcodes a
//! delimiter.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
