pub mod document;
pub mod inline;
pub mod table;

pub use document::{Block, Document};
pub use inline::{InlineElement, InlineText};
pub use table::{CellPosition, Direction, Table, is_separator_row};
