use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A grid of cell strings.
///
/// When `has_header` is set, physical row 0 is the header and physical row 1
/// is normally the `|---|` separator. The separator is kept for formatting
/// but is not part of the logical row space used for addressing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
    pub has_header: bool,
}

impl Table {
    /// Builds a table, detecting a header from the second row.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        let has_header = rows.len() >= 2 && is_separator_row(&rows[1]);
        Self { rows, has_header }
    }

    pub fn with_header(rows: Vec<Vec<String>>, has_header: bool) -> Self {
        Self { rows, has_header }
    }

    /// Whether physical row 1 is stored and is a separator marker row.
    pub fn has_separator_row(&self) -> bool {
        self.has_header && self.rows.get(1).is_some_and(|row| is_separator_row(row))
    }

    /// Rows as exposed to navigation and cell lookups.
    pub fn logical_rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        let skip_separator = self.has_separator_row();
        self.rows
            .iter()
            .enumerate()
            .filter(move |(i, _)| !(skip_separator && *i == 1))
            .map(|(_, row)| row.as_slice())
    }

    pub fn logical_row_count(&self) -> usize {
        if self.has_separator_row() {
            self.rows.len() - 1
        } else {
            self.rows.len()
        }
    }

    pub fn logical_row(&self, row: usize) -> Option<&[String]> {
        let physical = if self.has_separator_row() && row >= 1 {
            row + 1
        } else {
            row
        };
        self.rows.get(physical).map(Vec::as_slice)
    }

    /// Cell text at a logical position. Cells past the end of a short row
    /// are missing, not empty.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.logical_row(row)?.get(col).map(String::as_str)
    }
}

fn separator_cell_regex() -> &'static Regex {
    static SEPARATOR_CELL: OnceLock<Regex> = OnceLock::new();
    SEPARATOR_CELL.get_or_init(|| Regex::new(r"^:?-+:?$").expect("Invalid separator regex"))
}

/// True when every cell looks like `---`, `:---`, `---:` or `:---:`.
pub fn is_separator_row(row: &[String]) -> bool {
    !row.is_empty()
        && row
            .iter()
            .all(|cell| separator_cell_regex().is_match(cell.trim()))
}

/// Logical coordinate inside a table plus whether it is addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
    pub valid: bool,
}

/// Cursor movement direction for table navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn detects_header_from_separator_row() {
        let table = Table::new(grid(&[&["A", "B"], &[":---", "---:"], &["1", "2"]]));
        assert!(table.has_header);
        assert_eq!(table.logical_row_count(), 2);
    }

    #[test]
    fn no_header_without_separator() {
        let table = Table::new(grid(&[&["a", "b"], &["c", "d"]]));
        assert!(!table.has_header);
        assert_eq!(table.logical_row_count(), 2);
    }

    #[test]
    fn separator_requires_dashes() {
        assert!(!is_separator_row(&["::".to_string()]));
        assert!(!is_separator_row(&["-a-".to_string()]));
        assert!(!is_separator_row(&[]));
        assert!(is_separator_row(&[":-:".to_string(), "-".to_string()]));
    }

    #[test]
    fn logical_rows_skip_separator() {
        let table = Table::new(grid(&[&["h"], &["---"], &["x"], &["y"]]));
        let rows: Vec<_> = table.logical_rows().map(|r| r[0].as_str()).collect();
        assert_eq!(rows, vec!["h", "x", "y"]);
        assert_eq!(table.cell(1, 0), Some("x"));
        assert_eq!(table.cell(2, 0), Some("y"));
        assert_eq!(table.cell(3, 0), None);
    }

    #[test]
    fn declared_header_without_separator_skips_nothing() {
        let table = Table::with_header(grid(&[&["h"], &["x"]]), true);
        assert_eq!(table.logical_row_count(), 2);
        assert_eq!(table.cell(1, 0), Some("x"));
    }

    #[test]
    fn ragged_cells_are_missing() {
        let table = Table::new(grid(&[&["a", "b", "c"], &["d"]]));
        assert_eq!(table.cell(1, 0), Some("d"));
        assert_eq!(table.cell(1, 1), None);
    }
}
