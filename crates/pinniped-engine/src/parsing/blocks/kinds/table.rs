/// Pipe table row syntax.
pub struct TableRow;

impl TableRow {
    pub const DELIMITER: char = '|';

    pub fn is_row(trimmed: &str) -> bool {
        trimmed.contains(Self::DELIMITER)
    }

    /// Splits a trimmed row into trimmed cells, dropping the empty cell that a
    /// single leading or trailing pipe would otherwise produce.
    pub fn cells(trimmed: &str) -> Vec<String> {
        let inner = trimmed.strip_prefix(Self::DELIMITER).unwrap_or(trimmed);
        let inner = inner.strip_suffix(Self::DELIMITER).unwrap_or(inner);
        inner
            .split(Self::DELIMITER)
            .map(|cell| cell.trim().to_string())
            .collect()
    }

    /// Canonical row text: `| a | b |`.
    pub fn render(cells: &[String]) -> String {
        let mut out = String::from("|");
        for cell in cells {
            out.push(' ');
            out.push_str(cell);
            out.push_str(" |");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cells_strip_outer_pipes() {
        assert_eq!(TableRow::cells("|A|B|"), vec!["A", "B"]);
        assert_eq!(TableRow::cells("| Name | Age  |"), vec!["Name", "Age"]);
    }

    #[test]
    fn cells_without_outer_pipes() {
        assert_eq!(TableRow::cells("a | b"), vec!["a", "b"]);
    }

    #[test]
    fn inner_empty_cells_survive() {
        assert_eq!(TableRow::cells("|a||"), vec!["a", ""]);
        assert_eq!(TableRow::cells("||b|"), vec!["", "b"]);
    }

    #[test]
    fn render_pads_cells() {
        let cells = vec!["a".to_string(), String::new()];
        assert_eq!(TableRow::render(&cells), "| a |  |");
        assert_eq!(TableRow::cells(&TableRow::render(&cells)), cells);
    }
}
