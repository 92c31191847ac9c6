//! # Table Addressing
//!
//! Cursor movement and cell lookup over a parsed table's logical grid. The
//! header separator row is not part of that grid.
//!
//! Column bounds are per row: a position is in range when its column is
//! below the destination row's own cell count. Moving vertically onto a
//! shorter row is therefore rejected rather than clamped.

use crate::{
    error::{EngineError, InvalidPosition},
    models::{CellPosition, Direction, Document, Table},
};

/// Resolves `block_index` to a table.
pub fn table_at(doc: &Document, block_index: usize) -> Result<&Table, InvalidPosition> {
    let block = doc
        .blocks
        .get(block_index)
        .ok_or(InvalidPosition::BlockOutOfRange {
            index: block_index,
            len: doc.blocks.len(),
        })?;
    block
        .as_table()
        .ok_or(InvalidPosition::NotATable { index: block_index })
}

/// Moves one step from `(row, col)`.
///
/// An unresolvable block is an error. A step off the grid is not: it
/// returns the input position with `valid == false`.
pub fn navigate(
    doc: &Document,
    block_index: usize,
    row: usize,
    col: usize,
    direction: Direction,
) -> Result<CellPosition, EngineError> {
    let table = table_at(doc, block_index)?;

    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => row.checked_add(1).map(|r| (r, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => col.checked_add(1).map(|c| (row, c)),
    };

    let position = match target {
        Some((r, c)) if in_bounds(table, r, c) => CellPosition {
            row: r,
            col: c,
            valid: true,
        },
        _ => CellPosition {
            row,
            col,
            valid: false,
        },
    };
    log::trace!("navigate block {block_index} ({row}, {col}) {direction:?} -> {position:?}");
    Ok(position)
}

/// Cell text at a logical position.
pub fn get_cell(
    doc: &Document,
    block_index: usize,
    row: usize,
    col: usize,
) -> Result<&str, EngineError> {
    let table = table_at(doc, block_index)?;
    table
        .cell(row, col)
        .ok_or(InvalidPosition::CellOutOfRange { row, col }.into())
}

fn in_bounds(table: &Table, row: usize, col: usize) -> bool {
    row < table.logical_row_count() && table.logical_row(row).is_some_and(|r| col < r.len())
}
