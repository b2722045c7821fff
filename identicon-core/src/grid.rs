//! Grid and Filter Stages
//!
//! Rows are built from three digest bytes and mirrored around the middle
//! column, which is what makes every identicon left-right symmetric.

use serde::{Deserialize, Serialize};

use crate::digest::{Digest, DIGEST_LEN};
use crate::layout::{GRID_COLUMNS, GRID_ROWS};

/// Digest bytes consumed per row.
pub const CHUNK_LEN: usize = 3;

/// Cells in the unfiltered grid.
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

const _: () = assert!(DIGEST_LEN == CHUNK_LEN * GRID_ROWS);

/// One potential square: the digest byte behind it and its flat position
/// in the 5x5 lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: u8,
    pub index: usize,
}

impl Cell {
    pub fn is_painted(&self) -> bool {
        self.value % 2 == 0
    }
}

impl From<(u8, usize)> for Cell {
    fn from((value, index): (u8, usize)) -> Self {
        Self { value, index }
    }
}

/// `[a, b, c]` -> `[a, b, c, b, a]`
pub fn mirror_row(chunk: [u8; CHUNK_LEN]) -> [u8; GRID_COLUMNS] {
    let [a, b, c] = chunk;
    [a, b, c, b, a]
}

/// Expand the digest into 25 cells, indices `0..25` in order.
pub fn build_grid(digest: &Digest) -> [Cell; GRID_CELLS] {
    let mut cells = [Cell { value: 0, index: 0 }; GRID_CELLS];
    let values = digest
        .as_bytes()
        .chunks_exact(CHUNK_LEN)
        .flat_map(|chunk| mirror_row([chunk[0], chunk[1], chunk[2]]));

    for (index, (slot, value)) in cells.iter_mut().zip(values).enumerate() {
        *slot = Cell { value, index };
    }
    cells
}

/// Keep even-valued cells. Indices are carried over, not renumbered.
pub fn filter_even(cells: &[Cell]) -> Vec<Cell> {
    cells.iter().copied().filter(Cell::is_painted).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_row() {
        assert_eq!(mirror_row([1, 2, 3]), [1, 2, 3, 2, 1]);
    }

    #[test]
    fn test_grid_indices_in_order() {
        let grid = build_grid(&Digest::of("grid"));
        assert_eq!(grid.len(), 25);
        for (i, cell) in grid.iter().enumerate() {
            assert_eq!(cell.index, i);
        }
    }

    #[test]
    fn test_grid_rows_are_mirrored() {
        for seed in ["", "a", "test", "identicon", "ünïcødé"] {
            let grid = build_grid(&Digest::of(seed));
            for row in grid.chunks(GRID_COLUMNS) {
                assert_eq!(row[0].value, row[4].value, "seed {seed:?}");
                assert_eq!(row[1].value, row[3].value, "seed {seed:?}");
            }
        }
    }

    #[test]
    fn test_grid_for_known_seed() {
        let grid = build_grid(&Digest::of("test"));
        let values: Vec<u8> = grid.iter().map(|c| c.value).collect();
        assert_eq!(
            values,
            vec![
                9, 143, 107, 143, 9, //
                205, 70, 33, 70, 205, //
                211, 115, 202, 115, 211, //
                222, 78, 131, 78, 222, //
                38, 39, 180, 39, 38,
            ]
        );
    }

    #[test]
    fn test_filter_keeps_even_and_preserves_indices() {
        let cells: Vec<Cell> = [(3, 0), (4, 1), (7, 2), (0, 3), (10, 4)]
            .into_iter()
            .map(Cell::from)
            .collect();
        let kept = filter_even(&cells);
        assert_eq!(
            kept,
            vec![Cell::from((4, 1)), Cell::from((0, 3)), Cell::from((10, 4))]
        );
    }

    #[test]
    fn test_filter_can_drop_everything() {
        let cells: Vec<Cell> = (0..5).map(|i| Cell::from((1, i))).collect();
        assert!(filter_even(&cells).is_empty());
    }
}
