//! Layout Stage - Cells to Pixel Rectangles
//!
//! The canvas is a fixed 250x250 image split into a 5x5 lattice of 50px
//! squares. Only a cell's index matters here.

use serde::{Deserialize, Serialize};

use crate::grid::Cell;

pub const GRID_COLUMNS: usize = 5;
pub const GRID_ROWS: usize = 5;

/// Edge length of one square, in pixels.
pub const CELL_SIZE: u32 = 50;

/// Edge length of the whole canvas, in pixels.
pub const CANVAS_SIZE: u32 = CELL_SIZE * GRID_COLUMNS as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Axis-aligned rectangle. `bottom_right` is exclusive when painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rect {
    pub fn width(&self) -> u32 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> u32 {
        self.bottom_right.y - self.top_left.y
    }
}

impl From<((u32, u32), (u32, u32))> for Rect {
    fn from(((x1, y1), (x2, y2)): ((u32, u32), (u32, u32))) -> Self {
        Self {
            top_left: Point { x: x1, y: y1 },
            bottom_right: Point { x: x2, y: y2 },
        }
    }
}

pub fn rect_for(cell: &Cell) -> Rect {
    let column = (cell.index % GRID_COLUMNS) as u32;
    let row = (cell.index / GRID_COLUMNS) as u32;
    let horizontal = column * CELL_SIZE;
    let vertical = row * CELL_SIZE;

    Rect {
        top_left: Point { x: horizontal, y: vertical },
        bottom_right: Point {
            x: horizontal + CELL_SIZE,
            y: vertical + CELL_SIZE,
        },
    }
}

/// One rectangle per cell, same order.
pub fn pixel_map(cells: &[Cell]) -> Vec<Rect> {
    cells.iter().map(rect_for).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size() {
        assert_eq!(CANVAS_SIZE, 250);
    }

    #[test]
    fn test_rect_for_corners() {
        assert_eq!(rect_for(&Cell::from((0, 0))), Rect::from(((0, 0), (50, 50))));
        assert_eq!(rect_for(&Cell::from((0, 6))), Rect::from(((50, 50), (100, 100))));
        assert_eq!(
            rect_for(&Cell::from((0, 24))),
            Rect::from(((200, 200), (250, 250)))
        );
    }

    #[test]
    fn test_value_does_not_affect_geometry() {
        assert_eq!(rect_for(&Cell::from((2, 13))), rect_for(&Cell::from((254, 13))));
    }

    #[test]
    fn test_every_cell_in_bounds() {
        let cells: Vec<Cell> = (0..25).map(|i| Cell::from((0, i))).collect();
        for rect in pixel_map(&cells) {
            assert!(rect.bottom_right.x <= CANVAS_SIZE);
            assert!(rect.bottom_right.y <= CANVAS_SIZE);
            assert_eq!(rect.width(), CELL_SIZE);
            assert_eq!(rect.height(), CELL_SIZE);
        }
    }
}
