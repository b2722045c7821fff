//! Stage Types
//!
//! Each stage consumes the previous value and returns a new type that
//! embeds it, so a later field can never be read before it exists:
//!
//! `Hashed -> Colored -> Gridded -> Filtered -> Planned`

use log::debug;
use serde::Serialize;

use crate::color::Rgb;
use crate::digest::Digest;
use crate::grid::{build_grid, filter_even, Cell, GRID_CELLS};
use crate::layout::{pixel_map, Rect};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hashed {
    pub digest: Digest,
}

impl Hashed {
    pub fn new(seed: &str) -> Self {
        let digest = Digest::of(seed);
        debug!("digest for {:?}: {:?}", seed, digest.as_bytes());
        Self { digest }
    }

    pub fn colorize(self) -> Colored {
        let color = Rgb::from(&self.digest);
        debug!("color: {:?}", color);
        Colored { hashed: self, color }
    }
}

impl From<Digest> for Hashed {
    fn from(digest: Digest) -> Self {
        Self { digest }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Colored {
    pub hashed: Hashed,
    pub color: Rgb,
}

impl Colored {
    pub fn build_grid(self) -> Gridded {
        let grid = build_grid(&self.hashed.digest);
        Gridded { colored: self, grid }
    }

    pub fn digest(&self) -> &Digest {
        &self.hashed.digest
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gridded {
    pub colored: Colored,
    pub grid: [Cell; GRID_CELLS],
}

impl Gridded {
    /// Replace the full grid with its even-valued cells.
    pub fn filter_even(self) -> Filtered {
        let cells = filter_even(&self.grid);
        debug!("{} of {} cells painted", cells.len(), GRID_CELLS);
        Filtered {
            colored: self.colored,
            cells,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filtered {
    pub colored: Colored,
    pub cells: Vec<Cell>,
}

impl Filtered {
    pub fn layout(self) -> Planned {
        let pixel_map = pixel_map(&self.cells);
        Planned {
            filtered: self,
            pixel_map,
        }
    }
}

/// Everything the renderer needs: a color and the rectangles to paint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Planned {
    pub filtered: Filtered,
    pub pixel_map: Vec<Rect>,
}

impl Planned {
    /// Run the pure stages for `seed`.
    pub fn from_seed(seed: &str) -> Self {
        Hashed::new(seed)
            .colorize()
            .build_grid()
            .filter_even()
            .layout()
    }

    pub fn color(&self) -> Rgb {
        self.filtered.colored.color
    }

    pub fn digest(&self) -> &Digest {
        self.filtered.colored.digest()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.filtered.cells
    }
}
