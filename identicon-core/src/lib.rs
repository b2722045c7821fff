//! Identicon Core - Deterministic Avatar Generator
//!
//! # The Pipeline
//! 1. Digest: MD5 of the seed, last byte dropped
//! 2. Color: first three digest bytes
//! 3. Grid: five mirrored rows of five cells
//! 4. Filter: even-valued cells are painted
//! 5. Layout: 50px squares on a 250x250 canvas
//! 6. Render: PNG bytes, persisted as `<seed>.png`

pub mod digest;
pub mod color;
pub mod grid;
pub mod layout;
pub mod stages;
pub mod validation;
pub mod canvas;
pub mod storage;
pub mod pipeline;

pub use digest::{Digest, DIGEST_LEN, sha256_hex};
pub use color::Rgb;
pub use grid::{Cell, GRID_CELLS};
pub use layout::{Point, Rect, CANVAS_SIZE, CELL_SIZE};
pub use stages::{Hashed, Colored, Gridded, Filtered, Planned};
pub use validation::{ValidationResult, ValidationViolation, Validator};
pub use canvas::{Canvas, PngCanvas};
pub use storage::{FsStorage, Storage};
pub use pipeline::{IdenticonPipeline, CreateOutcome, StageReport, PipelineError, create_identicon};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
