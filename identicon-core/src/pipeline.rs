//! Identicon Pipeline - Single Entry Point
//!
//! CRITICAL: every plan is validated before it is rendered, and the
//! reported outcome is the outcome of the storage write. No bypass.

use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::canvas::{render, Canvas, PngCanvas};
use crate::color::Rgb;
use crate::digest::sha256_hex;
use crate::grid::{build_grid, Cell};
use crate::layout::Rect;
use crate::stages::Planned;
use crate::storage::{FsStorage, Storage};
use crate::validation::{ValidationResult, Validator};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Malformed digest: expected {expected} bytes, got {actual}")]
    MalformedDigest { expected: usize, actual: usize },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Encoding error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result of a successful `create` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOutcome {
    pub success: bool,
    pub message: String,
    pub path: PathBuf,
    pub painted_cells: usize,
    pub size_bytes: usize,
    pub hash: String,
}

/// Snapshot of every stage for one seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageReport {
    pub seed: String,
    pub digest: Vec<u8>,
    pub color: Rgb,
    pub grid: Vec<Cell>,
    pub cells: Vec<Cell>,
    pub pixel_map: Vec<Rect>,
    pub validation: ValidationResult,
}

/// The identicon pipeline - single entry point for generation
pub struct IdenticonPipeline<S = FsStorage, C = PngCanvas> {
    storage: S,
    validator: Validator,
    canvas: PhantomData<C>,
}

impl IdenticonPipeline {
    /// Pipeline writing PNGs into `out_dir`.
    pub fn with_out_dir(out_dir: impl Into<PathBuf>) -> Self {
        Self::new(FsStorage::new(out_dir))
    }
}

impl<S: Storage, C: Canvas> IdenticonPipeline<S, C> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            validator: Validator::new(),
            canvas: PhantomData,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Run the pure stages and validate the result.
    pub fn plan(&self, seed: &str) -> Result<Planned, PipelineError> {
        let planned = Planned::from_seed(seed);

        // MANDATORY: a plan that breaks an invariant is never rendered.
        let validation = self.validator.validate(&planned);
        if !validation.valid {
            warn!("plan for {:?} rejected: {}", seed, validation.summary());
            return Err(PipelineError::ValidationFailed(validation.summary()));
        }

        Ok(planned)
    }

    /// Encoded image bytes for `seed`, without touching storage.
    pub fn generate(&self, seed: &str) -> Result<Vec<u8>, PipelineError> {
        let planned = self.plan(seed)?;
        render::<C>(&planned)
    }

    /// Generate the identicon for `seed` and persist it as `<seed>.png`.
    ///
    /// The outcome reflects the real result of the write.
    pub fn create(&self, seed: &str) -> Result<CreateOutcome, PipelineError> {
        let planned = self.plan(seed)?;
        let bytes = render::<C>(&planned)?;

        let file_name = output_file_name(seed);
        let path = self.storage.write(&file_name, &bytes)?;
        info!("created identicon for {:?} at {}", seed, path.display());

        Ok(CreateOutcome {
            success: true,
            message: format!("Successfully create file, see path: {}", path.display()),
            path,
            painted_cells: planned.cells().len(),
            size_bytes: bytes.len(),
            hash: sha256_hex(&bytes),
        })
    }

    /// Report every intermediate stage for `seed`.
    pub fn inspect(&self, seed: &str) -> StageReport {
        let planned = Planned::from_seed(seed);
        let validation = self.validator.validate(&planned);

        StageReport {
            seed: seed.to_string(),
            digest: planned.digest().as_bytes().to_vec(),
            color: planned.color(),
            grid: build_grid(planned.digest()).to_vec(),
            cells: planned.cells().to_vec(),
            pixel_map: planned.pixel_map.clone(),
            validation,
        }
    }
}

impl Default for IdenticonPipeline {
    fn default() -> Self {
        Self::new(FsStorage::default())
    }
}

/// `<seed>.png`. The seed is used verbatim.
pub fn output_file_name(seed: &str) -> String {
    format!("{}.png", seed)
}

/// Create `./<seed>.png` in the working directory.
pub fn create_identicon(seed: &str) -> Result<CreateOutcome, PipelineError> {
    IdenticonPipeline::with_out_dir(".").create(seed)
}
