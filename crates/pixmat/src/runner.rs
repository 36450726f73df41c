// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Runner — Loader -> one transform -> Writer.
//
// Each call loads its own grid, transforms a private copy and writes it out.
// Nothing is shared between calls except the configuration and the crop RNG.

use std::path::{Path, PathBuf};

use pixmat_core::{PixelGrid, Result, ReverseMode, Rotation, TransformConfig};
use pixmat_io::{ImageSource, Loader, Writer};
use pixmat_transform::Operation;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};

/// Result of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// The transformed grid, as written.
    pub grid: PixelGrid,
    /// Where the grid was written.
    pub path: PathBuf,
}

/// Runs single transforms end to end.
///
/// ```no_run
/// use pixmat::{ImageSource, Rotation, Runner, TransformConfig};
///
/// let mut runner = Runner::new(TransformConfig::default())?;
/// let out = runner.rotate(&ImageSource::new("photo.png", false), Rotation::Deg90)?;
/// println!("wrote {}", out.path.display());
/// # Ok::<(), pixmat::PixmatError>(())
/// ```
pub struct Runner {
    config: TransformConfig,
    loader: Loader,
    writer: Writer,
    rng: StdRng,
}

impl Runner {
    /// Validate `config` and prepare the loader, writer and crop RNG.
    pub fn new(config: TransformConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.crop_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        info!(output_dir = %config.output_dir.display(), "Runner initialised");
        Ok(Self {
            loader: Loader::new(&config),
            writer: Writer::new(&config),
            config,
            rng,
        })
    }

    /// The validated configuration this runner was built with.
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Load `source`, apply `operation`, and write the result.
    ///
    /// With no `output` the result goes to
    /// `config.output_dir / operation.default_file_name()`.
    #[instrument(skip_all, fields(source = %source, operation = %operation))]
    pub fn run(
        &mut self,
        source: &ImageSource,
        operation: &Operation,
        output: Option<&Path>,
    ) -> Result<RunOutput> {
        let grid = self.loader.load(source, operation.color_mode())?;
        let result = operation.apply(&grid, &mut self.rng)?;

        let path = match output {
            Some(p) => p.to_path_buf(),
            None => self.config.output_dir.join(operation.default_file_name()),
        };
        self.writer.save(&result, &path)?;

        info!(
            path = %path.display(),
            height = result.height(),
            width = result.width(),
            "Operation complete"
        );
        Ok(RunOutput { grid: result, path })
    }

    // -- One-call helpers ------------------------------------------------------

    /// Flip `source` along `mode` and write `image_reversed.png`.
    pub fn reverse(&mut self, source: &ImageSource, mode: ReverseMode) -> Result<RunOutput> {
        self.run(source, &Operation::Reverse { mode }, None)
    }

    /// Rotate `source` clockwise and write `rotated_image.png`.
    pub fn rotate(&mut self, source: &ImageSource, rotation: Rotation) -> Result<RunOutput> {
        self.run(source, &Operation::Rotate { rotation }, None)
    }

    /// Threshold `source` in grayscale and write `bwfiltered_image.jpg`.
    pub fn bw_filter(&mut self, source: &ImageSource) -> Result<RunOutput> {
        self.run(source, &Operation::BwFilter, None)
    }

    /// Invert the colours of `source` and write `negative_image.jpg`.
    pub fn inverse(&mut self, source: &ImageSource) -> Result<RunOutput> {
        self.run(source, &Operation::Inverse, None)
    }

    /// Brighten with `intensity`, or the configured default when `None`.
    pub fn brighten(&mut self, source: &ImageSource, intensity: Option<i32>) -> Result<RunOutput> {
        let op = match intensity {
            Some(intensity) => Operation::Brighten { intensity },
            None => Operation::brighten_default(&self.config),
        };
        self.run(source, &op, None)
    }

    /// Blur with `intensity`, or the configured default when `None`.
    pub fn blur(&mut self, source: &ImageSource, intensity: Option<u32>) -> Result<RunOutput> {
        let op = match intensity {
            Some(intensity) => Operation::Blur { intensity },
            None => Operation::blur_default(&self.config),
        };
        self.run(source, &op, None)
    }

    /// Crop `source` at offsets drawn from the runner's RNG and write
    /// `randomlycropped_image.jpg`.
    pub fn random_crop(&mut self, source: &ImageSource) -> Result<RunOutput> {
        self.run(source, &Operation::RandomCrop, None)
    }
}
