//! Command-line interface for gridding a boundary document

use crate::grid::builder::GridBuilder;
use crate::grid::cell::GridResult;
use crate::io::document::{BoundaryDocument, output_path, write_grid};
use crate::io::error::Result;
use crate::io::progress::SweepProgress;
use crate::spatial::bounds::{BoundingBox, CellSize};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "boundary-grid")]
#[command(
    author,
    version,
    about = "Generate a square cell grid clipped to a GeoJSON boundary"
)]
/// Command-line arguments for the grid generation tool
pub struct Cli {
    /// Boundary feature file holding the geometry and its bbox
    #[arg(value_name = "FEATURES_GEOJSON")]
    pub input: PathBuf,

    /// Folder to contain the output grid document
    #[arg(value_name = "OUTPUT_FOLDER")]
    pub output_folder: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Sweep lattice columns in parallel
    #[arg(short, long)]
    pub parallel: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Path of the grid document this invocation writes
    pub fn output_path(&self) -> PathBuf {
        output_path(&self.input, &self.output_folder)
    }
}

/// Runs one boundary document through the grid builder
pub struct GridProcessor {
    cli: Cli,
}

impl GridProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the boundary, build the grid and write the grid document
    ///
    /// Returns the generated grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded, the grid cannot be
    /// built or the output cannot be written
    pub fn process(&self) -> Result<GridResult> {
        let start_time = Instant::now();
        let document = BoundaryDocument::from_path(&self.cli.input)?;

        let grid = if let Some(bbox) = document.bounding_box()? {
            let aligned = bbox.aligned();
            info!(
                xmin = aligned.xmin(),
                xmax = aligned.xmax(),
                ymin = aligned.ymin(),
                ymax = aligned.ymax(),
                "Aligned bounding box"
            );
            self.build(&document, aligned)?
        } else {
            warn!(
                input = %self.cli.input.display(),
                "Boundary is empty and no bbox was given, writing an empty grid"
            );
            GridResult::default()
        };

        let destination = self.cli.output_path();
        write_grid(&grid, &destination)?;

        info!(
            output = %destination.display(),
            cells = grid.len(),
            elapsed_s = start_time.elapsed().as_secs_f64(),
            "Grid written"
        );
        Ok(grid)
    }

    fn build(&self, document: &BoundaryDocument, bounds: BoundingBox) -> Result<GridResult> {
        let builder =
            GridBuilder::new(bounds, CellSize::default())?.parallel(self.cli.parallel);

        let columns = builder.lattice().columns;
        let progress = if self.cli.should_show_progress() {
            SweepProgress::new(columns)
        } else {
            SweepProgress::hidden(columns)
        };

        let result = builder.with_observer(&progress).build(&document.boundary);
        match &result {
            Ok(grid) => {
                debug!(swept = progress.position(), columns, "Column sweep complete");
                progress.finish(grid.len());
            }
            Err(_) => progress.abandon(),
        }
        result
    }
}
