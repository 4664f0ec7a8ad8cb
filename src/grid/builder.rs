//! Lattice sweep that clips a regular cell grid to a boundary
//!
//! The builder walks a `columns` x `rows` lattice in column-major order,
//! tests three corners of every candidate cell against the boundary and keeps
//! the cells with at least one corner inside. Columns are independent, so the
//! sweep can also run on the rayon pool with the column order restored
//! afterwards.

use std::sync::atomic::{AtomicBool, Ordering};

use geo::Coord;
use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::grid::cell::{Cell, GridResult};
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::math::precision::step_count;
use crate::spatial::boundary::Boundary;
use crate::spatial::bounds::{BoundingBox, CellSize};

/// Ring positions tested for containment: top-left, top-right, bottom-right
const TESTED_CORNERS: std::ops::Range<usize> = 1..4;

/// Receives a notification each time a lattice column has been swept
///
/// Parallel sweeps call this from worker threads in no particular order.
pub trait ColumnObserver: Sync {
    /// Called once per finished column
    fn column_finished(&self, column: usize);
}

/// Lattice dimensions implied by a bounding box and a cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
    /// Steps along x
    pub columns: usize,
    /// Steps along y
    pub rows: usize,
}

impl Lattice {
    /// Compute the step counts covering `bounds`
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if either axis exceeds [`MAX_GRID_DIMENSION`]
    pub fn covering(bounds: &BoundingBox, cell_size: CellSize) -> Result<Self> {
        let columns = step_count(bounds.width(), cell_size.width());
        let rows = step_count(bounds.height(), cell_size.height());

        for (parameter, steps) in [("columns", columns), ("rows", rows)] {
            if steps > MAX_GRID_DIMENSION as f64 {
                return Err(invalid_parameter(
                    parameter,
                    &steps,
                    &format!("lattice is limited to {MAX_GRID_DIMENSION} steps per axis"),
                ));
            }
        }

        Ok(Self {
            columns: columns as usize,
            rows: rows as usize,
        })
    }

    /// Whether the lattice has no candidate cells
    pub const fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }
}

/// Configurable grid builder
///
/// Holds validated inputs; call [`GridBuilder::build`] with a boundary to
/// run the sweep. The same builder can be reused for several boundaries.
pub struct GridBuilder<'a> {
    bounds: BoundingBox,
    cell_size: CellSize,
    lattice: Lattice,
    parallel: bool,
    cancel: Option<&'a AtomicBool>,
    observer: Option<&'a dyn ColumnObserver>,
}

impl<'a> GridBuilder<'a> {
    /// Create a sequential builder for `bounds` stepped by `cell_size`
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the lattice would be too large
    pub fn new(bounds: BoundingBox, cell_size: CellSize) -> Result<Self> {
        let lattice = Lattice::covering(&bounds, cell_size)?;
        Ok(Self {
            bounds,
            cell_size,
            lattice,
            parallel: false,
            cancel: None,
            observer: None,
        })
    }

    /// Sweep columns on the rayon thread pool
    #[must_use]
    pub const fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Abort the build once `flag` is set; checked before each column
    #[must_use]
    pub const fn with_cancellation(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Report finished columns to `observer`
    #[must_use]
    pub fn with_observer(mut self, observer: &'a dyn ColumnObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Lattice that [`GridBuilder::build`] will sweep
    pub const fn lattice(&self) -> Lattice {
        self.lattice
    }

    /// Bounding box being tiled
    pub const fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Lattice step
    pub const fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    /// Sweep the lattice and keep every cell intersecting `boundary`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The boundary fails to evaluate a corner (no partial result is returned)
    /// - The cancellation flag is set before the sweep completes
    pub fn build<B>(&self, boundary: &B) -> Result<GridResult>
    where
        B: Boundary + Sync + ?Sized,
    {
        let Lattice { columns, rows } = self.lattice;
        info!(
            columns,
            rows,
            parallel = self.parallel,
            "Sweeping grid lattice"
        );

        if self.lattice.is_empty() {
            debug!("Degenerate lattice, nothing to sweep");
            return Ok(GridResult::new(Vec::new(), columns, rows));
        }

        let cells = if self.parallel {
            let per_column = (0..columns)
                .into_par_iter()
                .map(|column| self.sweep_column(column, boundary))
                .collect::<Result<Vec<Vec<Cell>>>>()?;
            per_column.into_iter().flatten().collect()
        } else {
            let mut cells = Vec::new();
            for column in 0..columns {
                cells.extend(self.sweep_column(column, boundary)?);
            }
            cells
        };

        info!(
            kept = cells.len(),
            candidates = columns.saturating_mul(rows),
            "Grid lattice swept"
        );
        Ok(GridResult::new(cells, columns, rows))
    }

    fn sweep_column<B>(&self, column: usize, boundary: &B) -> Result<Vec<Cell>>
    where
        B: Boundary + ?Sized,
    {
        if let Some(flag) = self.cancel
            && flag.load(Ordering::Relaxed)
        {
            return Err(GridError::Cancelled {
                at_column: column,
                total_columns: self.lattice.columns,
            });
        }

        // Separate multiply and add: identifiers must match the unfused lattice exactly
        #[allow(clippy::suboptimal_flops)]
        let grid_x_left = self.bounds.xmin() + column as f64 * self.cell_size.width();
        let mut kept = Vec::new();

        for row in 0..self.lattice.rows {
            #[allow(clippy::suboptimal_flops)]
            let grid_y_bottom = self.bounds.ymin() + row as f64 * self.cell_size.height();
            let origin = Coord {
                x: grid_x_left,
                y: grid_y_bottom,
            };
            if intersects(origin, boundary)? {
                kept.push(Cell::from_origin(origin));
            }
        }

        trace!(column, kept = kept.len(), "Column swept");
        if let Some(observer) = self.observer {
            observer.column_finished(column);
        }
        Ok(kept)
    }
}

/// Whether the cell anchored at `origin` has a tested corner inside `boundary`
///
/// Stops at the first contained corner.
///
/// # Errors
///
/// Propagates the boundary's evaluation error
pub fn intersects<B>(origin: Coord<f64>, boundary: &B) -> Result<bool>
where
    B: Boundary + ?Sized,
{
    let ring = Cell::ring_at(origin);
    for corner in ring.get(TESTED_CORNERS).unwrap_or(&[]) {
        if boundary.contains(*corner)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Build a grid over `[xmin, xmax] x [ymin, ymax]` clipped to `boundary`
///
/// Sequential convenience wrapper around [`GridBuilder`].
///
/// # Errors
///
/// Returns an error if:
/// - Any bound is not finite
/// - A cell dimension is not finite and positive
/// - The lattice exceeds [`MAX_GRID_DIMENSION`] steps on an axis
/// - The boundary fails to evaluate a corner
pub fn build<B>(
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    cell_height: f64,
    cell_width: f64,
    boundary: &B,
) -> Result<GridResult>
where
    B: Boundary + Sync + ?Sized,
{
    let bounds = BoundingBox::new(xmin, xmax, ymin, ymax)?;
    let cell_size = CellSize::new(cell_width, cell_height)?;
    GridBuilder::new(bounds, cell_size)?.build(boundary)
}
