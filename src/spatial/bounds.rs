//! Validated bounding boxes and cell sizes for lattice construction

use geo::Rect;

use crate::io::configuration::{
    DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, LATTICE_PRECISION_DIGITS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::precision::{ceil_to_digits, floor_to_digits};

/// Axis-aligned area to tile, in boundary coordinates
///
/// Bounds are always finite. An inverted box (`xmax < xmin` or
/// `ymax < ymin`) is legal and simply produces an empty lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl BoundingBox {
    /// Create a bounding box from its four edges
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if any edge is NaN or infinite
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self> {
        for (parameter, value) in [("xmin", xmin), ("xmax", xmax), ("ymin", ymin), ("ymax", ymax)]
        {
            if !value.is_finite() {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"bounding box edges must be finite numbers",
                ));
            }
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    /// Create a bounding box from a `GeoJSON` `bbox` member (`[xmin, ymin, xmax, ymax]`)
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if any edge is NaN or infinite
    pub fn from_geojson_bbox(bbox: [f64; 4]) -> Result<Self> {
        let [xmin, ymin, xmax, ymax] = bbox;
        Self::new(xmin, xmax, ymin, ymax)
    }

    /// Create a bounding box covering a `geo` rectangle
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the rectangle has non-finite corners
    pub fn from_rect(rect: Rect<f64>) -> Result<Self> {
        let min = rect.min();
        let max = rect.max();
        Self::new(min.x, max.x, min.y, max.y)
    }

    /// Snap the box onto the canonical lattice
    ///
    /// The western edge is floored and the northern edge ceiled to
    /// [`LATTICE_PRECISION_DIGITS`] decimals; the other two edges are kept.
    #[must_use]
    pub fn aligned(&self) -> Self {
        Self {
            xmin: floor_to_digits(self.xmin, LATTICE_PRECISION_DIGITS),
            xmax: self.xmax,
            ymin: self.ymin,
            ymax: ceil_to_digits(self.ymax, LATTICE_PRECISION_DIGITS),
        }
    }

    /// Western edge
    pub const fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Eastern edge
    pub const fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Southern edge
    pub const fn ymin(&self) -> f64 {
        self.ymin
    }

    /// Northern edge
    pub const fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Horizontal extent (negative for an inverted box)
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Vertical extent (negative for an inverted box)
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
}

/// Lattice step along each axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    width: f64,
    height: f64,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CELL_WIDTH,
            height: DEFAULT_CELL_HEIGHT,
        }
    }
}

impl CellSize {
    /// Create a cell size
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error unless both dimensions are finite and positive
    pub fn new(width: f64, height: f64) -> Result<Self> {
        for (parameter, value) in [("cell_width", width), ("cell_height", height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"cell dimensions must be finite and greater than zero",
                ));
            }
        }

        Ok(Self { width, height })
    }

    /// Horizontal step
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Vertical step
    pub const fn height(&self) -> f64 {
        self.height
    }
}
