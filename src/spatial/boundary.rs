//! Point containment capability used to clip the lattice
//!
//! The builder only ever asks one question of a boundary: is this
//! coordinate inside? Anything that can answer it, from a `geo` polygon to a
//! plain closure, can drive a build.

use geo::{BoundingRect, Coord, CoordsIter, MultiPolygon, Point, Polygon};

use crate::io::error::{GridError, Result, boundary_error};
use crate::spatial::bounds::BoundingBox;

/// Point-in-polygon capability
pub trait Boundary {
    /// Whether `point` lies inside the boundary
    ///
    /// Points exactly on the boundary line follow the semantics of the
    /// implementation; the `geo`-backed ones treat them as outside.
    ///
    /// # Errors
    ///
    /// Returns a boundary evaluation error if containment cannot be decided
    fn contains(&self, point: Coord<f64>) -> Result<bool>;
}

impl<F> Boundary for F
where
    F: Fn(Coord<f64>) -> bool,
{
    fn contains(&self, point: Coord<f64>) -> Result<bool> {
        Ok(self(point))
    }
}

fn ensure_finite(point: Coord<f64>) -> Result<()> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(boundary_error(
            point.x,
            point.y,
            &"query coordinate is not finite",
        ))
    }
}

impl Boundary for Polygon<f64> {
    fn contains(&self, point: Coord<f64>) -> Result<bool> {
        ensure_finite(point)?;
        Ok(geo::Contains::contains(self, &Point::from(point)))
    }
}

impl Boundary for MultiPolygon<f64> {
    fn contains(&self, point: Coord<f64>) -> Result<bool> {
        ensure_finite(point)?;
        Ok(geo::Contains::contains(self, &Point::from(point)))
    }
}

/// Polygonal boundary loaded from a `GeoJSON` geometry
#[derive(Debug, Clone, PartialEq)]
pub enum GeoBoundary {
    /// Single polygon, optionally with holes
    Polygon(Polygon<f64>),
    /// Several polygons treated as one area
    MultiPolygon(MultiPolygon<f64>),
}

impl GeoBoundary {
    /// Convert a `GeoJSON` geometry into a boundary
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The geometry is neither a `Polygon` nor a `MultiPolygon`
    /// - The geometry cannot be converted to `geo` types
    /// - Any coordinate is NaN or infinite
    pub fn from_geojson(geometry: geojson::Geometry) -> Result<Self> {
        let kind = geometry.value.type_name();

        let converted = geo::Geometry::<f64>::try_from(geometry).map_err(|e| {
            GridError::InvalidBoundary {
                reason: e.to_string(),
            }
        })?;

        let boundary = match converted {
            geo::Geometry::Polygon(polygon) => Self::Polygon(polygon),
            geo::Geometry::MultiPolygon(multi) => Self::MultiPolygon(multi),
            _ => {
                return Err(GridError::UnsupportedGeometry {
                    kind: kind.to_string(),
                });
            }
        };

        if !boundary.has_finite_coordinates() {
            return Err(GridError::InvalidBoundary {
                reason: "geometry contains non-finite coordinates".to_string(),
            });
        }

        Ok(boundary)
    }

    /// Extent of the boundary, or `None` for an empty geometry
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the extent is not finite
    pub fn bounding_box(&self) -> Result<Option<BoundingBox>> {
        let rect = match self {
            Self::Polygon(polygon) => polygon.bounding_rect(),
            Self::MultiPolygon(multi) => multi.bounding_rect(),
        };
        rect.map(BoundingBox::from_rect).transpose()
    }

    fn has_finite_coordinates(&self) -> bool {
        let finite = |c: Coord<f64>| c.x.is_finite() && c.y.is_finite();
        match self {
            Self::Polygon(polygon) => polygon.coords_iter().all(finite),
            Self::MultiPolygon(multi) => multi.coords_iter().all(finite),
        }
    }
}

impl Boundary for GeoBoundary {
    fn contains(&self, point: Coord<f64>) -> Result<bool> {
        match self {
            Self::Polygon(polygon) => Boundary::contains(polygon, point),
            Self::MultiPolygon(multi) => Boundary::contains(multi, point),
        }
    }
}
