//! Boundary document loading and grid document writing

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::grid::cell::GridResult;
use crate::io::configuration::{OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{GridError, Result};
use crate::spatial::boundary::GeoBoundary;
use crate::spatial::bounds::BoundingBox;

// Only the members the driver needs; `type`, `properties` and friends are ignored
#[derive(Debug, Deserialize)]
struct RawDocument {
    geometry: Option<geojson::Geometry>,
    #[serde(default)]
    bbox: Option<Vec<f64>>,
}

/// Boundary feature read from disk
#[derive(Debug, Clone)]
pub struct BoundaryDocument {
    /// Polygonal boundary to clip against
    pub boundary: GeoBoundary,
    /// Declared `bbox` member, if present
    pub bbox: Option<BoundingBox>,
}

impl BoundaryDocument {
    /// Read and parse a boundary document
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is invalid
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GridError::FileSystem {
            path: path.to_path_buf(),
            operation: "read",
            source: e,
        })?;
        Self::parse(&content, path)
    }

    /// Parse a boundary document; `origin` is only used in error messages
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The content is not valid JSON
    /// - The `geometry` member is missing or not polygonal
    /// - The `bbox` member does not hold exactly four finite numbers
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(content).map_err(|e| GridError::Json {
            path: origin.to_path_buf(),
            source: e,
        })?;

        let geometry = raw.geometry.ok_or_else(|| GridError::InvalidInput {
            path: origin.to_path_buf(),
            reason: "missing 'geometry' member".to_string(),
        })?;
        let boundary = GeoBoundary::from_geojson(geometry)?;

        let bbox = raw
            .bbox
            .map(|values| {
                let edges: [f64; 4] =
                    values
                        .try_into()
                        .map_err(|rejected: Vec<f64>| GridError::InvalidInput {
                            path: origin.to_path_buf(),
                            reason: format!(
                                "'bbox' must hold 4 numbers [xmin, ymin, xmax, ymax], found {}",
                                rejected.len()
                            ),
                        })?;
                BoundingBox::from_geojson_bbox(edges)
            })
            .transpose()?;

        Ok(Self { boundary, bbox })
    }

    /// Area to tile: the declared `bbox`, or the boundary's own extent
    ///
    /// Returns `None` when there is no `bbox` and the boundary is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary's extent is not finite
    pub fn bounding_box(&self) -> Result<Option<BoundingBox>> {
        self.bbox.map_or_else(
            || {
                debug!("No 'bbox' member, using the boundary extent");
                self.boundary.bounding_box()
            },
            |bbox| Ok(Some(bbox)),
        )
    }
}

/// Location of the grid document generated for `input`
///
/// `<output_folder>/<input file name>_grid.geojson`; the input's own
/// extension is kept, so `county.geojson` maps to `county.geojson_grid.geojson`
pub fn output_path(input: &Path, output_folder: &Path) -> PathBuf {
    let name = input.file_name().unwrap_or_default();
    output_folder.join(format!(
        "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
        name.to_string_lossy()
    ))
}

/// Write `grid` as a `GeoJSON` feature collection
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be created or written
/// - Serialisation fails
pub fn write_grid(grid: &GridResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = File::create(path).map_err(|e| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "create",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, &grid.to_feature_collection()).map_err(|e| {
        GridError::Json {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    writer.flush().map_err(|e| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source: e,
    })?;

    debug!(path = %path.display(), features = grid.len(), "Grid document written");
    Ok(())
}
