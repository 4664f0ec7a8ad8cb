//! Error types for grid generation and the boundary document pipeline

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Builder parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The boundary's containment predicate failed for a coordinate
    ///
    /// Fatal to the whole build: no partial grid is returned.
    BoundaryEvaluation {
        /// Queried coordinate as `[x, y]`
        point: [f64; 2],
        /// Description of the failure
        reason: String,
    },

    /// Boundary geometry cannot be used for containment tests
    InvalidBoundary {
        /// Description of what's wrong with the geometry
        reason: String,
    },

    /// Boundary geometry is not polygonal
    UnsupportedGeometry {
        /// `GeoJSON` type name of the rejected geometry
        kind: String,
    },

    /// Input document is valid JSON but has the wrong shape
    InvalidInput {
        /// Path to the offending document
        path: PathBuf,
        /// Description of what's missing or malformed
        reason: String,
    },

    /// JSON parsing or serialisation failure
    Json {
        /// Path of the document being read or written
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Build was stopped through its cancellation flag
    Cancelled {
        /// Column whose sweep observed the flag
        ///
        /// Sequential builds sweep columns in order, so this is also the
        /// number of columns completed. Parallel builds give no such guarantee.
        at_column: usize,
        /// Columns in the lattice
        total_columns: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::BoundaryEvaluation { point, reason } => {
                write!(
                    f,
                    "Boundary containment failed at ({}, {}): {reason}",
                    point[0], point[1]
                )
            }
            Self::InvalidBoundary { reason } => write!(f, "Invalid boundary: {reason}"),
            Self::UnsupportedGeometry { kind } => {
                write!(
                    f,
                    "Unsupported boundary geometry '{kind}' (expected Polygon or MultiPolygon)"
                )
            }
            Self::InvalidInput { path, reason } => {
                write!(f, "Invalid input document '{}': {reason}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON error in '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Cancelled {
                at_column,
                total_columns,
            } => {
                write!(
                    f,
                    "Grid build cancelled at column {at_column} of {total_columns}"
                )
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a boundary evaluation error for the given coordinate
pub fn boundary_error(x: f64, y: f64, reason: &impl ToString) -> GridError {
    GridError::BoundaryEvaluation {
        point: [x, y],
        reason: reason.to_string(),
    }
}
