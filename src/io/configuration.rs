//! Lattice constants and runtime configuration defaults

// Cell geometry and identifier scaling are fixed independently of the
// cell size handed to the builder.
/// Edge length of every generated cell polygon
pub const CELL_EDGE_UNIT: f64 = 0.001;
/// Factor applied to a cell's bottom-left coordinate to form `rid`/`cid`
pub const ID_SCALE: f64 = 1000.0;

/// Decimal digits the lattice origin is aligned to
pub const LATTICE_PRECISION_DIGITS: i32 = 3;

// Default values for the driver
/// Default cell width in degrees
pub const DEFAULT_CELL_WIDTH: f64 = 0.001;
/// Default cell height in degrees
pub const DEFAULT_CELL_HEIGHT: f64 = 0.001;

// Safety limit to prevent excessive memory allocation
/// Maximum number of lattice steps along either axis
pub const MAX_GRID_DIMENSION: usize = 1_000_000;

// Output settings
/// Suffix added to the input file name to form the output name
pub const OUTPUT_SUFFIX: &str = "_grid";
/// Extension of generated grid documents
pub const OUTPUT_EXTENSION: &str = "geojson";

// Logging and progress display
/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Filter used with `--quiet`
pub const QUIET_LOG_FILTER: &str = "warn";
/// Width of the column sweep progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
