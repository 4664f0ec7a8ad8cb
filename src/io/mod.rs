//! Input/output operations, configuration and error handling

/// Command-line interface and grid job orchestration
pub mod cli;
/// Lattice constants and runtime defaults
pub mod configuration;
/// Boundary document loading and grid document writing
pub mod document;
/// Error types shared by the whole crate
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Column sweep progress display
pub mod progress;
