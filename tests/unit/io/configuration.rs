//! Tests for lattice constants and runtime defaults

#[cfg(test)]
mod tests {
    use boundary_grid::io::configuration::{
        CELL_EDGE_UNIT, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, ID_SCALE,
        LATTICE_PRECISION_DIGITS, MAX_GRID_DIMENSION, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
    };

    // Tests the cell edge and identifier scale describe the same lattice
    // Verified by changing ID_SCALE to 100
    #[test]
    fn test_edge_unit_and_id_scale_agree() {
        assert!((CELL_EDGE_UNIT * ID_SCALE - 1.0).abs() < f64::EPSILON);
        assert!((10_f64.powi(LATTICE_PRECISION_DIGITS) - ID_SCALE).abs() < f64::EPSILON);
    }

    // Tests default cell size matches the fixed edge unit
    // Verified by changing the default width
    #[test]
    fn test_default_cell_size() {
        assert!((DEFAULT_CELL_WIDTH - CELL_EDGE_UNIT).abs() < f64::EPSILON);
        assert!((DEFAULT_CELL_HEIGHT - CELL_EDGE_UNIT).abs() < f64::EPSILON);
    }

    // Tests the lattice size limit
    // Verified by reducing the limit
    #[test]
    fn test_max_grid_dimension() {
        assert_eq!(MAX_GRID_DIMENSION, 1_000_000);
    }

    // Tests output naming constants
    // Verified by removing the underscore prefix
    #[test]
    fn test_output_naming() {
        assert_eq!(OUTPUT_SUFFIX, "_grid");
        assert_eq!(OUTPUT_EXTENSION, "geojson");
        for ch in OUTPUT_SUFFIX.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Output suffix contains invalid character: {ch}"
            );
        }
    }
}
