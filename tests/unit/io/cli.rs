//! Tests for command-line parsing and the grid job driver

#[cfg(test)]
mod tests {
    use boundary_grid::GridError;
    use boundary_grid::io::cli::{Cli, GridProcessor};
    use clap::Parser;
    use std::path::{Path, PathBuf};

    const HALF_PLANE_FEATURE: &str = r#"{
        "type": "Feature",
        "properties": {},
        "bbox": [0.0003, 0.0, 0.002, 0.0017],
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[-1.0, -1.0], [0.001, -1.0], [0.001, 1.0], [-1.0, 1.0], [-1.0, -1.0]]]
        }
    }"#;

    fn cli_for(input: &Path, output: &Path, extra: &[&str]) -> Cli {
        let mut args = vec![
            "boundary-grid".to_string(),
            input.display().to_string(),
            output.display().to_string(),
        ];
        args.extend(extra.iter().map(ToString::to_string));
        Cli::parse_from(args)
    }

    // Tests parsing with only the two positional arguments
    // Verified by swapping the positional order
    #[test]
    fn test_cli_parse_positionals() {
        let cli = Cli::parse_from(["boundary-grid", "county.geojson", "grids"]);

        assert_eq!(cli.input, PathBuf::from("county.geojson"));
        assert_eq!(cli.output_folder, PathBuf::from("grids"));
        assert!(!cli.quiet);
        assert!(!cli.parallel);
        assert!(cli.should_show_progress());
        assert_eq!(
            cli.output_path(),
            PathBuf::from("grids/county.geojson_grid.geojson")
        );
    }

    // Tests optional flags in short form
    // Verified by changing the short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["boundary-grid", "a.geojson", "out", "-q", "-p"]);

        assert!(cli.quiet);
        assert!(cli.parallel);
        assert!(!cli.should_show_progress());
    }

    // Tests the output folder is required
    // Verified by making the output folder optional
    #[test]
    fn test_cli_requires_output_folder() {
        assert!(Cli::try_parse_from(["boundary-grid", "a.geojson"]).is_err());
    }

    // Tests a full run: bbox alignment, clipping and output naming
    // Verified by skipping the xmin floor during alignment
    #[test]
    fn test_process_writes_clipped_grid() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be creatable");
        };
        let input = dir.path().join("half.geojson");
        assert!(std::fs::write(&input, HALF_PLANE_FEATURE).is_ok());
        let output = dir.path().join("grids");

        for extra in [&["--quiet"][..], &["--quiet", "--parallel"][..]] {
            let processor = GridProcessor::new(cli_for(&input, &output, extra));
            let Ok(grid) = processor.process() else {
                unreachable!("Valid document should be gridded");
            };

            // xmin 0.0003 floors to 0.0, so columns start at 0.0 and 0.001
            assert_eq!(grid.columns(), 2);
            assert_eq!(grid.rows(), 2);
            assert_eq!(grid.len(), 2);
            assert!(grid.iter().all(|c| c.cid() == 0));

            let written = output.join("half.geojson_grid.geojson");
            let content = std::fs::read_to_string(&written).unwrap_or_default();
            let Ok(json) = serde_json::from_str::<serde_json::Value>(&content) else {
                unreachable!("Output should be valid JSON");
            };
            assert_eq!(json["features"].as_array().map(Vec::len), Some(2));
        }
    }

    // Tests a missing input surfaces as an error
    // Verified by writing an empty grid when the input is missing
    #[test]
    fn test_process_missing_input() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be creatable");
        };
        let processor = GridProcessor::new(cli_for(
            &dir.path().join("absent.geojson"),
            dir.path(),
            &["-q"],
        ));

        assert!(matches!(
            processor.process(),
            Err(GridError::FileSystem { .. })
        ));
    }
}
