//! Tests for column sweep progress reporting

#[cfg(test)]
mod tests {
    use boundary_grid::grid::builder::{ColumnObserver, GridBuilder};
    use boundary_grid::io::progress::SweepProgress;
    use boundary_grid::spatial::{BoundingBox, CellSize};
    use geo::Coord;

    // Tests each finished column advances the bar
    // Verified by advancing by the column index
    #[test]
    fn test_column_finished_advances() {
        let progress = SweepProgress::hidden(5);
        for column in [4, 0, 2] {
            progress.column_finished(column);
        }

        assert_eq!(progress.position(), 3);
        progress.finish(12);
    }

    // Tests the bar reaches its length after a build
    // Verified by notifying only on non-empty columns
    #[test]
    fn test_progress_tracks_build() {
        let Ok(bounds) = BoundingBox::new(0.0, 0.004, 0.0, 0.002) else {
            unreachable!("Finite bounds should be accepted");
        };
        let Ok(builder) = GridBuilder::new(bounds, CellSize::default()) else {
            unreachable!("Small lattice should be accepted");
        };
        let progress = SweepProgress::hidden(builder.lattice().columns);
        let nowhere = |_: Coord<f64>| false;

        assert!(builder.with_observer(&progress).build(&nowhere).is_ok());
        assert_eq!(progress.position(), 4);
        progress.abandon();
    }
}
