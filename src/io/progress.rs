//! Column sweep progress display

use crate::grid::builder::ColumnObserver;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static SWEEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Columns: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advanced once per swept lattice column
///
/// Safe to share with a parallel sweep: the bar is advanced atomically and
/// column order does not matter.
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Create a progress bar drawn to stderr for `columns` columns
    pub fn new(columns: usize) -> Self {
        let bar = ProgressBar::new(columns as u64);
        bar.set_style(SWEEP_STYLE.clone());
        Self { bar }
    }

    /// Create a progress bar that tracks position without drawing, for quiet runs
    pub fn hidden(columns: usize) -> Self {
        let bar = ProgressBar::with_draw_target(Some(columns as u64), ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Columns reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Mark the sweep as done with a summary of the kept cells
    pub fn finish(&self, kept: usize) {
        self.bar.finish_with_message(format!("{kept} cells kept"));
    }

    /// Remove the bar after a failed sweep
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

impl ColumnObserver for SweepProgress {
    fn column_finished(&self, _column: usize) {
        self.bar.inc(1);
    }
}
