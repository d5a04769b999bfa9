//! Run summary.

use crate::inject::Diagnostics;
use crate::svg::SvgError;
use std::path::PathBuf;

/// What happened to the output file.
#[derive(Debug)]
pub enum Output {
    Written(PathBuf),
    /// `--dry`: nothing was written.
    Skipped,
    Failed(SvgError),
}

/// Result of one pipeline run.
#[derive(Debug)]
pub struct Report {
    /// Directives appended across all groups.
    pub injected: usize,
    /// Element count of the untouched source tree.
    pub elements_before: usize,
    /// Element count of the animated tree.
    pub elements_after: usize,
    pub diagnostics: Diagnostics,
    pub output: Output,
}

impl Report {
    /// Number of recoverable problems recorded during injection.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.len()
    }
}
