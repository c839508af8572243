use crate::Result;
use std::path::Path;

/// Code-style normalizer run over a model file after it is rewritten.
pub trait Formatter {
    /// Formats `path` in place.
    ///
    /// Returns `Err` when the formatter could not be run at all, and
    /// [`FormatStatus::Failed`] when it ran and reported failure.
    fn format(&self, path: &Path) -> Result<FormatStatus>;
}

/// Result of a formatter run. Failures are warnings; the rewritten file is
/// kept either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatStatus {
    Formatted,

    /// No formatter was configured, or the run did not write the file
    Skipped,

    Failed {
        /// Exit code, `None` when the process was killed or never ran
        code: Option<i32>,

        /// Captured stdout and stderr
        output: String,
    },
}

impl FormatStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, FormatStatus::Failed { .. })
    }
}
