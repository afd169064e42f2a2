use std::path::PathBuf;

use text_tally_domain::LongestLines;
use text_tally_shared_kernel::InfrastructureError;

/// A source that was skipped because it could not be opened or read.
#[derive(Debug)]
pub struct SourceFailure {
    pub path: PathBuf,
    pub error: InfrastructureError,
}

/// Result of a multi-source longest-line scan.
#[derive(Debug, Default)]
pub struct LongestLinesOutput {
    pub longest: LongestLines,
    pub failures: Vec<SourceFailure>,
}

impl LongestLinesOutput {
    pub fn failed_paths(&self) -> impl Iterator<Item = &std::path::Path> {
        self.failures.iter().map(|f| f.path.as_path())
    }
}
