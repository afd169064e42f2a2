// crates/ports/src/progress.rs
use std::path::Path;

use text_tally_shared_kernel::InfrastructureError;

/// Receives per-source events while a multi-source scan runs.
pub trait ProgressSink: Send + Sync {
    fn on_source(&self, _path: &Path) {}
    fn on_source_failed(&self, _path: &Path, _error: &InfrastructureError) {}
}

/// Sink that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {}
