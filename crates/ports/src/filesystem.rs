// crates/ports/src/filesystem.rs
use std::io::BufRead;
use std::path::Path;

use text_tally_shared_kernel::InfraResult;

/// Port for reading text sources.
///
/// Implementations hand out owned readers; a reader returned by
/// [`SourceReader::open_lines`] is released when dropped.
pub trait SourceReader: Send + Sync {
    /// Load the whole source into memory.
    fn read_text(&self, path: &Path) -> InfraResult<String>;

    /// Open the source for line-by-line reading.
    fn open_lines(&self, path: &Path) -> InfraResult<Box<dyn BufRead + '_>>;
}
