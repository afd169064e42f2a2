// crates/infra/src/filesystem.rs
use std::io::BufRead;
use std::path::Path;

use log::trace;
use text_tally_ports::filesystem::SourceReader;
use text_tally_shared_kernel::{InfraResult, InfrastructureError};

use crate::persistence::FileReader;

/// [`SourceReader`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSourceReader;

impl FsSourceReader {
    pub fn new() -> Self {
        Self
    }
}

fn file_read_error(path: &Path) -> impl FnOnce(std::io::Error) -> InfrastructureError + '_ {
    move |source| InfrastructureError::FileRead { path: path.to_path_buf(), source }
}

impl SourceReader for FsSourceReader {
    fn read_text(&self, path: &Path) -> InfraResult<String> {
        trace!("reading {}", path.display());
        FileReader::read_to_string_lossy(path).map_err(file_read_error(path))
    }

    fn open_lines(&self, path: &Path) -> InfraResult<Box<dyn BufRead + '_>> {
        trace!("opening {}", path.display());
        let reader = FileReader::open_buffered(path).map_err(file_read_error(path))?;
        Ok(Box::new(reader))
    }
}
