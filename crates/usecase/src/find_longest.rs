use std::io::BufRead;
use std::path::Path;

use log::{debug, warn};
use text_tally_domain::LongestLines;
use text_tally_ports::filesystem::SourceReader;
use text_tally_ports::progress::{NoProgress, ProgressSink};
use text_tally_shared_kernel::{ErrorContext, InfraResult, InfrastructureError, Result};

use crate::dto::{LongestLinesOutput, SourceFailure};

/// What to do when a source cannot be opened or read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report the source and keep scanning the rest.
    #[default]
    SkipAndContinue,
    /// Abort the scan on the first failing source.
    Strict,
}

/// Scan sources in order and keep every line tying for the maximum length.
pub struct FindLongestLines<'a> {
    reader: &'a dyn SourceReader,
    progress: &'a dyn ProgressSink,
    policy: FailurePolicy,
}

impl<'a> FindLongestLines<'a> {
    pub fn new(reader: &'a dyn SourceReader) -> Self {
        Self { reader, progress: &NoProgress, policy: FailurePolicy::default() }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run the scan over `sources` in the given order.
    ///
    /// # Errors
    ///
    /// Only under [`FailurePolicy::Strict`], for the first source that fails.
    /// That failure is returned rather than passed to the progress sink.
    /// Otherwise failures are collected in [`LongestLinesOutput::failures`].
    pub fn run<P: AsRef<Path>>(&self, sources: &[P]) -> Result<LongestLinesOutput> {
        let mut output = LongestLinesOutput::default();

        for source in sources {
            let path = source.as_ref();
            self.progress.on_source(path);

            match scan_source(self.reader, path, &mut output.longest) {
                Ok(lines) => debug!("{}: {lines} lines scanned", path.display()),
                Err(error) if self.policy == FailurePolicy::Strict => {
                    return Err(error)
                        .with_context(|| format!("Aborted at source '{}'", path.display()));
                }
                Err(error) => {
                    self.progress.on_source_failed(path, &error);
                    warn!("skipping {}: {error}", path.display());
                    output.failures.push(SourceFailure { path: path.to_path_buf(), error });
                }
            }
        }

        Ok(output)
    }
}

/// Feed every line of one source to `longest`; the reader is dropped on return.
///
/// Lines already observed stay observed if a read error occurs mid-source.
fn scan_source(
    reader: &dyn SourceReader,
    path: &Path,
    longest: &mut LongestLines,
) -> InfraResult<usize> {
    let mut lines = reader.open_lines(path)?;
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        match lines.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                // Use lossy conversion to support non-UTF8 text files
                let line = String::from_utf8_lossy(&buf);
                longest.observe(&line);
                count += 1;
            }
            Err(source) => {
                return Err(InfrastructureError::FileRead { path: path.to_path_buf(), source });
            }
        }
    }

    Ok(count)
}
