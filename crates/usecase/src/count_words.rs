use std::path::Path;

use log::debug;
use text_tally_domain::{TokenTally, Tokenizer};
use text_tally_ports::filesystem::SourceReader;
use text_tally_shared_kernel::{ErrorContext, Result};

/// Tally words from typed text or from a whole file.
///
/// A file that cannot be read fails the whole use case.
pub struct CountWords<'a> {
    reader: &'a dyn SourceReader,
    tokenizer: Tokenizer,
}

impl<'a> CountWords<'a> {
    pub fn new(reader: &'a dyn SourceReader, tokenizer: Tokenizer) -> Self {
        Self { reader, tokenizer }
    }

    pub fn count_text(&self, text: &str) -> TokenTally {
        let tally = TokenTally::from_text(text, &self.tokenizer);
        debug!(
            "tallied {} tokens ({} distinct, fold={})",
            tally.total(),
            tally.len(),
            self.tokenizer.fold_mode().as_str()
        );
        tally
    }

    pub fn count_file(&self, path: &Path) -> Result<TokenTally> {
        let text = self
            .reader
            .read_text(path)
            .with_context(|| format!("Cannot open file '{}'", path.display()))?;
        debug!("read {} bytes from {}", text.len(), path.display());
        Ok(self.count_text(&text))
    }
}
