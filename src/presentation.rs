// src/presentation.rs
use std::io::Write;
use std::path::Path;

use text_tally_domain::TokenTally;
use text_tally_domain::analytics::TallySort;
use text_tally_ports::progress::ProgressSink;
use text_tally_shared_kernel::{InfrastructureError, Result};
use text_tally_usecase::LongestLinesOutput;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write a tally as `<token> : <count>` lines (or a JSON array).
pub fn write_tally<W: Write>(
    out: &mut W,
    tally: &TokenTally,
    sort: TallySort,
    top: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let mut entries = sort.arrange(tally.entries());
    if let Some(n) = top {
        entries.truncate(n);
    }

    match format {
        OutputFormat::Text => {
            writeln!(out)?;
            writeln!(out, "===== WORD COUNT RESULT =====")?;
            for entry in &entries {
                writeln!(out, "{} : {}", entry.token, entry.count)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write every co-maximal line followed by the shared length.
pub fn write_longest<W: Write>(
    out: &mut W,
    output: &LongestLinesOutput,
    format: OutputFormat,
) -> Result<()> {
    let longest = &output.longest;
    match format {
        OutputFormat::Text => {
            if longest.is_empty() {
                writeln!(out, "No paths found.")?;
                return Ok(());
            }
            writeln!(out)?;
            writeln!(out, "LONGEST PATH(S)")?;
            for line in longest.lines() {
                writeln!(out, "{line}")?;
            }
            writeln!(out)?;
            writeln!(out, "Longest Length = {} characters", longest.max_length())?;
        }
        OutputFormat::Json => {
            let failed: Vec<String> =
                output.failed_paths().map(|p| p.display().to_string()).collect();
            let value = serde_json::json!({
                "max_length": longest.max_length(),
                "lines": longest.lines(),
                "failed_sources": failed,
            });
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Prints one diagnostic line per unreadable source, as soon as it fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl ProgressSink for StderrDiagnostics {
    fn on_source_failed(&self, path: &Path, error: &InfrastructureError) {
        match error {
            InfrastructureError::FileRead { source, .. } => {
                eprintln!("{}: {source}", path.display());
            }
            other => eprintln!("{}: {other}", path.display()),
        }
    }
}
