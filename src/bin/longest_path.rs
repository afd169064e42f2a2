use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use text_tally::cli::LongestPathArgs;
use text_tally::interactive::Prompter;
use text_tally::logging;
use text_tally::presentation::{self, StderrDiagnostics};
use text_tally_infra::FsSourceReader;
use text_tally_shared_kernel::{PresentationError, TextTallyError};
use text_tally_usecase::FindLongestLines;

fn main() -> ExitCode {
    let args = LongestPathArgs::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &LongestPathArgs) -> Result<()> {
    let sources: Vec<PathBuf> = if args.is_interactive() {
        let stdin = io::stdin();
        let list = Prompter::new(stdin.lock(), io::stderr()).file_list()?;
        if list.requested == 0 {
            println!("No input files. Exiting.");
            return Ok(());
        }
        if list.missing > 0 {
            eprintln!("No input.");
        }
        list.files
    } else {
        args.files.clone()
    };
    info!("scanning {} sources", sources.len());

    let reader = FsSourceReader::new();
    let diagnostics = StderrDiagnostics;
    let output = FindLongestLines::new(&reader)
        .with_progress(&diagnostics)
        .with_policy(args.failure_policy())
        .run(&sources)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    presentation::write_longest(&mut out, &output, args.format.into())?;
    out.flush().context("flushing output")?;
    Ok(())
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<TextTallyError>().map(TextTallyError::root) {
        Some(TextTallyError::Presentation(PresentationError::InvalidNumber { .. })) => {
            eprintln!("Invalid number provided.");
        }
        _ => eprintln!("Error: {err}"),
    }
}
