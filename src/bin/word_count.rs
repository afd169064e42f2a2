use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use text_tally::cli::WordCountArgs;
use text_tally::interactive::{Prompter, WordSource};
use text_tally::{logging, presentation};
use text_tally_domain::Tokenizer;
use text_tally_infra::FsSourceReader;
use text_tally_shared_kernel::{PresentationError, TextTallyError};
use text_tally_usecase::CountWords;

fn main() -> ExitCode {
    let args = WordCountArgs::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &WordCountArgs) -> Result<()> {
    let source = match (&args.text, &args.file) {
        (Some(text), _) => WordSource::Text(text.clone()),
        (None, Some(path)) => WordSource::File(path.clone()),
        (None, None) => {
            let stdin = io::stdin();
            Prompter::new(stdin.lock(), io::stderr()).word_source()?
        }
    };

    let reader = FsSourceReader::new();
    let usecase = CountWords::new(&reader, Tokenizer::new(args.fold.into()));
    let tally = match source {
        WordSource::Text(text) => usecase.count_text(&text),
        WordSource::File(path) => usecase.count_file(&path)?,
    };
    info!("{} distinct tokens", tally.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    presentation::write_tally(&mut out, &tally, args.tally_sort(), args.top, args.format.into())?;
    out.flush().context("flushing output")?;
    Ok(())
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<TextTallyError>().map(TextTallyError::root) {
        Some(TextTallyError::Presentation(PresentationError::InvalidMenuChoice { .. })) => {
            eprintln!("Invalid option!");
        }
        _ => eprintln!("Error: {err}"),
    }
}
