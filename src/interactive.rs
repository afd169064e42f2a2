// src/interactive.rs
//! Prompt-driven input for both programs when no arguments are given.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use text_tally_domain::model::strip_line_terminator;
use text_tally_shared_kernel::{InfrastructureError, PresentationError, Result};

/// Where `word_count` should take its text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Text(String),
    File(PathBuf),
}

/// File names collected by the `longest_path` prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    /// How many files the user asked for (0 when the count was ≤ 0).
    pub requested: usize,
    pub files: Vec<PathBuf>,
    /// Slots left empty because input ended early.
    pub missing: usize,
}

/// Line-oriented prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line without its terminator; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| InfrastructureError::StdinRead { source })?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_terminator(&line).to_owned()))
    }

    /// Menu: `1` types text, `2` names a file.
    pub fn word_source(&mut self) -> Result<WordSource> {
        writeln!(self.output, "===== WORD COUNT SYSTEM =====")?;
        writeln!(self.output, "1. Type text manually")?;
        writeln!(self.output, "2. Upload a text file")?;

        let choice = self.ask("Choose option: ")?.unwrap_or_default();
        let parsed = choice.trim().parse::<i64>();
        match parsed {
            Ok(1) => {
                let text = self.ask("\nType your text below:\n")?.unwrap_or_default();
                Ok(WordSource::Text(text))
            }
            Ok(2) => {
                let name = self.ask("Enter filename: ")?.ok_or_else(|| {
                    PresentationError::UnexpectedEof { expected: "a filename".to_string() }
                })?;
                Ok(WordSource::File(PathBuf::from(name.trim())))
            }
            _ => Err(PresentationError::InvalidMenuChoice { input: choice }.into()),
        }
    }

    /// Ask for a file count, then for each file name in turn.
    pub fn file_list(&mut self) -> Result<FileList> {
        writeln!(self.output, "LONGEST PATH SYSTEM")?;

        let raw = self.ask("Enter number of input files: ")?.unwrap_or_default();
        let count: i64 = raw
            .trim()
            .parse()
            .map_err(|_| PresentationError::InvalidNumber { input: raw.clone() })?;
        let Ok(requested) = usize::try_from(count) else {
            return Ok(FileList::default());
        };

        let mut list = FileList { requested, ..FileList::default() };
        for index in 1..=requested {
            match self.ask(&format!("Enter file {index} name: "))? {
                Some(name) => list.files.push(PathBuf::from(name)),
                None => {
                    // Nothing more will arrive; every remaining slot is empty.
                    list.missing = requested - index + 1;
                    break;
                }
            }
        }
        Ok(list)
    }
}
