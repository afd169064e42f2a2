// crates/domain/src/model/longest.rs
use text_tally_shared_kernel::LineLength;

/// What [`LongestLines::observe`] did with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Empty after stripping the terminator.
    Skipped,
    /// Strictly longer than every line so far; previous holders dropped.
    NewMaximum,
    /// Same length as the current maximum; appended.
    Tied,
    Shorter,
}

/// Every line sharing the greatest length seen so far, in arrival order.
///
/// Invariant: all `lines` have length `max_length`. `max_length` is zero
/// exactly when no non-empty line has been observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongestLines {
    max_length: LineLength,
    lines: Vec<String>,
}

impl LongestLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw line (terminator optional).
    pub fn observe(&mut self, raw: &str) -> Observation {
        let line = strip_line_terminator(raw);
        if line.is_empty() {
            return Observation::Skipped;
        }

        let length = LineLength::of(line);
        if length > self.max_length {
            self.lines.clear();
            self.lines.push(line.to_owned());
            self.max_length = length;
            Observation::NewMaximum
        } else if length == self.max_length {
            self.lines.push(line.to_owned());
            Observation::Tied
        } else {
            Observation::Shorter
        }
    }

    pub fn max_length(&self) -> LineLength {
        self.max_length
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `true` when no non-empty line was ever observed.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_parts(self) -> (LineLength, Vec<String>) {
        (self.max_length, self.lines)
    }
}

impl<'a> Extend<&'a str> for LongestLines {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for line in iter {
            self.observe(line);
        }
    }
}

/// Strip trailing `\n` / `\r` characters and nothing else.
pub fn strip_line_terminator(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}
