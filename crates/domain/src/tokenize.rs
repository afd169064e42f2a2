// crates/domain/src/tokenize.rs
use std::str::FromStr;

use text_tally_shared_kernel::DomainError;

use crate::model::Token;

/// Characters that separate tokens. Runs of them never yield empty tokens.
pub const DELIMITERS: [char; 13] = [
    ' ', ',', '.', '-', '!', '?', ';', ':', '\n', '\t', '"', '(', ')',
];

#[inline]
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Case folding applied to every token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FoldMode {
    /// `A-Z` only; every other character is kept as-is.
    #[default]
    Ascii,
    /// Full Unicode lowercase mapping (may change the token's byte length).
    Unicode,
}

impl FoldMode {
    pub fn fold(self, raw: &str) -> String {
        match self {
            Self::Ascii => raw.to_ascii_lowercase(),
            Self::Unicode => raw.to_lowercase(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Unicode => "unicode",
        }
    }
}

impl FromStr for FoldMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" => Ok(Self::Ascii),
            "unicode" => Ok(Self::Unicode),
            other => Err(DomainError::UnknownFoldMode { value: other.to_string() }),
        }
    }
}

/// Splits text on [`DELIMITERS`] and folds each piece into a [`Token`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    fold: FoldMode,
}

impl Tokenizer {
    pub const fn new(fold: FoldMode) -> Self {
        Self { fold }
    }

    pub const fn fold_mode(&self) -> FoldMode {
        self.fold
    }

    /// Lazily yields normalized tokens of `text` in reading order.
    pub fn tokens<'a>(&self, text: &'a str) -> impl Iterator<Item = Token> + 'a {
        let fold = self.fold;
        text.split(is_delimiter)
            .filter(|piece| !piece.is_empty())
            .map(move |piece| Token::new(fold.fold(piece)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str, fold: FoldMode) -> Vec<String> {
        Tokenizer::new(fold).tokens(text).map(Token::into_string).collect()
    }

    #[test]
    fn splits_on_every_delimiter() {
        let text = "a b,c.d-e!f?g;h:i\nj\tk\"l(m)n";
        let tokens = collect(text, FoldMode::Ascii);
        assert_eq!(
            tokens,
            ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n"]
        );
    }

    #[test]
    fn runs_of_delimiters_yield_no_empty_tokens() {
        let tokens = collect("  ...hello,,,  (world)!!\n\n", FoldMode::Ascii);
        assert_eq!(tokens, ["hello", "world"]);
    }

    #[test]
    fn only_delimiters_yield_nothing() {
        assert!(collect(" ,.-!?;:\n\t\"()", FoldMode::Ascii).is_empty());
        assert!(collect("", FoldMode::Ascii).is_empty());
    }

    #[test]
    fn apostrophes_and_carriage_returns_are_not_delimiters() {
        let tokens = collect("don't stop\r\n", FoldMode::Ascii);
        assert_eq!(tokens, ["don't", "stop\r"]);
    }

    #[test]
    fn ascii_fold_leaves_non_ascii_untouched() {
        let tokens = collect("ÉCOLE École", FoldMode::Ascii);
        assert_eq!(tokens, ["École", "École"]);
    }

    #[test]
    fn unicode_fold_lowercases_non_ascii() {
        let tokens = collect("ÉCOLE École", FoldMode::Unicode);
        assert_eq!(tokens, ["école", "école"]);
    }

    #[test]
    fn fold_mode_parses_case_insensitively() {
        assert_eq!("ASCII".parse::<FoldMode>().unwrap(), FoldMode::Ascii);
        assert_eq!(" unicode ".parse::<FoldMode>().unwrap(), FoldMode::Unicode);
        assert!(matches!(
            "klingon".parse::<FoldMode>(),
            Err(DomainError::UnknownFoldMode { .. })
        ));
    }
}
