// crates/domain/src/model/tally.rs
use hashbrown::HashMap;
use serde::{Serialize, Serializer};
use text_tally_shared_kernel::TokenCount;

use crate::model::Token;
use crate::tokenize::Tokenizer;

/// One row of a tally: a token and how often it was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenEntry {
    pub token: Token,
    pub count: TokenCount,
}

/// Token occurrence counts in first-seen order.
///
/// `index` maps each token to its position in `entries`, so lookups stay
/// O(1) while iteration order is the order of first sighting.
#[derive(Debug, Clone, Default)]
pub struct TokenTally {
    entries: Vec<TokenEntry>,
    index: HashMap<Token, usize>,
}

impl TokenTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `text` and tally every token.
    pub fn from_text(text: &str, tokenizer: &Tokenizer) -> Self {
        let mut tally = Self::new();
        tally.extend(tokenizer.tokens(text));
        tally
    }

    /// Count one sighting of `token`.
    pub fn record(&mut self, token: Token) {
        if let Some(&pos) = self.index.get(&token) {
            self.entries[pos].count.increment();
            return;
        }

        let pos = self.entries.len();
        self.index.insert(token.clone(), pos);
        self.entries.push(TokenEntry { token, count: TokenCount::one() });
    }

    pub fn entries(&self) -> &[TokenEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, token: &str) -> Option<TokenCount> {
        self.index.get(token).map(|&pos| self.entries[pos].count)
    }

    /// Total number of tokens recorded (sum of all counts).
    pub fn total(&self) -> TokenCount {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn into_entries(self) -> Vec<TokenEntry> {
        self.entries
    }
}

impl Extend<Token> for TokenTally {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        for token in iter {
            self.record(token);
        }
    }
}

impl FromIterator<Token> for TokenTally {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut tally = Self::new();
        tally.extend(iter);
        tally
    }
}

impl<'a> IntoIterator for &'a TokenTally {
    type Item = &'a TokenEntry;
    type IntoIter = std::slice::Iter<'a, TokenEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for TokenTally {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for TokenTally {}

impl Serialize for TokenTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}
