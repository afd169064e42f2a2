// domain analytics sorting utilities
use std::cmp::Ordering;
use std::str::FromStr;

use text_tally_shared_kernel::DomainError;

use crate::model::TokenEntry;

/// ソート順序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// What a tally is ordered by when presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TallyKey {
    /// Order of first sighting (the tally's own order).
    #[default]
    FirstSeen,
    Count,
    Token,
}

impl TallyKey {
    /// Direction used when the caller does not ask for a reversal:
    /// most frequent first for `Count`, ascending otherwise.
    pub const fn natural_order(self) -> SortOrder {
        match self {
            Self::Count => SortOrder::Descending,
            Self::FirstSeen | Self::Token => SortOrder::Ascending,
        }
    }
}

impl FromStr for TallyKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-seen" | "first" | "seen" => Ok(Self::FirstSeen),
            "count" => Ok(Self::Count),
            "token" | "word" => Ok(Self::Token),
            other => Err(DomainError::UnknownTallyOrder { value: other.to_string() }),
        }
    }
}

/// ソート仕様を表す値オブジェクト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TallySort {
    key: TallyKey,
    order: SortOrder,
}

impl TallySort {
    pub fn new(key: TallyKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// `key` in its natural direction.
    pub fn natural(key: TallyKey) -> Self {
        Self::new(key, key.natural_order())
    }

    pub fn key(&self) -> TallyKey {
        self.key
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Borrow `entries` in presentation order.
    ///
    /// The sort is stable and `entries` is expected in first-seen order, so
    /// equal counts keep their first-seen order.
    pub fn arrange<'a>(&self, entries: &'a [TokenEntry]) -> Vec<&'a TokenEntry> {
        let mut arranged: Vec<&TokenEntry> = entries.iter().collect();
        match (self.key, self.order) {
            (TallyKey::FirstSeen, SortOrder::Ascending) => {}
            (TallyKey::FirstSeen, SortOrder::Descending) => arranged.reverse(),
            (TallyKey::Count, order) => {
                arranged.sort_by(|a, b| order.apply(a.count.cmp(&b.count)));
            }
            (TallyKey::Token, order) => {
                arranged.sort_by(|a, b| order.apply(a.token.cmp(&b.token)));
            }
        }
        arranged
    }
}

impl Default for TallySort {
    fn default() -> Self {
        Self::natural(TallyKey::FirstSeen)
    }
}
