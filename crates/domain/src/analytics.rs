pub mod sort;

pub use sort::{SortOrder, TallyKey, TallySort};
