pub mod longest;
pub mod tally;
pub mod token;

pub use longest::{LongestLines, Observation, strip_line_terminator};
pub use tally::{TokenEntry, TokenTally};
pub use token::Token;
