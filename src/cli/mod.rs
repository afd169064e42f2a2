mod args;
mod parsers;
mod value_enum;

pub use args::{LongestPathArgs, WordCountArgs};
pub use value_enum::{CliFoldMode, CliOutputFormat, CliSortKey};
