use clap::ValueEnum;
use text_tally_domain::FoldMode;
use text_tally_domain::analytics::TallyKey;

use crate::presentation::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliFoldMode {
    /// A-Z のみ小文字化
    Ascii,
    /// Unicode の小文字化規則を適用
    Unicode,
}

impl From<CliFoldMode> for FoldMode {
    fn from(value: CliFoldMode) -> Self {
        match value {
            CliFoldMode::Ascii => FoldMode::Ascii,
            CliFoldMode::Unicode => FoldMode::Unicode,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CliSortKey {
    /// 初出順
    FirstSeen,
    /// 出現回数の多い順
    Count,
    /// 語の辞書順
    Token,
}

impl From<CliSortKey> for TallyKey {
    fn from(value: CliSortKey) -> Self {
        match value {
            CliSortKey::FirstSeen => TallyKey::FirstSeen,
            CliSortKey::Count => TallyKey::Count,
            CliSortKey::Token => TallyKey::Token,
        }
    }
}
