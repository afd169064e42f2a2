// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use text_tally_domain::analytics::{TallyKey, TallySort};
use text_tally_usecase::FailurePolicy;

use super::{
    parsers,
    value_enum::{CliFoldMode, CliOutputFormat, CliSortKey},
};

/// `word_count` の CLI 引数
#[derive(Parser, Debug)]
#[command(
    name = "word_count",
    version = crate::VERSION,
    about = "単語の出現回数を初出順に集計するツール",
    long_about = "単語の出現回数を初出順に集計するツール。\n\
                  --text / --file を省略すると対話メニューで入力方法を選択します。"
)]
pub struct WordCountArgs {
    /// 集計するテキスト
    #[arg(long, conflicts_with = "file", help_heading = "入力")]
    pub text: Option<String>,

    /// 集計するファイル
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub file: Option<PathBuf>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 並び順（count は回数の多い順、同数は初出順）
    #[arg(long, value_enum, default_value = "first-seen", help_heading = "出力")]
    pub sort: CliSortKey,

    /// 並び順を反転
    #[arg(long, help_heading = "出力")]
    pub reverse: bool,

    /// 上位N件のみ表示
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "出力")]
    pub top: Option<usize>,

    /// 大文字小文字の畳み込み方式
    #[arg(long, value_enum, default_value = "ascii", help_heading = "集計")]
    pub fold: CliFoldMode,

    /// ログ詳細度 (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl WordCountArgs {
    pub fn tally_sort(&self) -> TallySort {
        let key = TallyKey::from(self.sort);
        let order = key.natural_order();
        TallySort::new(key, if self.reverse { order.reversed() } else { order })
    }
}

/// `longest_path` の CLI 引数
#[derive(Parser, Debug)]
#[command(
    name = "longest_path",
    version = crate::VERSION,
    about = "複数ファイルから最長の行をすべて表示するツール",
    long_about = "複数ファイルから最長の行をすべて表示するツール。\n\
                  ファイルを省略すると対話モードでファイル数と名前を尋ねます。"
)]
pub struct LongestPathArgs {
    /// 入力ファイル（指定順に走査）
    #[arg(value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 読み込めないファイルがあれば即座に失敗する
    #[arg(long)]
    pub strict: bool,

    /// ログ詳細度 (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl LongestPathArgs {
    pub fn is_interactive(&self) -> bool {
        self.files.is_empty()
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        if self.strict { FailurePolicy::Strict } else { FailurePolicy::SkipAndContinue }
    }
}
