//! 標準入力のテキストを形態素解析してJSONで出力するユーティリティ
//!
//! このバイナリは、標準入力から読み込んだテキスト全体をSudachiで形態素解析し、
//! 形態素ごとに固定5フィールドのオブジェクトを持つJSON配列を1行で出力します。
//! 前後の空白を取り除いた入力が空の場合は、解析を行わずに`[]`を出力します。

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use sudachi_tokenize::analyzer::{Analyzer, GLOBAL_DATA_DIR, resolve_dictionary};
use sudachi_tokenize::errors::{Result, TokenizeError};
use sudachi_tokenize::mode::SplitMode;
use sudachi_tokenize::record::to_json;

#[cfg(feature = "download")]
use sudachi_tokenize::errors::DownloadError;
#[cfg(feature = "download")]
use sudachi_tokenize::fetch::{DictionaryKind, download_dictionary};

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(
    name = "sudachi-tokenize",
    version,
    about = "Tokenizes Japanese text from stdin into a JSON array of morphemes"
)]
struct Args {
    /// Split mode. Choices are A, B, and C.
    #[clap(short = 'm', long, default_value = "C")]
    mode: SplitMode,

    /// Path to a Sudachi configuration file (sudachi.json).
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// Path to a binary system dictionary. Takes precedence over the
    /// configuration file and the data directory.
    #[clap(short = 'i', long)]
    dict: Option<PathBuf>,

    #[cfg(feature = "download")]
    #[clap(subcommand)]
    command: Option<Command>,
}

/// 利用可能なサブコマンド
#[cfg(feature = "download")]
#[derive(Parser, Debug)]
enum Command {
    /// Downloads a prebuilt SudachiDict system dictionary.
    ///
    /// The dictionary is saved into the application data directory, where
    /// later invocations discover it automatically.
    Setup(SetupArgs),
}

/// `setup`サブコマンドの引数
#[cfg(feature = "download")]
#[derive(Parser, Debug)]
struct SetupArgs {
    /// Dictionary edition to download. Choices are small, core, and full.
    #[clap(short = 'k', long, default_value = "core")]
    kind: DictionaryKind,

    /// Directory to which the dictionary is saved. Defaults to the
    /// application data directory.
    #[clap(short = 'o', long)]
    dest: Option<PathBuf>,
}

/// メイン関数
///
/// 標準入力を形態素解析してJSONを出力します。システム辞書が見つからない
/// 場合だけは診断メッセージを標準エラーに出力して終了コード1で終了し、
/// それ以外のエラーはそのまま伝播させます。
///
/// # 戻り値
///
/// 実行が成功した場合は`Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<(), TokenizeError> {
    env_logger::init();
    let args = Args::parse();

    #[cfg(feature = "download")]
    if let Some(Command::Setup(setup_args)) = args.command {
        return run_setup(setup_args);
    }

    match run_tokenize(args.mode, args.config, args.dict) {
        Err(TokenizeError::DictionaryNotFound(e)) => {
            eprintln!("{e}");
            process::exit(1);
        }
        result => result,
    }
}

/// 標準入力のテキストを解析してJSON配列を1行出力する
///
/// 入力全体を読み込んで前後の空白を取り除き、空であれば辞書の解決を行わずに
/// `[]`を出力して成功終了します。それ以外の場合は辞書を解決してから解析を
/// 一度だけ実行します。
///
/// # 引数
///
/// * `mode` - 分割モード
/// * `config` - `--config`で指定された設定ファイルのパス
/// * `dict` - `--dict`で指定された辞書のパス
fn run_tokenize(
    mode: SplitMode,
    config: Option<PathBuf>,
    dict: Option<PathBuf>,
) -> Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let text = input.trim();

    let out = io::stdout();
    let mut out = BufWriter::new(out.lock());

    if text.is_empty() {
        out.write_all(b"[]\n")?;
        out.flush()?;
        return Ok(());
    }

    let source = resolve_dictionary(config, dict, GLOBAL_DATA_DIR.as_deref())?;
    let analyzer = Analyzer::from_source(source)?;
    let records = analyzer.tokenize(text, mode)?;
    log::debug!("Tokenized {} morphemes in mode {}", records.len(), mode);

    out.write_all(to_json(&records)?.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;

    Ok(())
}

/// SudachiDictをダウンロードしてデータディレクトリに配置する
///
/// # 引数
///
/// * `args` - `setup`サブコマンドの引数
#[cfg(feature = "download")]
fn run_setup(args: SetupArgs) -> Result<()> {
    let dest_dir = match args.dest {
        Some(dir) => dir,
        None => GLOBAL_DATA_DIR.clone().ok_or(DownloadError::NoDestDir)?,
    };

    let dict_path = dest_dir.join(args.kind.file_name());
    if dict_path.is_file() {
        println!("The {} dictionary already exists: {}", args.kind, dict_path.display());
        return Ok(());
    }

    println!("Downloading the {} dictionary...", args.kind);
    let dict_path = download_dictionary(args.kind, &dest_dir)?;
    println!("Successfully saved the dictionary to {}", dict_path.display());

    Ok(())
}
