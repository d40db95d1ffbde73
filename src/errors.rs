//! エラー型の定義
//!
//! このモジュールは、sudachi-tokenizeで使用されるすべてのエラー型を定義します。

use std::error::Error;
use std::fmt::{self, Debug};
use std::path::PathBuf;

/// sudachi-tokenize専用のResult型
///
/// エラー型としてデフォルトで[`TokenizeError`]を使用します。
pub type Result<T, E = TokenizeError> = std::result::Result<T, E>;

/// sudachi-tokenizeのエラー型
///
/// このクレートで発生する可能性のあるすべてのエラーを表現します。
/// 見つからないシステム辞書だけが[`DictionaryNotFound`](Self::DictionaryNotFound)として
/// 特別扱いされ、それ以外のバリアントはそのままプロセス境界まで伝播します。
#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    /// システム辞書が見つからないエラー
    ///
    /// [`DictionaryNotFoundError`]のエラーバリアント。
    #[error(transparent)]
    DictionaryNotFound(#[from] DictionaryNotFoundError),

    /// Sudachi設定ファイルのエラー
    ///
    /// [`ConfigError`](sudachi::config::ConfigError)のエラーバリアント。
    #[error(transparent)]
    Config(#[from] sudachi::config::ConfigError),

    /// Sudachiの内部エラー
    ///
    /// 辞書の読み込みや形態素解析で発生する
    /// [`SudachiError`](sudachi::prelude::SudachiError)のエラーバリアント。
    #[error(transparent)]
    Sudachi(#[from] sudachi::prelude::SudachiError),

    /// JSONシリアライズエラー
    ///
    /// [`serde_json::Error`]のエラーバリアント。
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// ダウンロードエラー
    ///
    /// [`DownloadError`]のエラーバリアント。
    /// `download`フィーチャーが有効な場合のみ利用可能です。
    #[cfg(feature = "download")]
    #[error(transparent)]
    Download(#[from] DownloadError),
}

/// 利用可能なシステム辞書が見つからない場合に使用されるエラー
///
/// ユーザーが対処できるよう、探索したパスと入手方法を含むメッセージを表示します。
#[derive(Debug)]
pub struct DictionaryNotFoundError {
    /// 探索したパスの一覧
    pub(crate) searched: Vec<PathBuf>,
}

impl DictionaryNotFoundError {
    pub(crate) fn new(searched: Vec<PathBuf>) -> Self {
        Self { searched }
    }
}

impl fmt::Display for DictionaryNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "No Sudachi system dictionary was found.")?;
        if !self.searched.is_empty() {
            writeln!(f, "Searched locations:")?;
            for path in &self.searched {
                writeln!(f, "  {}", path.display())?;
            }
        }
        write!(f, "Specify one with --dict or --config")?;
        #[cfg(feature = "download")]
        write!(f, ", or download SudachiDict with `sudachi-tokenize setup`")?;
        write!(f, ".")
    }
}

impl Error for DictionaryNotFoundError {}

/// ダウンロード関連のエラー
///
/// `download`フィーチャーが有効な場合のみ利用可能です。
/// 辞書ファイルのダウンロード中に発生する可能性のあるエラーを表現します。
#[cfg(feature = "download")]
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// ネットワークリクエストの失敗
    #[error("Network request failed")]
    Request(#[from] reqwest::Error),

    /// I/Oエラー
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// zipアーカイブの読み取りエラー
    #[error("Zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// HTTPステータスエラー
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// アーカイブ内に辞書ファイルが存在しない
    #[error("No dictionary entry was found in the downloaded archive.")]
    DictEntryNotFound,

    /// 保存先ディレクトリを決定できない
    #[error("Could not determine a directory to save the dictionary. Pass --dest explicitly.")]
    NoDestDir,

    /// パスの永続化エラー
    #[error(transparent)]
    PathPersist(#[from] tempfile::PersistError),
}
