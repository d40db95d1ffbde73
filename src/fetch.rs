//! SudachiDictのダウンロード機能
//!
//! このモジュールは、WorksApplicationsが公開しているビルド済みの
//! SudachiDictシステム辞書をダウンロードして保存する機能を提供します。

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tempfile::NamedTempFile;
use zip::ZipArchive;

use crate::errors::DownloadError;

/// ダウンロード可能なSudachiDictのエディション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryKind {
    /// 語彙を絞った最小構成の辞書
    Small,
    /// 標準的な語彙を収録した辞書
    Core,
    /// 固有名詞まで広く収録した辞書
    Full,
}

impl DictionaryKind {
    /// 辞書のメタデータを取得します。
    pub(crate) fn meta(&self) -> &'static DictionaryMeta {
        match self {
            Self::Small => &SMALL,
            Self::Core => &CORE,
            Self::Full => &FULL,
        }
    }

    /// エディションの名前を取得します。
    pub fn name(&self) -> &'static str {
        self.meta().name
    }

    /// 保存時のファイル名を取得します。
    ///
    /// [`DICT_FILE_NAMES`](crate::analyzer::DICT_FILE_NAMES)のエントリと一致するため、
    /// ダウンロードした辞書はそのまま探索で発見されます。
    pub fn file_name(&self) -> String {
        format!("system_{}.dic", self.name())
    }
}

/// `DictionaryKind` の `FromStr` 実装
impl FromStr for DictionaryKind {
    type Err = &'static str;

    /// 文字列からエディションをパースする
    ///
    /// # 引数
    ///
    /// * `kind` - パース対象の文字列（"small"、"core"、"full"のいずれか）
    ///
    /// # 戻り値
    ///
    /// パースに成功した場合は対応する `DictionaryKind`、失敗した場合はエラーメッセージ
    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "small" => Ok(Self::Small),
            "core" => Ok(Self::Core),
            "full" => Ok(Self::Full),
            _ => Err("Kind must be one of small, core, and full"),
        }
    }
}

impl fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// プリセット辞書のメタデータ
#[derive(Debug)]
pub(crate) struct DictionaryMeta {
    /// エディション名
    pub(crate) name: &'static str,

    /// ダウンロードURL
    pub(crate) download_url: &'static str,
}

pub(crate) static SMALL: DictionaryMeta = DictionaryMeta {
    name: "small",
    download_url: "https://github.com/WorksApplications/SudachiDict/releases/download/v20250828/sudachi-dictionary-20250825-small.zip",
};

pub(crate) static CORE: DictionaryMeta = DictionaryMeta {
    name: "core",
    download_url: "https://github.com/WorksApplications/SudachiDict/releases/download/v20250828/sudachi-dictionary-20250825-core.zip",
};

pub(crate) static FULL: DictionaryMeta = DictionaryMeta {
    name: "full",
    download_url: "https://github.com/WorksApplications/SudachiDict/releases/download/v20250828/sudachi-dictionary-20250825-full.zip",
};

/// 辞書をダウンロードして指定されたディレクトリに保存します。
///
/// 保存先に同名のファイルが既に存在する場合、ダウンロードは行わず
/// そのパスを返します。ダウンロードした辞書は一時ファイル経由で
/// アトミックに配置されます。
///
/// # 引数
///
/// * `kind` - ダウンロードする辞書のエディション
/// * `dest_dir` - 保存先ディレクトリ
///
/// # 戻り値
///
/// 成功時は保存された辞書ファイルのパスを返します。
///
/// # エラー
///
/// ダウンロードや展開、保存に失敗した場合にエラーを返します。
pub fn download_dictionary<P: AsRef<Path>>(
    kind: DictionaryKind,
    dest_dir: P,
) -> Result<PathBuf, DownloadError> {
    let meta = kind.meta();
    let dest_dir = dest_dir.as_ref();

    let dict_path = dest_dir.join(kind.file_name());
    if dict_path.exists() {
        log::debug!("The dictionary already exists: {}", dict_path.display());
        return Ok(dict_path);
    }

    fs::create_dir_all(dest_dir)?;

    let response = reqwest::blocking::get(meta.download_url)?;
    if !response.status().is_success() {
        return Err(DownloadError::HttpStatus(response.status()));
    }
    let zip_bytes = response.bytes()?;

    let reader = io::Cursor::new(zip_bytes);
    let mut archive = ZipArchive::new(reader)?;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let file_name = file.mangled_name().to_string_lossy().to_string();
        if file_name.ends_with(".dic") {
            let mut temp_file = NamedTempFile::new_in(dest_dir)?;
            io::copy(&mut file, &mut temp_file)?;
            temp_file.persist(&dict_path)?;
            return Ok(dict_path);
        }
    }

    Err(DownloadError::DictEntryNotFound)
}
