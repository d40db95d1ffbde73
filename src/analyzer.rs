//! 辞書の解決とSudachiトークナイザのラッパー
//!
//! このモジュールは、システム辞書の所在を解決し、ロード済みの辞書に対して
//! 形態素解析を実行する[`Analyzer`]を提供します。辞書そのものの形式や
//! 分割アルゴリズムはすべてSudachi側の実装に委ねます。

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use sudachi::analysis::Tokenize;
use sudachi::analysis::stateless_tokenizer::StatelessTokenizer;
use sudachi::config::Config;
use sudachi::dic::dictionary::JapaneseDictionary;

use crate::errors::{DictionaryNotFoundError, Result};
use crate::mode::SplitMode;
use crate::record::{MorphemeRecord, records_from_list};

/// データディレクトリ内で探索するシステム辞書のファイル名。
///
/// 先頭に近いエントリほど優先されます。coreがSudachiの標準的な辞書です。
pub const DICT_FILE_NAMES: [&str; 3] =
    ["system_core.dic", "system_small.dic", "system_full.dic"];

/// グローバルデータディレクトリのパス。
///
/// ユーザー固有のローカルデータディレクトリ内の`sudachi-tokenize`サブディレクトリを指します。
/// 各プラットフォームでの標準的なデータディレクトリ:
/// - Linux: `$XDG_DATA_HOME/sudachi-tokenize` または `$HOME/.local/share/sudachi-tokenize`
/// - macOS: `$HOME/Library/Application Support/sudachi-tokenize`
/// - Windows: `{FOLDERID_LocalAppData}/sudachi-tokenize`
pub static GLOBAL_DATA_DIR: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    let path = dirs::data_local_dir()?.join("sudachi-tokenize");
    fs::create_dir_all(&path).ok()?;

    Some(path)
});

/// 解決済みのシステム辞書の所在
///
/// [`resolve_dictionary`]が返す値で、`config`と`dictionary`の少なくとも一方はSomeです。
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DictionarySource {
    /// Sudachi設定ファイル（sudachi.json）のパス
    pub config: Option<PathBuf>,

    /// バイナリシステム辞書のパス
    pub dictionary: Option<PathBuf>,
}

/// コマンドラインの指定とデータディレクトリからシステム辞書の所在を解決する
///
/// 解決は次の優先順位で行われます。
///
/// 1. `dictionary`で明示されたパス。存在しないパスは辞書未検出として扱います。
/// 2. `config`で指定された設定ファイル。`systemDict`の解決はSudachiに委ねます。
/// 3. `data_dir`内の[`DICT_FILE_NAMES`]の探索。最初に見つかったものを使用します。
///
/// # 引数
///
/// * `config` - `--config`で指定された設定ファイルのパス
/// * `dictionary` - `--dict`で指定された辞書のパス
/// * `data_dir` - 探索対象のデータディレクトリ
///
/// # エラー
///
/// 利用可能な辞書が見つからない場合は、探索したパスの一覧を含む
/// [`DictionaryNotFoundError`]を返します。
pub fn resolve_dictionary(
    config: Option<PathBuf>,
    dictionary: Option<PathBuf>,
    data_dir: Option<&Path>,
) -> Result<DictionarySource> {
    if let Some(path) = dictionary {
        if !path.is_file() {
            return Err(DictionaryNotFoundError::new(vec![path]).into());
        }
        return Ok(DictionarySource {
            config,
            dictionary: Some(path),
        });
    }

    if config.is_some() {
        return Ok(DictionarySource {
            config,
            dictionary: None,
        });
    }

    let candidates: Vec<PathBuf> = match data_dir {
        Some(dir) => DICT_FILE_NAMES.iter().map(|name| dir.join(name)).collect(),
        None => vec![],
    };
    match candidates.iter().find(|path| path.is_file()) {
        Some(found) => {
            log::debug!("Discovered a system dictionary: {}", found.display());
            Ok(DictionarySource {
                config: None,
                dictionary: Some(found.clone()),
            })
        }
        None => Err(DictionaryNotFoundError::new(candidates).into()),
    }
}

/// ロード済みのSudachi辞書を所有するアナライザ
///
/// 構築時に辞書を一度だけロードし、以降の解析呼び出しで再利用します。
pub struct Analyzer {
    tokenizer: StatelessTokenizer<Arc<JapaneseDictionary>>,
}

impl Analyzer {
    /// 解決済みの辞書の所在からアナライザを構築する
    ///
    /// # 引数
    ///
    /// * `source` - [`resolve_dictionary`]が返した辞書の所在
    ///
    /// # エラー
    ///
    /// 設定ファイルの解釈や辞書のロードに失敗した場合、Sudachiのエラーを
    /// そのまま返します。
    pub fn from_source(source: DictionarySource) -> Result<Self> {
        log::debug!("Loading the system dictionary: {:?}", source);
        let config = Config::new(source.config, None, source.dictionary)?;
        let dict = Arc::new(JapaneseDictionary::from_cfg(&config)?);
        Ok(Self {
            tokenizer: StatelessTokenizer::new(dict),
        })
    }

    /// テキストを形態素解析して出力レコードの列を返す
    ///
    /// 入力全体に対して解析を一度だけ実行します。形態素の境界や品詞体系は
    /// ロードされた辞書とSudachiの実装によって決まります。
    ///
    /// # 引数
    ///
    /// * `text` - 解析対象のテキスト
    /// * `mode` - 分割モード
    ///
    /// # 戻り値
    ///
    /// 出現順を保った[`MorphemeRecord`]のベクター
    pub fn tokenize(&self, text: &str, mode: SplitMode) -> Result<Vec<MorphemeRecord>> {
        let morphemes = self.tokenizer.tokenize(text, mode.into(), false)?;
        Ok(records_from_list(&morphemes))
    }
}
