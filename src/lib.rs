//! # sudachi-tokenize
//!
//! 標準入力の日本語テキストをSudachiで形態素解析し、結果を1行のJSON配列として
//! 出力するコマンドラインツールのライブラリ部分です。
//!
//! ## 概要
//!
//! 形態素解析そのもの（辞書形式、分割アルゴリズム、品詞体系）はsudachiクレートに
//! 委ね、このクレートはシステム辞書の解決、解析の呼び出し、固定5フィールドの
//! JSONレコードへの写像だけを担当します。
//!
//! ## 主な機能
//!
//! - **分割モード**: Sudachiの3段階の分割粒度（A/B/C）の選択
//! - **辞書の解決**: 明示パス、設定ファイル、データディレクトリ探索の優先順位付き解決
//! - **JSON出力**: 非ASCII文字をエスケープしない1行のJSON配列
//! - **辞書のダウンロード**: SudachiDictの取得（`download`フィーチャー有効時）
//!
//! ## 使用例
//!
//! ```no_run
//! # fn main() -> Result<(), sudachi_tokenize::TokenizeError> {
//! use sudachi_tokenize::{Analyzer, DictionarySource, SplitMode, record};
//!
//! let source = DictionarySource {
//!     config: None,
//!     dictionary: Some("system_core.dic".into()),
//! };
//! let analyzer = Analyzer::from_source(source)?;
//! let records = analyzer.tokenize("東京都に行く", SplitMode::C)?;
//! println!("{}", record::to_json(&records)?);
//! # Ok(())
//! # }
//! ```

/// 辞書の解決とアナライザ
pub mod analyzer;

/// エラー型の定義
pub mod errors;

/// 辞書のダウンロード機能
///
/// `download`フィーチャーが有効な場合のみ利用可能です。
#[cfg(feature = "download")]
pub mod fetch;

/// 分割モードの定義
pub mod mode;

/// 形態素レコードとJSONシリアライズ
pub mod record;

// Re-exports
pub use analyzer::{Analyzer, DictionarySource, GLOBAL_DATA_DIR, resolve_dictionary};
pub use errors::{Result, TokenizeError};
pub use mode::SplitMode;
pub use record::MorphemeRecord;

/// このクレートのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
