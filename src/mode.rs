//! 分割モードの定義
//!
//! Sudachiの3段階の分割粒度（A: 細かい、B: 中間、C: 粗い）を表す型を提供します。

use std::fmt;
use std::str::FromStr;

use sudachi::prelude::Mode;

/// 分割モード
///
/// Sudachiの分割粒度を表します。Aが最も細かく、Cが最も粗い分割です。
/// デフォルトはCです。
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SplitMode {
    /// 短い単位に分割するモード
    A,
    /// 中間の単位に分割するモード
    B,
    /// 最も長い単位に分割するモード（デフォルト）
    #[default]
    C,
}

/// `SplitMode` の `FromStr` 実装
impl FromStr for SplitMode {
    type Err = &'static str;

    /// 文字列から分割モードをパースする
    ///
    /// Sudachi本体のCLIと同様に、小文字表記も受け付けます。
    ///
    /// # 引数
    ///
    /// * `mode` - パース対象の文字列（"A"、"B"、"C"のいずれか）
    ///
    /// # 戻り値
    ///
    /// パースに成功した場合は対応する `SplitMode`、失敗した場合はエラーメッセージ
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            "C" | "c" => Ok(Self::C),
            _ => Err("Mode must be one of A, B, and C"),
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

/// Sudachiの[`Mode`]への変換
impl From<SplitMode> for Mode {
    fn from(mode: SplitMode) -> Self {
        match mode {
            SplitMode::A => Mode::A,
            SplitMode::B => Mode::B,
            SplitMode::C => Mode::C,
        }
    }
}
