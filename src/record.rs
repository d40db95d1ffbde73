//! 形態素レコードの定義とJSONシリアライズ
//!
//! このモジュールは、Sudachiが返す形態素を固定5フィールドの出力レコードへ
//! 写像し、1行のJSON配列として描画する機能を提供します。

use std::sync::Arc;

use serde::Serialize;
use sudachi::dic::dictionary::JapaneseDictionary;
use sudachi::prelude::MorphemeList;

use crate::errors::Result;

/// 形態素1つ分の出力レコード
///
/// JSONオブジェクトのキーはcamelCase表記で、フィールドは常にこの5つです。
/// キーの出現順もフィールドの定義順に固定されます。
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MorphemeRecord {
    /// 表層形（入力テキスト中に現れた文字列そのまま）
    pub surface: String,

    /// 辞書形（活用を戻した基本形）
    pub dictionary_form: String,

    /// 読み（カタカナ表記）
    pub reading: String,

    /// 品詞階層（大分類から活用形までの順序付き文字列列）
    pub part_of_speech: Vec<String>,

    /// 正規化形
    pub normalized_form: String,
}

/// 形態素解析の結果を出力レコードの列へ写像する
///
/// 形態素の出現順をそのまま保ち、結合・削除・並べ替えは行いません。
///
/// # 引数
///
/// * `morphemes` - Sudachiが返した形態素のリスト
///
/// # 戻り値
///
/// 入力テキスト中の出現順を保った[`MorphemeRecord`]のベクター
pub fn records_from_list(
    morphemes: &MorphemeList<Arc<JapaneseDictionary>>,
) -> Vec<MorphemeRecord> {
    morphemes
        .iter()
        .map(|m| MorphemeRecord {
            surface: m.surface().to_string(),
            dictionary_form: m.dictionary_form().to_string(),
            reading: m.reading_form().to_string(),
            part_of_speech: m.part_of_speech().iter().map(String::from).collect(),
            normalized_form: m.normalized_form().to_string(),
        })
        .collect()
}

/// レコード列を1行のJSON配列として描画する
///
/// 非ASCII文字はエスケープせず、リテラルなUTF-8文字として出力します。
/// 空のレコード列は`[]`になります。
///
/// # 引数
///
/// * `records` - 描画対象のレコード列
///
/// # 戻り値
///
/// 改行を含まない1行のJSON文字列
///
/// # 例
///
/// ```
/// # use sudachi_tokenize::record::to_json;
/// assert_eq!(to_json(&[]).unwrap(), "[]");
/// ```
pub fn to_json(records: &[MorphemeRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}
