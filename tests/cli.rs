//! sudachi-tokenize CLIの統合テスト
//!
//! システム辞書がない環境でも成立する性質（空入力の短絡、モード検証、
//! 辞書未検出の診断）を検証します。実際の辞書を使った解析は
//! `SUDACHI_TOKENIZE_DICT`環境変数が設定されている場合のみ実行します。

use assert_cmd::Command;

/// 環境を隔離したコマンドを生成するヘルパー
///
/// `XDG_DATA_HOME`を一時ディレクトリへ向け、実行環境にインストール済みの
/// 辞書があってもテスト結果が変わらないようにします。
fn cmd_isolated(data_home: &std::path::Path) -> Command {
    let mut cmd =
        Command::cargo_bin("sudachi-tokenize").expect("Failed to find main binary");
    cmd.env("XDG_DATA_HOME", data_home);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    /// 空の入力では`[]`を出力して成功終了すること
    #[test]
    fn empty_stdin_prints_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let assert = cmd_isolated(dir.path())
            .write_stdin("")
            .assert()
            .success()
            .code(0);

        let output = assert.get_output();
        assert_eq!(String::from_utf8(output.stdout.clone()).unwrap(), "[]\n");
        assert!(output.stderr.is_empty());
    }

    /// 空白のみの入力はトリム後に空として扱われること
    #[test]
    fn whitespace_only_stdin_prints_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let assert = cmd_isolated(dir.path())
            .write_stdin("  \t \n \n")
            .assert()
            .success()
            .code(0);

        let output = assert.get_output();
        assert_eq!(String::from_utf8(output.stdout.clone()).unwrap(), "[]\n");
    }

    /// 改行1文字だけの入力も空として扱われること
    #[test]
    fn single_newline_stdin_prints_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let assert = cmd_isolated(dir.path())
            .write_stdin("\n")
            .assert()
            .success()
            .code(0);

        let output = assert.get_output();
        assert_eq!(String::from_utf8(output.stdout.clone()).unwrap(), "[]\n");
    }

    /// 全角空白（U+3000）もトリム対象であること
    #[test]
    fn ideographic_space_stdin_prints_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let assert = cmd_isolated(dir.path())
            .write_stdin("\u{3000}\u{3000}\n")
            .assert()
            .success()
            .code(0);

        let output = assert.get_output();
        assert_eq!(String::from_utf8(output.stdout.clone()).unwrap(), "[]\n");
    }

    /// 空入力の短絡は辞書の解決より先に起きること
    #[test]
    fn empty_stdin_succeeds_without_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let assert = cmd_isolated(dir.path())
            .args(["--dict", "/no/such/dictionary.dic"])
            .write_stdin("")
            .assert()
            .success()
            .code(0);

        let output = assert.get_output();
        assert_eq!(String::from_utf8(output.stdout.clone()).unwrap(), "[]\n");
    }

    /// 3つの分割モードが大文字・小文字ともに受理されること
    #[test]
    fn all_modes_accepted_on_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        for mode in ["A", "B", "C", "a", "b", "c"] {
            cmd_isolated(dir.path())
                .args(["--mode", mode])
                .write_stdin("")
                .assert()
                .success()
                .code(0);
        }
    }

    /// 無効なモードは拒否されること
    #[test]
    fn invalid_mode_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let assert = cmd_isolated(dir.path())
            .args(["--mode", "D"])
            .write_stdin("東京都に行く")
            .assert()
            .failure()
            .code(2);

        let output = assert.get_output();
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8(output.stderr.clone()).unwrap();
        assert!(stderr.contains("Mode must be one of A, B, and C"));
    }

    /// モードの検証は辞書の解決よりも先であること
    #[test]
    fn invalid_mode_rejected_before_dictionary_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let assert = cmd_isolated(dir.path())
            .args(["--mode", "X", "--dict", "/no/such/dictionary.dic"])
            .write_stdin("東京都に行く")
            .assert()
            .failure();

        let output = assert.get_output();
        let stderr = String::from_utf8(output.stderr.clone()).unwrap();
        assert!(stderr.contains("invalid value"));
        assert!(!stderr.contains("No Sudachi system dictionary was found."));
    }

    /// 明示された辞書パスが存在しない場合の診断と終了コード
    #[test]
    fn missing_explicit_dictionary_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let assert = cmd_isolated(dir.path())
            .args(["--dict", "/no/such/dictionary.dic"])
            .write_stdin("東京都に行く")
            .assert()
            .failure()
            .code(1);

        let output = assert.get_output();
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8(output.stderr.clone()).unwrap();
        assert!(stderr.contains("No Sudachi system dictionary was found."));
        assert!(stderr.contains("/no/such/dictionary.dic"));
    }

    /// データディレクトリに辞書がない場合の診断と終了コード
    #[test]
    fn missing_dictionary_discovery_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let assert = cmd_isolated(dir.path())
            .write_stdin("東京都に行く")
            .assert()
            .failure()
            .code(1);

        let output = assert.get_output();
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8(output.stderr.clone()).unwrap();
        assert!(stderr.contains("No Sudachi system dictionary was found."));
        assert!(stderr.contains("Searched locations:"));
        assert!(stderr.contains("system_core.dic"));
    }

    /// 実際の辞書を使った一連の解析
    ///
    /// 形態素の境界や品詞はSudachi側の辞書が決めるため、境界そのものは
    /// 固定せず、件数・フィールドの形・表層形の連結だけを検証します。
    #[test]
    fn tokenize_with_real_dictionary() {
        let Ok(dict) = std::env::var("SUDACHI_TOKENIZE_DICT") else {
            eprintln!("SUDACHI_TOKENIZE_DICT is not set; skipping");
            return;
        };

        let input = "東京都に行く";
        let dir = tempfile::tempdir().unwrap();
        let assert = cmd_isolated(dir.path())
            .args(["--dict", &dict])
            .write_stdin(input)
            .assert()
            .success()
            .code(0);

        let output = assert.get_output();
        let stdout = String::from_utf8(output.stdout.clone()).unwrap();

        assert!(stdout.ends_with('\n'));
        let line = stdout.trim_end_matches('\n');
        assert!(!line.contains('\n'), "output must be a single line");
        assert!(!line.contains("\\u"), "non-ASCII must not be escaped");

        let value: Value = serde_json::from_str(line).unwrap();
        let array = value.as_array().expect("output must be a JSON array");
        assert!(!array.is_empty());

        let mut concatenated = String::new();
        for element in array {
            let object = element.as_object().expect("element must be an object");
            assert_eq!(object.len(), 5);
            for key in [
                "surface",
                "dictionaryForm",
                "reading",
                "partOfSpeech",
                "normalizedForm",
            ] {
                assert!(object.contains_key(key), "missing key: {key}");
            }
            assert!(object["partOfSpeech"].is_array());
            for tag in object["partOfSpeech"].as_array().unwrap() {
                assert!(tag.is_string());
            }
            concatenated.push_str(object["surface"].as_str().unwrap());
        }
        assert_eq!(concatenated, input);
    }
}
