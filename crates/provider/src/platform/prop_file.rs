//! # build.prop プロパティリーダー
//!
//! Android `build.prop` 形式のファイルからシステムプロパティを読み取る。
//!
//! 書式: `key=value`。`#`で始まる行と空行は無視する。
//! 同じキーが複数回定義された場合は最後の定義を採用する。
//! 呼び出しごとにファイルを読み直す（キャッシュしない）。

use std::path::PathBuf;

use super::{PlatformError, PropertyReader};

/// プロパティファイルを読み取るリーダー。
pub struct PropFileReader {
    path: PathBuf,
}

impl PropFileReader {
    /// 新しいPropFileReaderを作成する。
    ///
    /// # 引数
    /// - `path`: `build.prop`形式のファイルパス
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// `build.prop`の内容からキーの値を探す。
fn lookup(contents: &str, key: &str) -> Option<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .filter(|(k, _)| k.trim() == key)
        .map(|(_, v)| v.trim().to_string())
        .last()
}

impl PropertyReader for PropFileReader {
    fn get(&self, key: &str) -> Result<Option<String>, PlatformError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| PlatformError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(lookup(&contents, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# begin build properties
ro.build.id=TQ3A.230805.001

ro.boot.hardware.sku = GFE4J
#ro.boot.hardware.sku=G020N
ro.product.model=Pixel 7 Pro
";

    #[test]
    fn test_lookup_skips_comments_and_trims() {
        assert_eq!(lookup(SAMPLE, "ro.boot.hardware.sku").as_deref(), Some("GFE4J"));
        assert_eq!(lookup(SAMPLE, "ro.product.model").as_deref(), Some("Pixel 7 Pro"));
    }

    #[test]
    fn test_lookup_missing_key() {
        assert_eq!(lookup(SAMPLE, "ro.boot.hardware.revision"), None);
        assert_eq!(lookup("", "ro.boot.hardware.sku"), None);
    }

    /// 後の定義が優先される
    #[test]
    fn test_lookup_last_definition_wins() {
        let contents = "ro.boot.hardware.sku=G020N\nro.boot.hardware.sku=GB17L\n";
        assert_eq!(lookup(contents, "ro.boot.hardware.sku").as_deref(), Some("GB17L"));
    }

    /// 値が空の定義は空文字列として返る
    #[test]
    fn test_lookup_empty_value() {
        assert_eq!(lookup("ro.boot.hardware.sku=\n", "ro.boot.hardware.sku").as_deref(), Some(""));
    }

    /// ファイルは呼び出しごとに読み直される
    #[test]
    fn test_reader_rereads_file() {
        let path = std::env::temp_dir().join(format!("pixelnfc-test-{}.prop", std::process::id()));
        std::fs::write(&path, "ro.boot.hardware.sku=G020N\n").unwrap();
        let reader = PropFileReader::new(&path);
        assert_eq!(reader.get("ro.boot.hardware.sku").unwrap().as_deref(), Some("G020N"));

        std::fs::write(&path, "ro.boot.hardware.sku=GFE4J\n").unwrap();
        assert_eq!(reader.get("ro.boot.hardware.sku").unwrap().as_deref(), Some("GFE4J"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_reader_missing_file() {
        let reader = PropFileReader::new("/nonexistent/pixelnfc/build.prop");
        let err = reader.get("ro.boot.hardware.sku").unwrap_err();
        assert!(matches!(err, PlatformError::Io { .. }));
    }
}
