//! # JSONパッケージマニフェスト
//!
//! インストール済みパッケージの名前・UID・署名証明書を記述したJSONファイルを
//! パッケージレジストリとして扱う。呼び出しごとにファイルを読み直す。
//!
//! ```json
//! [
//!   { "name": "com.example.app", "uid": 10123,
//!     "signers": ["<Base64 DER>"], "history": ["<Base64 DER>"] }
//! ]
//! ```

use std::path::PathBuf;

use base64::Engine;
use pixelnfc_types::{PackageRecord, SigningInfo};

use super::{PlatformError, SigningInfoResolver};

/// Base64エンジン（Standard）
fn b64() -> base64::engine::GeneralPurpose {
    base64::engine::general_purpose::STANDARD
}

/// JSONマニフェストを読み取るパッケージレジストリ。
pub struct ManifestRegistry {
    path: PathBuf,
}

impl ManifestRegistry {
    /// 新しいManifestRegistryを作成する。
    ///
    /// # 引数
    /// - `path`: パッケージマニフェスト（JSON配列）のパス
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Vec<PackageRecord>, PlatformError> {
        let bytes = std::fs::read(&self.path).map_err(|source| PlatformError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Base64エンコードされた証明書列をデコードする。
fn decode_certificates(package: &str, encoded: &[String]) -> Result<Vec<Vec<u8>>, PlatformError> {
    encoded
        .iter()
        .map(|c| {
            b64().decode(c).map_err(|source| PlatformError::Certificate {
                package: package.to_string(),
                source,
            })
        })
        .collect()
}

impl SigningInfoResolver for ManifestRegistry {
    fn signing_info(&self, package: &str) -> Result<SigningInfo, PlatformError> {
        let record = self
            .load()?
            .into_iter()
            .find(|r| r.name == package)
            .ok_or_else(|| PlatformError::PackageNotFound(package.to_string()))?;

        Ok(SigningInfo {
            apk_contents_signers: decode_certificates(&record.name, &record.signers)?,
            signing_certificate_history: decode_certificates(&record.name, &record.history)?,
        })
    }

    fn packages_for_uid(&self, uid: u32) -> Result<Vec<String>, PlatformError> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|r| r.uid == uid)
            .map(|r| r.name)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// テスト用マニフェストを一時ディレクトリに書き出す
    fn write_manifest(name: &str, json: &serde_json::Value) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "pixelnfc-test-{name}-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, serde_json::to_vec(json).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_signing_info_decodes_certificates() {
        let path = write_manifest(
            "signing-info",
            &serde_json::json!([
                {
                    "name": "com.example.wallet",
                    "uid": 10123,
                    "signers": [b64().encode(b"current-cert")],
                    "history": [b64().encode(b"old-cert"), b64().encode(b"current-cert")]
                }
            ]),
        );
        let registry = ManifestRegistry::new(&path);

        let info = registry.signing_info("com.example.wallet").unwrap();
        assert_eq!(info.apk_contents_signers, vec![b"current-cert".to_vec()]);
        assert_eq!(info.signing_certificate_history.len(), 2);
        assert_eq!(info.signing_certificate_history[0], b"old-cert".to_vec());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unknown_package() {
        let path = write_manifest("unknown", &serde_json::json!([]));
        let registry = ManifestRegistry::new(&path);

        let err = registry.signing_info("com.example.missing").unwrap_err();
        assert!(matches!(err, PlatformError::PackageNotFound(p) if p == "com.example.missing"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_base64() {
        let path = write_manifest(
            "bad-b64",
            &serde_json::json!([{ "name": "com.example.bad", "uid": 10001, "signers": ["***"] }]),
        );
        let registry = ManifestRegistry::new(&path);

        let err = registry.signing_info("com.example.bad").unwrap_err();
        assert!(matches!(err, PlatformError::Certificate { .. }));

        std::fs::remove_file(&path).unwrap();
    }

    /// 共有UIDの場合は登録順で全パッケージが返る
    #[test]
    fn test_packages_for_uid() {
        let path = write_manifest(
            "uid",
            &serde_json::json!([
                { "name": "com.example.a", "uid": 10001 },
                { "name": "com.example.b", "uid": 10002 },
                { "name": "com.example.c", "uid": 10001 }
            ]),
        );
        let registry = ManifestRegistry::new(&path);

        assert_eq!(
            registry.packages_for_uid(10001).unwrap(),
            vec!["com.example.a", "com.example.c"]
        );
        assert!(registry.packages_for_uid(99999).unwrap().is_empty());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_malformed_manifest() {
        let path = std::env::temp_dir().join(format!(
            "pixelnfc-test-malformed-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, b"{not json").unwrap();
        let registry = ManifestRegistry::new(&path);

        assert!(matches!(
            registry.packages_for_uid(10001),
            Err(PlatformError::Manifest(_))
        ));

        std::fs::remove_file(&path).unwrap();
    }
}
