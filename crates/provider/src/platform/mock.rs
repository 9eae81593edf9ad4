//! # テスト用モックプラットフォーム
//!
//! 実機のプロパティストア・パッケージレジストリが利用できない環境で使用する
//! メモリ内実装。読み取り失敗の再現と読み取り回数の記録ができる。

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use pixelnfc_types::SigningInfo;

use super::{PlatformError, PropertyReader, SigningInfoResolver};

/// メモリ内プロパティストア。
#[derive(Default)]
pub struct MockProperties {
    values: HashMap<String, String>,
    fail: bool,
    reads: AtomicUsize,
}

impl MockProperties {
    /// 空のプロパティストアを作成する。
    pub fn new() -> Self {
        Self::default()
    }

    /// プロパティを設定する。
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// 全ての読み取りを失敗させるストアを作成する。
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// これまでの読み取り回数。
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl PropertyReader for MockProperties {
    fn get(&self, key: &str) -> Result<Option<String>, PlatformError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(PlatformError::Io {
                path: "mock".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock failure"),
            });
        }
        Ok(self.values.get(key).cloned())
    }
}

/// メモリ内パッケージレジストリ。
#[derive(Default)]
pub struct MockRegistry {
    packages: Vec<(String, u32, SigningInfo)>,
    fail: bool,
}

impl MockRegistry {
    /// 空のレジストリを作成する。
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在の署名証明書のみを持つパッケージを登録する。
    pub fn with_package(self, name: &str, uid: u32, signers: Vec<Vec<u8>>) -> Self {
        self.with_signing_info(
            name,
            uid,
            SigningInfo {
                apk_contents_signers: signers,
                signing_certificate_history: Vec::new(),
            },
        )
    }

    /// 署名情報を指定してパッケージを登録する。
    pub fn with_signing_info(mut self, name: &str, uid: u32, info: SigningInfo) -> Self {
        self.packages.push((name.to_string(), uid, info));
        self
    }

    /// 全ての読み取りを失敗させるレジストリを作成する。
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), PlatformError> {
        if self.fail {
            return Err(PlatformError::Io {
                path: "mock".to_string(),
                source: std::io::Error::other("mock failure"),
            });
        }
        Ok(())
    }
}

impl SigningInfoResolver for MockRegistry {
    fn signing_info(&self, package: &str) -> Result<SigningInfo, PlatformError> {
        self.check()?;
        self.packages
            .iter()
            .find(|(name, _, _)| name == package)
            .map(|(_, _, info)| info.clone())
            .ok_or_else(|| PlatformError::PackageNotFound(package.to_string()))
    }

    fn packages_for_uid(&self, uid: u32) -> Result<Vec<String>, PlatformError> {
        self.check()?;
        Ok(self
            .packages
            .iter()
            .filter(|(_, u, _)| *u == uid)
            .map(|(name, _, _)| name.clone())
            .collect())
    }
}
