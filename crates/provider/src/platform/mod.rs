//! # プラットフォーム抽象化
//!
//! プロパティストアとパッケージレジストリへの読み取りを抽象化するトレイト。
//! SKU判定と呼び出し元検証はこれらを注入されて動作する。
//!
//! 現在の実装:
//! - `prop_file` — `build.prop`形式のプロパティファイル
//! - `manifest` — JSONパッケージマニフェスト
//! - `mock` — テスト用（メモリ内）

pub mod manifest;
pub mod mock;
pub mod prop_file;

pub use manifest::ManifestRegistry;
pub use prop_file::PropFileReader;

use pixelnfc_types::SigningInfo;

/// プラットフォーム読み取りのエラー型。
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// ファイル読み込みに失敗
    #[error("読み込みに失敗 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// パッケージマニフェストのパースに失敗
    #[error("マニフェストのパースに失敗: {0}")]
    Manifest(#[from] serde_json::Error),
    /// 署名証明書のBase64デコードに失敗
    #[error("署名証明書のデコードに失敗 ({package}): {source}")]
    Certificate {
        package: String,
        #[source]
        source: base64::DecodeError,
    },
    /// 未登録のパッケージ
    #[error("パッケージが見つかりません: {0}")]
    PackageNotFound(String),
}

/// キー・バリュー形式のシステムプロパティを読み取るトレイト。
pub trait PropertyReader: Send + Sync {
    /// キーに対応する値を返す。未定義の場合は`Ok(None)`。
    fn get(&self, key: &str) -> Result<Option<String>, PlatformError>;
}

/// パッケージレジストリから署名情報を解決するトレイト。
pub trait SigningInfoResolver: Send + Sync {
    /// パッケージの署名証明書（履歴を含む）を取得する。
    fn signing_info(&self, package: &str) -> Result<SigningInfo, PlatformError>;

    /// UIDに割り当てられたパッケージ名の一覧を返す（登録順）。
    fn packages_for_uid(&self, uid: u32) -> Result<Vec<String>, PlatformError>;
}
