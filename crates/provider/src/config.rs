//! # プロバイダ設定・共有状態
//!
//! 環境変数からの設定読み込みとホストの共有状態の定義。
//! 信頼アンカー（SKU一覧・呼び出し元フィンガープリント）は設定対象外。

use std::path::PathBuf;

use crate::dispatcher::DeviceInfoProvider;

/// Unixソケットパスの環境変数。
pub const ENV_SOCKET: &str = "PIXELNFC_SOCKET";
/// プロパティファイルパスの環境変数。
pub const ENV_PROPERTIES: &str = "PIXELNFC_PROPERTIES";
/// パッケージマニフェストパスの環境変数。
pub const ENV_PACKAGES: &str = "PIXELNFC_PACKAGES";

const DEFAULT_SOCKET: &str = "/run/pixelnfc/deviceinfo.sock";
const DEFAULT_PROPERTIES: &str = "/vendor/build.prop";
const DEFAULT_PACKAGES: &str = "/data/system/pixelnfc-packages.json";

/// ホストの起動設定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// 待ち受けるUnixドメインソケットのパス
    pub socket_path: PathBuf,
    /// `build.prop`形式のプロパティファイル
    pub properties_path: PathBuf,
    /// JSONパッケージマニフェスト
    pub packages_path: PathBuf,
}

impl ProviderConfig {
    /// 環境変数から設定を読み込む。未設定の項目はデフォルト値。
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str, default: &str| {
            PathBuf::from(lookup(key).unwrap_or_else(|| default.to_string()))
        };
        Self {
            socket_path: path(ENV_SOCKET, DEFAULT_SOCKET),
            properties_path: path(ENV_PROPERTIES, DEFAULT_PROPERTIES),
            packages_path: path(ENV_PACKAGES, DEFAULT_PACKAGES),
        }
    }
}

/// ホストの共有状態。
pub struct ProviderState {
    /// クエリディスパッチャ
    pub provider: DeviceInfoProvider,
}
