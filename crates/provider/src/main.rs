//! # PixelNFC Device Info Provider ホスト
//!
//! ## 起動シーケンス
//! 1. 環境変数から設定を読み込む
//! 2. プロパティファイル・パッケージマニフェストのリーダーを構築
//! 3. Unixドメインソケットで待ち受け、ピアUIDを呼び出し元として解決する

use std::sync::Arc;

use pixelnfc_provider::config::{ProviderConfig, ProviderState};
use pixelnfc_provider::endpoints::{self, PeerCredentials};
use pixelnfc_provider::platform::{ManifestRegistry, PropFileReader};
use pixelnfc_provider::DeviceInfoProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ProviderConfig::from_env();
    tracing::info!(
        properties = %config.properties_path.display(),
        packages = %config.packages_path.display(),
        "設定を読み込みました"
    );

    let provider = DeviceInfoProvider::new(
        Arc::new(PropFileReader::new(&config.properties_path)),
        Arc::new(ManifestRegistry::new(&config.packages_path)),
    );
    provider.on_create();

    let app = endpoints::router(Arc::new(ProviderState { provider }));

    // 前回起動時のソケットファイルを削除
    if config.socket_path.exists() {
        std::fs::remove_file(&config.socket_path)?;
    }
    if let Some(parent) = config.socket_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let listener = tokio::net::UnixListener::bind(&config.socket_path)?;
    tracing::info!("Device Info Providerを {} で起動します", config.socket_path.display());

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<PeerCredentials>(),
    )
    .await?;

    Ok(())
}
