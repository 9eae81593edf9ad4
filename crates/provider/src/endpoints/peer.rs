//! # ピア資格情報
//!
//! Unixドメインソケット接続のピアUIDを取得する。
//! 呼び出し元パッケージはこのUIDからのみ解決され、リクエスト内容では指定できない。

use axum::extract::connect_info::Connected;
use axum::serve::IncomingStream;
use tokio::net::UnixListener;

/// 接続ごとのピア資格情報。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeerCredentials {
    /// ピアプロセスのUID
    pub uid: Option<u32>,
    /// ピアプロセスのPID（プラットフォームが提供する場合）
    pub pid: Option<i32>,
}

impl Connected<IncomingStream<'_, UnixListener>> for PeerCredentials {
    fn connect_info(stream: IncomingStream<'_, UnixListener>) -> Self {
        match stream.io().peer_cred() {
            Ok(cred) => Self {
                uid: Some(cred.uid()),
                pid: cred.pid(),
            },
            Err(e) => {
                tracing::warn!("ピア資格情報の取得に失敗: {}", e);
                Self::default()
            }
        }
    }
}
