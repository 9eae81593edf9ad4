//! # プロバイダエンドポイント
//!
//! Unixドメインソケット上で提供するHTTPインターフェース。
//!
//! ## API エンドポイント
//! - `GET /query?uri=<content uri>` — 200 + JSON結果、または 204（結果なし）
//! - `GET /type?uri=<content uri>` — 常に 204
//! - `POST /insert` / `POST /update` / `POST /delete` — 常に 501

pub mod peer;
pub mod query;
pub mod write;


pub use peer::PeerCredentials;
pub use query::{handle_query, handle_type};
pub use write::{handle_delete, handle_insert, handle_update};

use std::sync::Arc;

use pixelnfc_types::{ContentUri, QueryArgs};

use crate::config::ProviderState;
use crate::error::ProviderError;

/// URIを指定するクエリパラメータ。
#[derive(Debug, Default, serde::Deserialize)]
pub struct UriParams {
    /// 対象のContent URI
    pub uri: Option<String>,
    /// カンマ区切りのカラム指定
    pub projection: Option<String>,
    pub selection: Option<String>,
    pub sort_order: Option<String>,
}

impl UriParams {
    /// `uri`パラメータをContent URIとしてパースする。
    pub fn content_uri(&self) -> Result<ContentUri, ProviderError> {
        let raw = self
            .uri
            .as_deref()
            .ok_or_else(|| ProviderError::BadRequest("uriパラメータがありません".to_string()))?;
        ContentUri::parse(raw)
            .ok_or_else(|| ProviderError::BadRequest(format!("不正なContent URI: {raw}")))
    }

    /// クエリ補助引数に変換する。
    pub fn query_args(&self) -> QueryArgs {
        QueryArgs {
            projection: self
                .projection
                .as_ref()
                .map(|p| p.split(',').map(|c| c.trim().to_string()).collect()),
            selection: self.selection.clone(),
            selection_args: Vec::new(),
            sort_order: self.sort_order.clone(),
        }
    }
}

/// ルーターを構築する。
///
/// ハンドラは`ConnectInfo<PeerCredentials>`を要求するため、
/// `into_make_service_with_connect_info::<PeerCredentials>()`で提供すること。
pub fn router(state: Arc<ProviderState>) -> axum::Router {
    axum::Router::new()
        .route("/query", axum::routing::get(handle_query))
        .route("/type", axum::routing::get(handle_type))
        .route("/insert", axum::routing::post(handle_insert))
        .route("/update", axum::routing::post(handle_update))
        .route("/delete", axum::routing::post(handle_delete))
        .with_state(state)
}
