//! # GET /query, GET /type
//!
//! 呼び出し元はピアUIDから解決する。

use std::sync::Arc;

use axum::extract::{ConnectInfo, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::{PeerCredentials, UriParams};
use crate::config::ProviderState;
use crate::dispatcher::COLUMN_IS_JAPAN_SKU;
use crate::error::ProviderError;

/// GET /query — クエリを処理する。
///
/// 結果がある場合は 200 + JSON、結果なしは 204 No Content。
pub async fn handle_query(
    State(state): State<Arc<ProviderState>>,
    ConnectInfo(peer): ConnectInfo<PeerCredentials>,
    Query(params): Query<UriParams>,
) -> Result<Response, ProviderError> {
    let uri = params.content_uri()?;
    let caller = state.provider.calling_identity(peer.uid);
    tracing::debug!(
        path = %uri.path(),
        uid = peer.uid,
        pid = peer.pid,
        package = caller.package.as_deref(),
        "クエリ受付"
    );

    match state.provider.query(&uri, &params.query_args(), &caller) {
        Some(result) => {
            tracing::debug!(
                is_japan_sku = result.first_value(COLUMN_IS_JAPAN_SKU),
                "クエリ結果を返却"
            );
            Ok(Json(result).into_response())
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// GET /type — MIMEタイプを返す。このプロバイダは常に 204。
pub async fn handle_type(
    State(state): State<Arc<ProviderState>>,
    Query(params): Query<UriParams>,
) -> Result<Response, ProviderError> {
    let uri = params.content_uri()?;
    match state.provider.get_type(&uri) {
        Some(mime) => Ok(mime.into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
