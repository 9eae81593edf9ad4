//! # POST /insert, POST /update, POST /delete
//!
//! 書き込み操作は入力に関わらず常に 501 Not Implemented。
//! クエリ文字列のデシリアライズに失敗しても拒否理由は変わらない。

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use pixelnfc_types::{ContentUri, ContentValues};

use super::UriParams;
use crate::config::ProviderState;
use crate::dispatcher::AUTHORITY;
use crate::error::ProviderError;

/// クエリ文字列を解釈できない場合は空のパラメータとして扱う。
fn lenient(params: Result<Query<UriParams>, QueryRejection>) -> UriParams {
    match params {
        Ok(Query(params)) => params,
        Err(e) => {
            tracing::debug!("書き込み要求のクエリを解釈できません: {}", e);
            UriParams::default()
        }
    }
}

/// 書き込み対象のURI。指定がない・不正な場合はプロバイダのルート。
fn write_target(params: &UriParams) -> ContentUri {
    params
        .content_uri()
        .unwrap_or_else(|_| ContentUri::new(AUTHORITY, ""))
}

/// POST /insert
pub async fn handle_insert(
    State(state): State<Arc<ProviderState>>,
    params: Result<Query<UriParams>, QueryRejection>,
) -> Result<StatusCode, ProviderError> {
    let params = lenient(params);
    state
        .provider
        .insert(&write_target(&params), &ContentValues::new())
        .map(|_| StatusCode::CREATED)
}

/// POST /update
pub async fn handle_update(
    State(state): State<Arc<ProviderState>>,
    params: Result<Query<UriParams>, QueryRejection>,
) -> Result<StatusCode, ProviderError> {
    let params = lenient(params);
    state
        .provider
        .update(
            &write_target(&params),
            &ContentValues::new(),
            params.selection.as_deref(),
            &[],
        )
        .map(|_| StatusCode::OK)
}

/// POST /delete
pub async fn handle_delete(
    State(state): State<Arc<ProviderState>>,
    params: Result<Query<UriParams>, QueryRejection>,
) -> Result<StatusCode, ProviderError> {
    let params = lenient(params);
    state
        .provider
        .delete(&write_target(&params), params.selection.as_deref(), &[])
        .map(|_| StatusCode::OK)
}
