//! # プロバイダ エラー型
//!
//! 呼び出し側に返すエラー。プラットフォーム読み取りの失敗はここに現れない
//! （SKU判定・呼び出し元検証の内部で`false`に変換される）。

use axum::http::StatusCode;

/// プロバイダエラー型。
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// 未サポートの操作（insert/update/delete）
    #[error("Not supported")]
    Unsupported,
    /// 不正なリクエスト（URI欠落、パース失敗）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),
}

impl axum::response::IntoResponse for ProviderError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ProviderError::Unsupported => StatusCode::NOT_IMPLEMENTED,
            ProviderError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_status_mapping() {
        let response = ProviderError::Unsupported.into_response();
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);

        let response = ProviderError::BadRequest("uri".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unsupported_message() {
        assert_eq!(ProviderError::Unsupported.to_string(), "Not supported");
    }
}
