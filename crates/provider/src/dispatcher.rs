//! # クエリディスパッチャ
//!
//! Content URIを登録済みパスと照合し、`isJapanSku` クエリに対して
//! SKU判定と呼び出し元検証を行う。
//!
//! ## 操作
//! - `query` — 両方の判定が真の場合のみ `is_japan_sku = 1` の1行を返す。それ以外は結果なし
//! - `get_type` — 常に結果なし
//! - `insert` / `update` / `delete` — 常に `ProviderError::Unsupported`
//!
//! 各呼び出しは状態を持たない。共有するのは読み取り専用のプラットフォーム実装のみ。

use std::sync::Arc;

use pixelnfc_types::{CallingIdentity, ContentUri, ContentValues, QueryArgs, QueryResult};

use crate::caller::{self, ALLOWED_CALLERS};
use crate::error::ProviderError;
use crate::platform::{PropertyReader, SigningInfoResolver};
use crate::sku::{self, JAPAN_SKUS};

/// プロバイダのオーソリティ。
pub const AUTHORITY: &str = "com.google.android.pixelnfc.provider.DeviceInfoContentProvider";

/// Japan SKU クエリのパス。
pub const IS_JAPAN_SKU_PATH: &str = "isJapanSku";

/// Japan SKU クエリのURIコード。
pub const IS_JAPAN_SKU_CODE: u32 = 1;

/// 結果のカラム名。
pub const COLUMN_IS_JAPAN_SKU: &str = "is_japan_sku";

// ---------------------------------------------------------------------------
// URIマッチャー
// ---------------------------------------------------------------------------

/// オーソリティとパスの組をURIコードに対応付ける。
#[derive(Debug, Default, Clone)]
pub struct UriMatcher {
    routes: Vec<(String, Vec<String>, u32)>,
}

impl UriMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// オーソリティとパスにコードを登録する。
    pub fn add_uri(&mut self, authority: &str, path: &str, code: u32) {
        let segments = ContentUri::new(authority, path).segments;
        self.routes.push((authority.to_string(), segments, code));
    }

    /// URIに対応するコードを返す。未登録の場合は`None`。
    pub fn match_uri(&self, uri: &ContentUri) -> Option<u32> {
        self.routes
            .iter()
            .find(|(authority, segments, _)| *authority == uri.authority && *segments == uri.segments)
            .map(|(_, _, code)| *code)
    }
}

// ---------------------------------------------------------------------------
// 信頼アンカー
// ---------------------------------------------------------------------------

/// SKU一覧と信頼済み呼び出し元フィンガープリント。
#[derive(Debug, Clone)]
pub struct TrustAnchors {
    pub skus: Vec<String>,
    pub callers: Vec<String>,
}

impl TrustAnchors {
    /// ビルド時に組み込まれた一覧。
    pub fn built_in() -> Self {
        Self {
            skus: JAPAN_SKUS.iter().map(|s| s.to_string()).collect(),
            callers: ALLOWED_CALLERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// プロバイダ
// ---------------------------------------------------------------------------

/// Device Info Provider。
pub struct DeviceInfoProvider {
    properties: Arc<dyn PropertyReader>,
    registry: Arc<dyn SigningInfoResolver>,
    anchors: TrustAnchors,
    matcher: UriMatcher,
}

impl DeviceInfoProvider {
    /// ビルド時の信頼アンカーでプロバイダを作成する。
    pub fn new(
        properties: Arc<dyn PropertyReader>,
        registry: Arc<dyn SigningInfoResolver>,
    ) -> Self {
        Self::with_anchors(properties, registry, TrustAnchors::built_in())
    }

    /// 信頼アンカーを指定してプロバイダを作成する。
    pub fn with_anchors(
        properties: Arc<dyn PropertyReader>,
        registry: Arc<dyn SigningInfoResolver>,
        anchors: TrustAnchors,
    ) -> Self {
        let mut matcher = UriMatcher::new();
        matcher.add_uri(AUTHORITY, IS_JAPAN_SKU_PATH, IS_JAPAN_SKU_CODE);
        Self {
            properties,
            registry,
            anchors,
            matcher,
        }
    }

    /// プロバイダ起動時のフック。常に`true`。
    pub fn on_create(&self) -> bool {
        tracing::info!(authority = AUTHORITY, "Device Info Providerを初期化しました");
        true
    }

    /// ピアのUIDから呼び出し元を解決する。
    pub fn calling_identity(&self, uid: Option<u32>) -> CallingIdentity {
        caller::resolve_calling_identity(self.registry.as_ref(), uid)
    }

    /// 端末が日本向けSKUかを判定する。
    pub fn is_japan_sku(&self) -> bool {
        sku::is_japan_sku(self.properties.as_ref(), &self.anchors.skus)
    }

    /// 呼び出し元パッケージの署名を検証する。
    pub fn validate_caller(&self, package: Option<&str>) -> bool {
        caller::validate_caller(self.registry.as_ref(), package, &self.anchors.callers)
    }

    /// クエリを処理する。
    ///
    /// `args`は受け付けるが解釈しない。
    /// 結果なし（`None`）は空の結果やエラーとは区別される。
    pub fn query(
        &self,
        uri: &ContentUri,
        _args: &QueryArgs,
        caller: &CallingIdentity,
    ) -> Option<QueryResult> {
        if self.matcher.match_uri(uri) != Some(IS_JAPAN_SKU_CODE) {
            tracing::debug!(%uri, "未登録のURI");
            return None;
        }

        // SKU判定は1回だけ行い、ガードと結果の両方に使う
        let japan_sku = self.is_japan_sku();
        if !japan_sku || !self.validate_caller(caller.package.as_deref()) {
            return None;
        }

        let mut result = QueryResult::with_columns(&[COLUMN_IS_JAPAN_SKU]);
        result.push_row(vec![i64::from(japan_sku)]);
        Some(result)
    }

    /// MIMEタイプを返す。常に`None`。
    pub fn get_type(&self, _uri: &ContentUri) -> Option<String> {
        None
    }

    /// 未サポート。
    pub fn insert(
        &self,
        _uri: &ContentUri,
        _values: &ContentValues,
    ) -> Result<ContentUri, ProviderError> {
        Err(ProviderError::Unsupported)
    }

    /// 未サポート。
    pub fn update(
        &self,
        _uri: &ContentUri,
        _values: &ContentValues,
        _selection: Option<&str>,
        _selection_args: &[String],
    ) -> Result<usize, ProviderError> {
        Err(ProviderError::Unsupported)
    }

    /// 未サポート。
    pub fn delete(
        &self,
        _uri: &ContentUri,
        _selection: Option<&str>,
        _selection_args: &[String],
    ) -> Result<usize, ProviderError> {
        Err(ProviderError::Unsupported)
    }
}
