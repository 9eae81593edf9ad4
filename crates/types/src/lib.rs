//! # PixelNFC 共有型定義
//!
//! Device Info Provider のリクエスト・レスポンス・プラットフォーム情報を
//! Rust構造体として提供する。
//!
//! ## エンコーディング規則
//! - Content URI: `content://<authority>/<path>[?<query>][#<fragment>]`
//! - Base64: パッケージマニフェスト内の署名証明書（DERバイト列）

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Content URI
// ---------------------------------------------------------------------------

/// Content URIのスキーム。
pub const CONTENT_SCHEME: &str = "content";

/// プロバイダへのリクエスト対象を表すContent URI。
///
/// パスは空セグメントを除いたセグメント列として保持する
/// （`/isJapanSku` と `/isJapanSku/` は同一パス）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentUri {
    /// オーソリティ（プロバイダ識別子）
    pub authority: String,
    /// パスセグメント
    pub segments: Vec<String>,
    /// クエリ文字列（`?`以降。プロバイダは解釈しない）
    pub query: Option<String>,
}

impl ContentUri {
    /// 文字列をContent URIとしてパースする。
    ///
    /// フラグメント（`#`以降）は照合に使わないため破棄する。
    /// スキームが`content`でない場合、またはオーソリティが空の場合は`None`。
    pub fn parse(raw: &str) -> Option<Self> {
        let rest = raw.strip_prefix(CONTENT_SCHEME)?.strip_prefix("://")?;
        let rest = rest.split_once('#').map_or(rest, |(head, _)| head);
        let (rest, query) = match rest.split_once('?') {
            Some((head, q)) => (head, Some(q.to_string())),
            None => (rest, None),
        };
        let (authority, path) = match rest.split_once('/') {
            Some((a, p)) => (a, p),
            None => (rest, ""),
        };
        if authority.is_empty() {
            return None;
        }
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Some(Self {
            authority: authority.to_string(),
            segments,
            query,
        })
    }

    /// オーソリティとパスからURIを構築する。
    pub fn new(authority: &str, path: &str) -> Self {
        Self {
            authority: authority.to_string(),
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            query: None,
        }
    }

    /// セグメントを`/`で連結したパス（先頭の`/`なし）。
    pub fn path(&self) -> String {
        self.segments.join("/")
    }
}

impl fmt::Display for ContentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CONTENT_SCHEME}://{}", self.authority)?;
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        if let Some(q) = &self.query {
            write!(f, "?{q}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// リクエスト
// ---------------------------------------------------------------------------

/// queryの補助引数。プロバイダは受け付けるが解釈しない。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryArgs {
    /// 返却カラムの指定
    #[serde(default)]
    pub projection: Option<Vec<String>>,
    /// 絞り込み条件
    #[serde(default)]
    pub selection: Option<String>,
    /// 絞り込み条件のプレースホルダ値
    #[serde(default)]
    pub selection_args: Vec<String>,
    /// ソート順
    #[serde(default)]
    pub sort_order: Option<String>,
}

/// insert/updateで渡されるカラム値。
pub type ContentValues = BTreeMap<String, serde_json::Value>;

/// 呼び出し元の識別情報。
///
/// ホスト側がピア資格情報から解決する。呼び出し元が自己申告することはない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallingIdentity {
    /// ピアのUID（取得できない場合はNone）
    pub uid: Option<u32>,
    /// UIDに対応するパッケージ名（解決できない場合はNone）
    pub package: Option<String>,
}

impl CallingIdentity {
    /// 解決不能な呼び出し元。
    pub fn unknown() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// レスポンス
// ---------------------------------------------------------------------------

/// 表形式のクエリ結果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// カラム名
    pub columns: Vec<String>,
    /// 行データ（各行はカラム順の整数値）
    pub rows: Vec<Vec<i64>>,
}

impl QueryResult {
    /// 指定カラムを持つ空の結果を作成する。
    pub fn with_columns(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// 行を追加する。
    pub fn push_row(&mut self, row: Vec<i64>) {
        self.rows.push(row);
    }

    /// 指定カラムの最初の行の値を返す。
    pub fn first_value(&self, column: &str) -> Option<i64> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows.first()?.get(index).copied()
    }
}

// ---------------------------------------------------------------------------
// パッケージレジストリ
// ---------------------------------------------------------------------------

/// パッケージの署名情報。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigningInfo {
    /// 現在APKに署名している証明書（DERバイト列）
    pub apk_contents_signers: Vec<Vec<u8>>,
    /// 署名鍵ローテーションの履歴（古い順、DERバイト列）
    pub signing_certificate_history: Vec<Vec<u8>>,
}

/// パッケージマニフェストの1エントリ。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageRecord {
    /// パッケージ名
    pub name: String,
    /// パッケージに割り当てられたUID
    pub uid: u32,
    /// Base64エンコードされた現在の署名証明書
    #[serde(default)]
    pub signers: Vec<String>,
    /// Base64エンコードされた署名証明書の履歴
    #[serde(default)]
    pub history: Vec<String>,
}
