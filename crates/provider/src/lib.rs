//! # PixelNFC Device Info Provider
//!
//! 端末が日本向けSKUかを、署名検証済みの呼び出し元にのみ回答するプロバイダ。
//!
//! ## 構成
//! - `sku` — システムプロパティによるSKU判定
//! - `caller` — 呼び出し元パッケージの署名証明書フィンガープリント検証
//! - `dispatcher` — Content URIの照合とクエリ処理
//! - `platform` — プロパティストア・パッケージレジストリの抽象化
//! - `endpoints` — Unixドメインソケット上のHTTPインターフェース

pub mod caller;
pub mod config;
pub mod dispatcher;
pub mod endpoints;
pub mod error;
pub mod platform;
pub mod sku;

pub use dispatcher::DeviceInfoProvider;
pub use error::ProviderError;
