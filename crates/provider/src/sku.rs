//! # SKU判定
//!
//! システムプロパティ `ro.boot.hardware.sku` を読み取り、
//! 日本向けSKU一覧に含まれるかを判定する。
//!
//! 一覧はビルド時に固定される。新機種の追加はリリースで行う
//! （未登録の新機種は`false`になる）。

use crate::platform::PropertyReader;

/// ハードウェアSKUのプロパティキー。
pub const SKU_PROPERTY: &str = "ro.boot.hardware.sku";

/// 日本向けSKU一覧（アプリ配布版）。
#[cfg(not(feature = "system-image"))]
pub const JAPAN_SKUS: &[&str] = &[
    "G020D", // Pixel 3a XL
    "G020N", // Pixel 4
    "G020N", // Pixel 4 XL
    "G025M", // Pixel 4a
    "G025H", // Pixel 4a 5G
    "G5NZ6", // Pixel 5
    "G4S1M", // Pixel 5a
    "GR1YH", // Pixel 6
    "GF5KQ", // Pixel 6 Pro
    "GB17L", // Pixel 6a
    "GO3Z5", // Pixel 7
    "GFE4J", // Pixel 7 Pro
];

/// 日本向けSKU一覧（プラットフォームイメージ同梱版）。
#[cfg(feature = "system-image")]
pub const JAPAN_SKUS: &[&str] = &[
    "G020N", // Pixel 4
    "G020Q", // Pixel 4 XL
    "G025M", // Pixel 4a
    "G025H", // Pixel 4a 5G
    "G5NZ6", // Pixel 5
    "G4S1M", // Pixel 5a
    "GR1YH", // Pixel 6
    "GF5KQ", // Pixel 6 Pro
    "GPQ72", // 未発表機種
    "GB17L", // Pixel 6a
    "GO3Z5", // Pixel 7
    "GFE4J", // Pixel 7 Pro
    "G82U8", // 未発表機種
    "G0B96", // 未発表機種
];

/// 端末が日本向けSKUかを判定する。
///
/// プロパティ未定義は空文字列として扱う。読み取り失敗は`false`に倒す。
pub fn is_japan_sku<S: AsRef<str>>(properties: &dyn PropertyReader, skus: &[S]) -> bool {
    match properties.get(SKU_PROPERTY) {
        Ok(value) => {
            let system_sku = value.unwrap_or_default();
            tracing::info!("SKU: {}", system_sku);
            // 大文字小文字を区別した完全一致
            skus.iter().any(|s| s.as_ref() == system_sku)
        }
        Err(e) => {
            tracing::warn!("システムSKUの取得に失敗: {}", e);
            false
        }
    }
}
