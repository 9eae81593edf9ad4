//! # PixelNFC 暗号処理
//!
//! 署名証明書のフィンガープリント計算を提供する。
//!
//! ## 暗号アルゴリズム
//! | 用途 | アルゴリズム |
//! |------|------------|
//! | 証明書フィンガープリント | SHA-256 |
//!
//! フィンガープリントは大文字16進数（1バイト2文字、区切りなし）で表現する。

use sha2::{Digest, Sha256};

/// SHA-256ハッシュ計算。
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// 署名証明書のエンコード済みバイト列からフィンガープリントを計算する。
///
/// `SHA-256(cert)` を大文字16進数（64文字）で返す。
pub fn certificate_fingerprint(cert: &[u8]) -> String {
    hex::encode_upper(sha256(cert))
}
