//! # 呼び出し元検証
//!
//! 呼び出し元パッケージの署名証明書のSHA-256フィンガープリントが、
//! 信頼済みフィンガープリント一覧に含まれるかを検証する。
//!
//! 現在の署名証明書（`apk_contents_signers`）を全て検査し、いずれかが一致すれば受理する。
//! 署名鍵ローテーション履歴は取得するが信頼の根拠にはしない。

use pixelnfc_crypto::certificate_fingerprint;
use pixelnfc_types::CallingIdentity;

use crate::platform::SigningInfoResolver;

/// 信頼済み呼び出し元の署名証明書フィンガープリント（大文字16進数）。
pub const ALLOWED_CALLERS: &[&str] =
    &["BE51DBF4FEC89BD32846457B13B7300876AF5594D2874DEE026904965AE4A6CB"];

/// 呼び出し元パッケージの署名を検証する。
///
/// パッケージ解決や署名情報取得の失敗はエラーログを出して`false`を返す。
/// 呼び出し側に失敗を伝播しない。
pub fn validate_caller<S: AsRef<str>>(
    resolver: &dyn SigningInfoResolver,
    package: Option<&str>,
    allowed: &[S],
) -> bool {
    let Some(package) = package else {
        tracing::error!("呼び出し元の検証に失敗: パッケージ名を解決できません");
        return false;
    };

    let info = match resolver.signing_info(package) {
        Ok(info) => info,
        Err(e) => {
            tracing::error!(package, "呼び出し元の検証に失敗: {}", e);
            return false;
        }
    };

    let valid = info
        .apk_contents_signers
        .iter()
        .map(|cert| certificate_fingerprint(cert))
        .any(|fp| allowed.iter().any(|a| a.as_ref() == fp));

    if valid {
        tracing::warn!(package, "有効な呼び出し元");
    } else {
        tracing::warn!(
            package,
            signers = info.apk_contents_signers.len(),
            "呼び出し元を検証できません"
        );
    }
    valid
}

/// ピアのUIDから呼び出し元の識別情報を解決する。
///
/// UIDに複数のパッケージが割り当てられている場合は最初のパッケージを採用する。
/// 解決できない場合は`package`が`None`になる。
pub fn resolve_calling_identity(resolver: &dyn SigningInfoResolver, uid: Option<u32>) -> CallingIdentity {
    let Some(uid) = uid else {
        return CallingIdentity::unknown();
    };

    let package = match resolver.packages_for_uid(uid) {
        Ok(packages) => packages.into_iter().next(),
        Err(e) => {
            tracing::warn!(uid, "UIDからパッケージを解決できません: {}", e);
            None
        }
    };

    CallingIdentity {
        uid: Some(uid),
        package,
    }
}
