//! 環境変数による設定読み出し実装
//!
//! 設定キーのパスを環境変数名に写像して解決する。
//! デプロイ先で設定ストアを持たないホスト向け。

use super::{ConfigScope, ScopeConfig};

/// 環境変数設定読み出し
///
/// `sales_email/order/copy_to` → `SALES_EMAIL_ORDER_COPY_TO` のように、
/// パス区切りをアンダースコアに置き換えた大文字名で解決する。
/// 空文字列の環境変数は未設定として扱う。
#[derive(Debug, Clone, Default)]
pub struct EnvScopeConfig;

impl EnvScopeConfig {
    /// 新しい環境変数設定読み出しを作成する
    pub fn new() -> Self {
        Self
    }

    /// 設定キーを環境変数名に写像する
    fn env_name(key: &str) -> String {
        key.replace(['/', '.', '-'], "_").to_uppercase()
    }
}

impl ScopeConfig for EnvScopeConfig {
    fn value(&self, key: &str, _scope: ConfigScope) -> Option<String> {
        std::env::var(Self::env_name(key))
            .ok()
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::keys;

    #[test]
    fn 設定キーのパスが環境変数名に写像される() {
        assert_eq!(
            EnvScopeConfig::env_name(keys::ORDER_COPY_TO),
            "SALES_EMAIL_ORDER_COPY_TO"
        );
        assert_eq!(
            EnvScopeConfig::env_name(keys::ORDER_GUEST_TEMPLATE),
            "SALES_EMAIL_ORDER_GUEST_TEMPLATE"
        );
    }

    #[test]
    fn 未設定の環境変数はnoneになる() {
        let config = EnvScopeConfig::new();
        assert_eq!(
            config.value("mailcc_test/definitely/unset", ConfigScope::Store),
            None
        );
    }
}
