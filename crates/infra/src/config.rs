//! # ストアスコープ設定
//!
//! 宛先追加が参照する設定値の読み出しを抽象化する。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: [`ScopeConfig`] trait でキー → 値の解決を抽象化
//! - **2 つの実装**: 環境変数（[`EnvScopeConfig`]）とインメモリ
//!   （[`InMemoryScopeConfig`]、テスト・組み込みホスト用）
//! - **同期読み出し**: 設定の解決は高速であることを前提に同期 API とする
//!
//! 設定ストアの実体（保存・管理画面）はホスト側の所有物であり、
//! このクレートは読み出ししか行わない。

mod env;
mod memory;

pub use env::EnvScopeConfig;
pub use memory::InMemoryScopeConfig;
use strum::IntoStaticStr;

/// このシステムが読む設定キー
pub mod keys {
    /// 会員注文メールのテンプレート名
    pub const ORDER_TEMPLATE: &str = "sales_email/order/template";
    /// ゲスト注文メールのテンプレート名
    pub const ORDER_GUEST_TEMPLATE: &str = "sales_email/order/guest_template";
    /// 注文メールの BCC 送付先（カンマ区切り）
    pub const ORDER_COPY_TO: &str = "sales_email/order/copy_to";
}

/// 設定スコープ
///
/// 設定キーを解決する文脈。このシステムの読み出しはすべてストア単位。
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ConfigScope {
    /// ストア単位の解決
    Store,
}

/// 設定読み出しトレイト
///
/// キーとスコープから設定値を解決する。未設定は None（エラーではない）。
pub trait ScopeConfig: Send + Sync {
    /// キーに対応する設定値を返す
    fn value(&self, key: &str, scope: ConfigScope) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_scopeは小文字の文字列になる() {
        assert_eq!(ConfigScope::Store.to_string(), "store");
    }

    #[test]
    fn トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EnvScopeConfig>();
        assert_send_sync::<InMemoryScopeConfig>();
    }
}
