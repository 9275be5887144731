//! インメモリ設定読み出し実装
//!
//! テストや、設定値を自前で組み立てる組み込みホスト向け。

use std::collections::HashMap;

use super::{ConfigScope, ScopeConfig};

/// インメモリ設定読み出し
///
/// 構築後は読み出し専用。ストアスコープのみを扱うため、
/// キーだけで値を引く。
#[derive(Debug, Clone, Default)]
pub struct InMemoryScopeConfig {
    values: HashMap<String, String>,
}

impl InMemoryScopeConfig {
    /// 空の設定を作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 値を設定してビルダー風に返す
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ScopeConfig for InMemoryScopeConfig {
    fn value(&self, key: &str, _scope: ConfigScope) -> Option<String> {
        self.values.get(key).cloned()
    }
}
