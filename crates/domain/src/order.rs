//! # 注文参照
//!
//! テンプレート変数から捕捉する、外部所有の注文オブジェクトへの参照。
//!
//! ## 設計方針
//!
//! - **寛容なデシリアライズ**: 注文ペイロードの未知フィールドは無視し、
//!   このシステムが必要とする `customer_id` だけを取り出す
//! - **ゲスト注文**: `customer_id` が欠落または 0 の注文はゲスト注文として
//!   扱い、顧客 ID を返さない

use serde::{Deserialize, Serialize};

use crate::customer::CustomerId;

/// 注文参照
///
/// 注文エンティティそのものではなく、宛先解決に必要な情報だけを持つ。
/// 有効期間はメール 1 通の組み立てサイクルに限られる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRef {
    #[serde(default)]
    customer_id: Option<u64>,
}

impl OrderRef {
    /// 会員注文の参照を作成する
    pub fn for_customer(id: CustomerId) -> Self {
        Self {
            customer_id: Some(id.as_u64()),
        }
    }

    /// ゲスト注文の参照を作成する
    pub fn guest() -> Self {
        Self::default()
    }

    /// 注文した顧客の ID を返す
    ///
    /// ゲスト注文（ID 欠落または 0）では None。
    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id.and_then(|id| CustomerId::new(id).ok())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn 会員注文は顧客idを返す() {
        let order = OrderRef::for_customer(CustomerId::new(42).unwrap());
        assert_eq!(order.customer_id().unwrap().as_u64(), 42);
    }

    #[test]
    fn ゲスト注文は顧客idを返さない() {
        assert_eq!(OrderRef::guest().customer_id(), None);
    }

    #[test]
    fn 顧客idが0の注文はゲスト扱いになる() {
        let order: OrderRef = serde_json::from_value(serde_json::json!({
            "customer_id": 0
        }))
        .unwrap();
        assert_eq!(order.customer_id(), None);
    }

    #[test]
    fn 未知フィールドを含む注文ペイロードを読める() {
        let order: OrderRef = serde_json::from_value(serde_json::json!({
            "customer_id": 7,
            "increment_id": "100000042",
            "grand_total": 129.90
        }))
        .unwrap();
        assert_eq!(order.customer_id().unwrap().as_u64(), 7);
    }
}
