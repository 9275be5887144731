//! # テンプレート識別子とビルドコンテキスト
//!
//! ホストのメール組み立てライフサイクルから捕捉する状態を定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 備考 |
//! |---|------------|------|
//! | [`TemplateId`] | テンプレート識別子 | どの取引メールを組み立て中かを示す文字列 |
//! | [`TemplateVars`] | テンプレート変数 | 本文レンダリング用の変数マップ |
//! | [`EmailBuildContext`] | ビルドコンテキスト | メール 1 通分の捕捉状態 |
//!
//! ## 設計方針
//!
//! - **呼び出しごとのコンテキスト**: 捕捉した識別子と注文参照はプラグインの
//!   インスタンスフィールドではなく [`EmailBuildContext`] に保持する。
//!   コンテキストはメール 1 通ごとに作り直すため、リクエストをまたいだ
//!   状態の持ち越しが起きない
//! - **フック順序に依存しない**: 捕捉されなかった状態は単に None のままで、
//!   後段では「注文メールではない」「顧客 CC なし」として扱われる

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::order::OrderRef;

/// テンプレート変数のうち注文参照を運ぶキー
pub const ORDER_VAR: &str = "order";

/// テンプレート識別子
///
/// ホストが組み立て中のメールテンプレート名。検証は行わない
/// （設定値との完全一致比較にのみ使用する）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct TemplateId(String);

impl TemplateId {
    /// テンプレート識別子を作成する
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TemplateId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// テンプレート変数
///
/// ホストが本文レンダリングに使う変数マップ。このシステムは
/// [`ORDER_VAR`] キーだけを読む。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateVars(Map<String, Value>);

impl TemplateVars {
    /// 空の変数マップを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 変数を設定する
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// 変数値を取得する
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// `order` 変数を注文参照として解釈する
    ///
    /// キーが無い、または注文として解釈できない場合は None。
    pub fn order(&self) -> Option<OrderRef> {
        self.get(ORDER_VAR)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

impl From<Map<String, Value>> for TemplateVars {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// ビルドコンテキスト
///
/// メール 1 通の組み立てサイクルで捕捉した状態。ホストのライフサイクル
/// フックから順に埋められ、送信直前の宛先追加で参照される。
///
/// # 不変条件
///
/// - 保持するのはテンプレート識別子 1 つと注文参照 1 つまで
/// - 有効期間はメール 1 通の組み立てサイクルに限られる（再利用しない）
#[derive(Debug, Clone, Default)]
pub struct EmailBuildContext {
    template_id: Option<TemplateId>,
    order:       Option<OrderRef>,
}

impl EmailBuildContext {
    /// 空のコンテキストを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// テンプレート識別子を捕捉する
    ///
    /// 検証は行わず、常に上書きする。
    pub fn capture_template_id(&mut self, id: impl Into<TemplateId>) {
        self.template_id = Some(id.into());
    }

    /// テンプレート変数から注文参照を捕捉する
    ///
    /// `order` キーが存在し注文として解釈できる場合のみ差し替える。
    /// それ以外は捕捉済みの状態に触れない（リセットもしない）。
    pub fn capture_template_vars(&mut self, vars: &TemplateVars) {
        if let Some(order) = vars.order() {
            self.order = Some(order);
        }
    }

    /// 捕捉済みのテンプレート識別子を返す
    pub fn template_id(&self) -> Option<&TemplateId> {
        self.template_id.as_ref()
    }

    /// 捕捉済みの注文参照を返す
    pub fn order(&self) -> Option<&OrderRef> {
        self.order.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn vars_with_order(customer_id: u64) -> TemplateVars {
        let mut vars = TemplateVars::new();
        vars.insert(ORDER_VAR, json!({ "customer_id": customer_id }));
        vars
    }

    #[test]
    fn テンプレート識別子は常に上書きされる() {
        let mut ctx = EmailBuildContext::new();
        ctx.capture_template_id("sales_email_order_template");
        ctx.capture_template_id("sales_email_order_guest_template");
        assert_eq!(
            ctx.template_id().unwrap().as_str(),
            "sales_email_order_guest_template"
        );
    }

    #[test]
    fn orderキーがあれば注文参照を捕捉する() {
        let mut ctx = EmailBuildContext::new();
        ctx.capture_template_vars(&vars_with_order(42));
        assert_eq!(ctx.order().unwrap().customer_id().unwrap().as_u64(), 42);
    }

    #[test]
    fn orderキーが無ければ捕捉済みの注文参照を保持する() {
        let mut ctx = EmailBuildContext::new();
        ctx.capture_template_vars(&vars_with_order(42));

        let mut other = TemplateVars::new();
        other.insert("store_name", json!("My Store"));
        ctx.capture_template_vars(&other);

        assert_eq!(ctx.order().unwrap().customer_id().unwrap().as_u64(), 42);
    }

    #[test]
    fn 注文として解釈できないorder値は無視される() {
        let mut ctx = EmailBuildContext::new();
        ctx.capture_template_vars(&vars_with_order(42));

        let mut other = TemplateVars::new();
        other.insert(ORDER_VAR, json!("not-an-order"));
        ctx.capture_template_vars(&other);

        assert_eq!(ctx.order().unwrap().customer_id().unwrap().as_u64(), 42);
    }

    #[test]
    fn 捕捉前のコンテキストは何も返さない() {
        let ctx = EmailBuildContext::new();
        assert!(ctx.template_id().is_none());
        assert!(ctx.order().is_none());
    }
}
