//! # MailCC
//!
//! ストアフロントの取引メール組み立てに割り込み、送信直前に CC/BCC 宛先を
//! 追加するプラグイン。
//!
//! - CC: 注文した顧客の `email_cc` カスタム属性（カンマ区切り）
//! - BCC: ストアスコープ設定 `sales_email/order/copy_to`（カンマ区切り）
//!
//! 追加の対象は注文メールのみ。捕捉したテンプレート識別子が、設定された
//! 会員注文テンプレート名またはゲスト注文テンプレート名と一致したときだけ
//! 宛先を追加する。
//!
//! ## 設計方針
//!
//! - **送信を失敗させない**: 宛先追加のどの段階で失敗しても、エラーは
//!   ログに記録して握りつぶす。メール送信は必ず続行される
//! - **呼び出しごとのコンテキスト**: ライフサイクルフックで捕捉した状態は
//!   [`EmailBuildContext`] に閉じ込め、メール 1 通ごとに作り直す
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use mailcc::{EmailBuildContext, InMemoryScopeConfig, RecipientAugmenter, TemplateVars, keys};
//!
//! // ホストのライフサイクル: 識別子 → 変数 → 送信直前の宛先追加
//! let mut ctx = EmailBuildContext::new();
//! ctx.capture_template_id("sales_email_order_template");
//! ctx.capture_template_vars(&vars);
//!
//! let augmenter = RecipientAugmenter::new(config, customers);
//! augmenter.augment_transport(&ctx, &mut transport).await;
//! ```

pub mod augmenter;

pub use augmenter::RecipientAugmenter;
pub use mailcc_domain::{
    DomainError,
    customer::{Customer, CustomerAttributes, CustomerId, EMAIL_CC_ATTRIBUTE, Email},
    order::OrderRef,
    recipient::CopyToList,
    template::{EmailBuildContext, ORDER_VAR, TemplateId, TemplateVars},
};
pub use mailcc_infra::{
    InfraError,
    config::{ConfigScope, EnvScopeConfig, InMemoryScopeConfig, ScopeConfig, keys},
    repository::CustomerRepository,
    transport::{LettreMessageBuilder, MailTransportBuilder},
};
