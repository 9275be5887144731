//! # 宛先追加サービス
//!
//! 送信直前のトランスポートに CC/BCC 宛先を登録するサービス。
//!
//! ## 設計方針
//!
//! - **fire-and-forget**: [`RecipientAugmenter::augment_transport`] は
//!   失敗してもエラーを返さない。解決ステップは値や `Result` を返し、
//!   握りつぶすかどうかはトップレベルが明示的に決める
//! - **ステートレス**: サービス自体は状態を持たず、メール 1 通分の状態は
//!   [`EmailBuildContext`] から受け取る
//! - **依存性注入**: 設定とリポジトリは trait で抽象化

use std::sync::Arc;

use mailcc_domain::{
    customer::{Customer, CustomerId},
    recipient::CopyToList,
    template::EmailBuildContext,
};
use mailcc_infra::{
    config::{ConfigScope, ScopeConfig, keys},
    error::InfraError,
    repository::CustomerRepository,
    transport::MailTransportBuilder,
};
use mailcc_shared::{
    event_log::{error as error_ctx, event},
    log_business_event,
};

/// 宛先追加サービス
///
/// 注文メールの組み立てに割り込み、顧客の `email_cc` 属性を CC に、
/// `sales_email/order/copy_to` 設定を BCC に登録する。
/// どの段階で失敗しても送信は続行される。
pub struct RecipientAugmenter {
    config:    Arc<dyn ScopeConfig>,
    customers: Arc<dyn CustomerRepository>,
}

impl RecipientAugmenter {
    pub fn new(config: Arc<dyn ScopeConfig>, customers: Arc<dyn CustomerRepository>) -> Self {
        Self { config, customers }
    }

    /// 送信直前のトランスポートに CC/BCC を追加する（fire-and-forget）
    ///
    /// 注文メールでなければ何もしない。宛先の解決・追加のいずれかで
    /// 失敗した場合はエラーログを出して戻り、追加済みの宛先はそのまま
    /// 残る（ロールバックしない）。
    pub async fn augment_transport(
        &self,
        ctx: &EmailBuildContext,
        transport: &mut dyn MailTransportBuilder,
    ) {
        if !self.is_order_email(ctx) {
            tracing::debug!(
                template_id = ctx.template_id().map(|id| id.as_str()),
                "注文メールではないため CC/BCC 追加をスキップ"
            );
            return;
        }

        let cc = self.customer_copy_to(ctx).await;
        let bcc = self.order_copy_to();

        match apply_recipients(transport, &cc, &bcc) {
            Ok((cc_count, bcc_count)) => {
                if cc_count + bcc_count > 0 {
                    log_business_event!(
                        event.category = event::category::MAIL,
                        event.action = event::action::RECIPIENTS_AUGMENTED,
                        event.entity_type = event::entity_type::ORDER,
                        event.result = event::result::SUCCESS,
                        cc_count,
                        bcc_count,
                        "注文メールに CC/BCC を追加"
                    );
                }
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    error.category = error_ctx::category::INFRASTRUCTURE,
                    error.kind = error_ctx::kind::TRANSPORT,
                    "CC/BCC の追加に失敗（送信は続行）"
                );
                log_business_event!(
                    event.category = event::category::MAIL,
                    event.action = event::action::AUGMENT_FAILED,
                    event.entity_type = event::entity_type::ORDER,
                    event.result = event::result::FAILURE,
                    "宛先追加を中断"
                );
            }
        }
    }

    /// 組み立て中のメールが注文メールかを判定する
    ///
    /// 捕捉済みのテンプレート識別子が、設定された会員注文テンプレート名
    /// またはゲスト注文テンプレート名と完全一致すれば true。識別子や設定が
    /// 無い場合は false（エラーにはしない）。
    pub fn is_order_email(&self, ctx: &EmailBuildContext) -> bool {
        let Some(template_id) = ctx.template_id() else {
            return false;
        };
        [keys::ORDER_TEMPLATE, keys::ORDER_GUEST_TEMPLATE]
            .iter()
            .any(|key| {
                self.config
                    .value(key, ConfigScope::Store)
                    .is_some_and(|name| name == template_id.as_str())
            })
    }

    /// 注文した顧客の `email_cc` 属性から CC リストを解決する
    ///
    /// 注文参照・顧客 ID・顧客・属性のいずれが欠けても空リスト。
    /// リポジトリ障害もログに記録したうえで空リストとして扱う。
    pub async fn customer_copy_to(&self, ctx: &EmailBuildContext) -> CopyToList {
        let Some(order) = ctx.order() else {
            return CopyToList::empty();
        };
        let Some(customer_id) = order.customer_id() else {
            return CopyToList::empty();
        };
        let Some(customer) = self.find_customer(&customer_id).await else {
            return CopyToList::empty();
        };
        match customer.email_cc() {
            Some(raw) => CopyToList::parse(raw),
            None => CopyToList::empty(),
        }
    }

    /// `sales_email/order/copy_to` 設定から BCC リストを解決する
    pub fn order_copy_to(&self) -> CopyToList {
        match self.config.value(keys::ORDER_COPY_TO, ConfigScope::Store) {
            Some(raw) => CopyToList::parse(&raw),
            None => CopyToList::empty(),
        }
    }

    /// 顧客を取得する。障害は「見つからなかった」として扱う
    async fn find_customer(&self, id: &CustomerId) -> Option<Customer> {
        match self.customers.find_by_id(id).await {
            Ok(customer) => customer,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    error.category = error_ctx::category::INFRASTRUCTURE,
                    error.kind = error_ctx::kind::CUSTOMER_LOOKUP,
                    customer_id = %id,
                    "顧客の取得に失敗"
                );
                None
            }
        }
    }
}

/// 解決済みの宛先をトリムしてトランスポートに登録する
///
/// 追加に成功した件数を `(cc, bcc)` で返す。途中で失敗した場合、
/// 追加済みの宛先はトランスポートに残る。
fn apply_recipients(
    transport: &mut dyn MailTransportBuilder,
    cc: &CopyToList,
    bcc: &CopyToList,
) -> Result<(usize, usize), InfraError> {
    let mut cc_count = 0;
    for address in cc.iter() {
        let address = address.trim();
        transport.add_cc(address)?;
        tracing::debug!(address, "CC を追加");
        cc_count += 1;
    }

    let mut bcc_count = 0;
    for address in bcc.iter() {
        let address = address.trim();
        transport.add_bcc(address)?;
        tracing::debug!(address, "BCC を追加");
        bcc_count += 1;
    }

    Ok((cc_count, bcc_count))
}
