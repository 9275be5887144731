//! # 顧客リポジトリ
//!
//! 顧客ストアへの問い合わせを抽象化する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: 宛先追加はこのトレイトにのみ依存し、顧客ストアの
//!   実体（DB・外部 API）はホスト側が実装して注入する
//! - **存在しない ≠ エラー**: 見つからない場合は `Ok(None)`、問い合わせ
//!   自体の失敗は `Err`

use async_trait::async_trait;
use mailcc_domain::customer::{Customer, CustomerId};

use crate::error::InfraError;

/// 顧客リポジトリトレイト
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// 顧客 ID で顧客を取得する。存在しない場合は None。
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, InfraError>;
}
