//! # テスト用モック
//!
//! 宛先追加のテストで使用するインメモリモック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! mailcc-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mailcc_domain::customer::{Customer, CustomerId};

use crate::{
    error::InfraError,
    repository::CustomerRepository,
    transport::MailTransportBuilder,
};

// ===== MockCustomerRepository =====

/// テスト用のモック CustomerRepository
///
/// 事前に登録した顧客を ID で返す。`fail_with` を設定すると
/// 問い合わせ自体が失敗するようになり、リポジトリ障害を再現できる。
#[derive(Clone, Default)]
pub struct MockCustomerRepository {
    customers: Arc<Mutex<Vec<Customer>>>,
    failure:   Arc<Mutex<Option<String>>>,
}

impl MockCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 顧客を登録する
    pub fn add_customer(&self, customer: Customer) {
        self.customers.lock().unwrap().push(customer);
    }

    /// 以降の問い合わせを指定メッセージで失敗させる
    pub fn fail_with(&self, msg: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(msg.into());
    }
}

#[async_trait]
impl CustomerRepository for MockCustomerRepository {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, InfraError> {
        if let Some(msg) = self.failure.lock().unwrap().clone() {
            return Err(InfraError::repository(msg));
        }
        Ok(self
            .customers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == *id)
            .cloned())
    }
}

// ===== RecordingTransportBuilder =====

/// テスト用のトランスポートビルダー
///
/// 追加された CC/BCC を文字列のまま記録する。`failing_after` で
/// n 件目以降の追加を失敗させ、部分適用のテストに使う。
#[derive(Debug, Default)]
pub struct RecordingTransportBuilder {
    cc:         Vec<String>,
    bcc:        Vec<String>,
    fail_after: Option<usize>,
}

impl RecordingTransportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加が `accepted` 件成功した後、以降の追加を失敗させるビルダーを作成する
    pub fn failing_after(accepted: usize) -> Self {
        Self {
            fail_after: Some(accepted),
            ..Self::default()
        }
    }

    /// 記録された CC 宛先を返す
    pub fn cc(&self) -> &[String] {
        &self.cc
    }

    /// 記録された BCC 宛先を返す
    pub fn bcc(&self) -> &[String] {
        &self.bcc
    }

    fn check_capacity(&self) -> Result<(), InfraError> {
        if let Some(limit) = self.fail_after {
            if self.cc.len() + self.bcc.len() >= limit {
                return Err(InfraError::unexpected("トランスポートが宛先追加を拒否"));
            }
        }
        Ok(())
    }
}

impl MailTransportBuilder for RecordingTransportBuilder {
    fn add_cc(&mut self, address: &str) -> Result<(), InfraError> {
        self.check_capacity()?;
        self.cc.push(address.to_string());
        Ok(())
    }

    fn add_bcc(&mut self, address: &str) -> Result<(), InfraError> {
        self.check_capacity()?;
        self.bcc.push(address.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn 登録済みの顧客をidで返す() {
        let repo = MockCustomerRepository::new();
        repo.add_customer(Customer::fixture(42, "user@example.com", Some("a@x.com")));

        let found = repo
            .find_by_id(&CustomerId::new(42).unwrap())
            .await
            .unwrap();
        assert_eq!(found.unwrap().email_cc(), Some("a@x.com"));
    }

    #[tokio::test]
    async fn 未登録の顧客はnoneを返す() {
        let repo = MockCustomerRepository::new();
        let found = repo.find_by_id(&CustomerId::new(1).unwrap()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn fail_with設定後はエラーを返す() {
        let repo = MockCustomerRepository::new();
        repo.fail_with("DB 接続失敗");
        assert!(repo.find_by_id(&CustomerId::new(1).unwrap()).await.is_err());
    }

    #[test]
    fn recording_builderは宛先を記録する() {
        let mut builder = RecordingTransportBuilder::new();
        builder.add_cc("a@x.com").unwrap();
        builder.add_bcc("b@x.com").unwrap();
        assert_eq!(builder.cc(), ["a@x.com"]);
        assert_eq!(builder.bcc(), ["b@x.com"]);
    }

    #[test]
    fn failing_afterは指定件数を超えた追加を拒否する() {
        let mut builder = RecordingTransportBuilder::failing_after(1);
        builder.add_cc("a@x.com").unwrap();
        assert!(builder.add_cc("b@x.com").is_err());
        assert_eq!(builder.cc(), ["a@x.com"]);
    }
}
