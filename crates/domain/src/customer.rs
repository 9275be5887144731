//! # 顧客
//!
//! 顧客エンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 備考 |
//! |---|------------|------|
//! | [`Customer`] | 顧客 | ストアに登録済みのアカウント |
//! | [`CustomerAttributes`] | カスタム属性 | 拡張可能な属性コード → 値のマップ |
//! | [`EMAIL_CC_ATTRIBUTE`] | `email_cc` 属性 | 取引メールの写し送付先（カンマ区切り） |
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: [`CustomerId`] は数値 ID をラップし、型安全性を確保
//! - **不変性**: エンティティフィールドは不変、参照はアクセサ経由
//! - **バリデーション**: 値オブジェクトの生成時に検証ロジックを実行

use std::collections::HashMap;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 取引メールの写し送付先を保持するカスタム属性コード
///
/// 値はカンマ区切りのメールアドレス文字列。顧客がアカウント画面で
/// 編集するため、空白や空要素を含みうる。
pub const EMAIL_CC_ATTRIBUTE: &str = "email_cc";

/// 顧客 ID（一意識別子）
///
/// ストア側で採番される正の整数。Newtype パターンで型安全性を確保。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct CustomerId(u64);

impl CustomerId {
    /// 顧客 ID を作成する
    ///
    /// # バリデーション
    ///
    /// - 0 は無効（未採番・ゲストを表すため ID としては扱わない）
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: u64) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::Validation(
                "顧客 ID は 1 以上である必要があります".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// 内部の数値を取得する
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// メールアドレス（値オブジェクト）
///
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - `local@domain` の形式であること
    /// - 最大 255 文字
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスは必須です".to_string(),
            ));
        }

        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        };

        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        }

        if value.len() > 255 {
            return Err(DomainError::Validation(
                "メールアドレスは255文字以内である必要があります".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// カスタム属性（属性コード → 文字列値）
///
/// 顧客プロフィールの拡張フィールド。このシステムが読むのは
/// [`EMAIL_CC_ATTRIBUTE`] のみだが、属性自体は任意のコードを保持できる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAttributes(HashMap<String, String>);

impl CustomerAttributes {
    /// 空の属性マップを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 属性を設定する
    pub fn set(&mut self, code: impl Into<String>, value: impl Into<String>) {
        self.0.insert(code.into(), value.into());
    }

    /// 属性値を取得する。未設定は None。
    pub fn get(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }
}

/// 顧客エンティティ
///
/// 取引メールの宛先追加で参照する最小限のプロフィール。
/// 認証やアカウント管理はこのシステムの責務外。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id:         CustomerId,
    email:      Email,
    attributes: CustomerAttributes,
}

impl Customer {
    /// 新規顧客を作成する
    pub fn new(id: CustomerId, email: Email, attributes: CustomerAttributes) -> Self {
        Self {
            id,
            email,
            attributes,
        }
    }

    /// 顧客 ID を返す
    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// メールアドレスを返す
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// カスタム属性値を返す。未設定は None。
    pub fn custom_attribute(&self, code: &str) -> Option<&str> {
        self.attributes.get(code)
    }

    /// `email_cc` カスタム属性の生値を返す。未設定は None。
    ///
    /// トリムや分割は行わない。分割は [`crate::recipient::CopyToList`]、
    /// アドレスごとのトリムは利用側の責務。
    pub fn email_cc(&self) -> Option<&str> {
        self.custom_attribute(EMAIL_CC_ATTRIBUTE)
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Customer {
    /// テスト用の顧客を作成する
    ///
    /// `email_cc` に `None` を渡すと属性自体を設定しない。
    pub fn fixture(id: u64, email: &str, email_cc: Option<&str>) -> Self {
        let mut attributes = CustomerAttributes::new();
        if let Some(cc) = email_cc {
            attributes.set(EMAIL_CC_ATTRIBUTE, cc);
        }
        Self::new(
            CustomerId::new(id).expect("fixture の顧客 ID は 1 以上であること"),
            Email::new(email).expect("fixture のメールアドレスは妥当であること"),
            attributes,
        )
    }
}
