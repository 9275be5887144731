//! # MailCC ドメイン層
//!
//! 取引メールの宛先追加（CC/BCC）に関するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: 顧客 ID・メールアドレス・テンプレート識別子を
//!   Newtype でラップし、型安全性を確保
//! - **ビルドコンテキスト**: メール 1 通の組み立てサイクルで捕捉した状態は
//!   [`template::EmailBuildContext`] に閉じ込め、呼び出し間で共有しない
//! - **インフラ非依存**: 設定ストアや顧客リポジトリの詳細には一切依存しない
//!
//! ## 依存関係の方向
//!
//! ```text
//! mailcc → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`customer`] - 顧客エンティティと `email_cc` カスタム属性
//! - [`order`] - テンプレート変数から捕捉する注文参照
//! - [`template`] - テンプレート識別子・変数とビルドコンテキスト
//! - [`recipient`] - カンマ区切りの写し送付先リスト
//! - [`error`] - ドメイン層エラー

pub mod customer;
pub mod error;
pub mod order;
pub mod recipient;
pub mod template;

pub use error::DomainError;
