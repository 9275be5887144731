//! # MailCC インフラ層
//!
//! 外部コラボレータ（設定ストア・顧客リポジトリ・メールトランスポート）との
//! 境界を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートは宛先追加が依存する外部機能をトレイトとして定義し、
//! 手元で完結する実装（環境変数設定・lettre メッセージビルダー）と
//! テスト用モックを提供する。顧客ストアや設定ストアの実体はホスト側が
//! 所有するため、ここでは永続化を持たない。
//!
//! ## 依存関係
//!
//! ```text
//! mailcc → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`config`] - ストアスコープ設定の読み出し
//! - [`repository`] - 顧客リポジトリトレイト
//! - [`transport`] - メールトランスポートビルダーと lettre アダプタ
//! - [`error`] - インフラ層エラー定義
//! - `mock` - テスト用モック（`test-utils` feature）

pub mod config;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;
pub mod transport;

pub use config::{ConfigScope, ScopeConfig};
pub use error::InfraError;
pub use repository::CustomerRepository;
pub use transport::MailTransportBuilder;
