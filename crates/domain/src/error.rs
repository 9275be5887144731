//! # ドメイン層エラー定義
//!
//! 値オブジェクト生成時の検証失敗などを表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// 宛先追加は送信を失敗させないという方針のため、このエラーが
/// 呼び出し元のメール送信まで伝播することはない。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 値オブジェクトの生成時に入力が不変条件を満たさない場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
