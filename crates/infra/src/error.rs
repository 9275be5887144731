//! # インフラ層エラー定義
//!
//! 顧客リポジトリやメールトランスポートとのやり取りで発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: lettre のアドレス解析・メッセージ構築エラーをラップ
//! - **ドメインエラーとの分離**: インフラ固有のエラーを明示
//! - **SpanTrace 自動捕捉**: `From` 実装や convenience constructor で
//!   エラー生成時の呼び出し経路を自動記録する
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（Repository, InvalidAddress 等）

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別（[`InfraErrorKind`]）と [`SpanTrace`]（呼び出し経路）を保持する。
/// `From<lettre::address::AddressError>` 等の変換や convenience constructor で
/// エラーを生成すると、その時点のスパン情報が自動的にキャプチャされる。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
///
/// 宛先追加は送信を失敗させないという方針のため、いずれの種別も
/// 最終的にはログに記録して握りつぶされる。
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// 顧客リポジトリエラー
    ///
    /// 顧客ストアへの問い合わせ失敗。接続エラーやタイムアウトなど。
    #[error("顧客リポジトリエラー: {0}")]
    Repository(String),

    /// 宛先アドレス不正
    ///
    /// メールボックスとして解析できないアドレスを渡された場合。
    #[error("宛先アドレスが不正です: {0}")]
    InvalidAddress(#[source] lettre::address::AddressError),

    /// メッセージ構築エラー
    ///
    /// トランスポートのメッセージ組み立てに失敗した場合。
    #[error("メッセージ構築エラー: {0}")]
    Transport(#[source] lettre::error::Error),

    /// 予期しないエラー
    ///
    /// 上記に分類できない予期しないエラー。
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

// ===== InfraError のメソッド =====

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    // ===== Convenience constructors =====

    /// 顧客リポジトリエラーを生成する
    pub fn repository(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Repository(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Unexpected(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

// ===== トレイト実装 =====

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

// ===== From 実装（SpanTrace 自動キャプチャ） =====

impl From<lettre::address::AddressError> for InfraError {
    fn from(source: lettre::address::AddressError) -> Self {
        Self {
            kind:       InfraErrorKind::InvalidAddress(source),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl From<lettre::error::Error> for InfraError {
    fn from(source: lettre::error::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Transport(source),
            span_trace: SpanTrace::capture(),
        }
    }
}
