//! # メールトランスポートビルダー
//!
//! 装飾対象のトランスポートを抽象化し、lettre によるアダプタを提供する。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: [`MailTransportBuilder`] trait で CC/BCC の
//!   登録を抽象化。ホストの実体が何であれ、宛先追加はこの trait だけを呼ぶ
//! - **失敗は呼び出し元が裁く**: アドレス解析の失敗は `Err` で返し、
//!   握りつぶすかどうかは上位（宛先追加サービス）が明示的に決める
//! - **送信はしない**: アダプタはメッセージを組み立てるところまで。
//!   送信経路はホストの所有物

use lettre::message::{Mailbox, Message, header::ContentType};

use crate::error::InfraError;

/// メールトランスポートビルダートレイト
///
/// 組み立て中のメールに CC/BCC 宛先を登録する。送信直前の宛先追加
/// から呼ばれる。
pub trait MailTransportBuilder: Send {
    /// CC 宛先を追加する
    fn add_cc(&mut self, address: &str) -> Result<(), InfraError>;

    /// BCC 宛先を追加する
    fn add_bcc(&mut self, address: &str) -> Result<(), InfraError>;
}

/// lettre メッセージビルダーアダプタ
///
/// CC/BCC を解析済みの [`Mailbox`] として蓄積し、最後に
/// [`lettre::message::Message`] を組み立てる。
pub struct LettreMessageBuilder {
    from:    Mailbox,
    to:      Mailbox,
    subject: String,
    cc:      Vec<Mailbox>,
    bcc:     Vec<Mailbox>,
}

impl LettreMessageBuilder {
    /// 送信元・宛先・件名からビルダーを作成する
    ///
    /// # エラー
    ///
    /// 送信元または宛先がメールボックスとして解析できない場合は
    /// `InfraErrorKind::InvalidAddress` を返す。
    pub fn new(from: &str, to: &str, subject: impl Into<String>) -> Result<Self, InfraError> {
        Ok(Self {
            from:    from.parse()?,
            to:      to.parse()?,
            subject: subject.into(),
            cc:      Vec::new(),
            bcc:     Vec::new(),
        })
    }

    /// 蓄積済みの CC 宛先を返す
    pub fn cc(&self) -> &[Mailbox] {
        &self.cc
    }

    /// 蓄積済みの BCC 宛先を返す
    pub fn bcc(&self) -> &[Mailbox] {
        &self.bcc
    }

    /// プレーンテキスト本文を与えてメッセージを組み立てる
    pub fn build(self, text_body: String) -> Result<Message, InfraError> {
        let mut builder = Message::builder()
            .from(self.from)
            .to(self.to)
            .subject(self.subject);

        for mailbox in self.cc {
            builder = builder.cc(mailbox);
        }
        for mailbox in self.bcc {
            builder = builder.bcc(mailbox);
        }

        let message = builder.header(ContentType::TEXT_PLAIN).body(text_body)?;
        Ok(message)
    }
}

impl MailTransportBuilder for LettreMessageBuilder {
    fn add_cc(&mut self, address: &str) -> Result<(), InfraError> {
        let mailbox: Mailbox = address.parse()?;
        self.cc.push(mailbox);
        Ok(())
    }

    fn add_bcc(&mut self, address: &str) -> Result<(), InfraError> {
        let mailbox: Mailbox = address.parse()?;
        self.bcc.push(mailbox);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::InfraErrorKind;

    fn make_builder() -> LettreMessageBuilder {
        LettreMessageBuilder::new(
            "shop@example.com",
            "customer@example.com",
            "ご注文ありがとうございます",
        )
        .unwrap()
    }

    #[test]
    fn ccとbccを蓄積してメッセージを組み立てられる() {
        let mut builder = make_builder();
        builder.add_cc("a@x.com").unwrap();
        builder.add_bcc("sales@example.com").unwrap();

        assert_eq!(builder.cc().len(), 1);
        assert_eq!(builder.bcc().len(), 1);

        let message = builder.build("本文".to_string()).unwrap();
        let headers = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(headers.contains("Cc: a@x.com"));
    }

    #[test]
    fn 解析できないアドレスはinvalid_addressになる() {
        let mut builder = make_builder();
        let err = builder.add_cc("not an address").unwrap_err();
        assert!(matches!(err.kind(), InfraErrorKind::InvalidAddress(_)));
        assert!(builder.cc().is_empty());
    }

    #[test]
    fn 空文字列のアドレスは拒否される() {
        let mut builder = make_builder();
        assert!(builder.add_cc("").is_err());
    }

    #[test]
    fn 送信元が不正ならビルダーを作成できない() {
        assert!(LettreMessageBuilder::new("broken", "customer@example.com", "件名").is_err());
    }
}
