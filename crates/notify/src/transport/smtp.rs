//! Delivery through an SMTP relay.
//!
//! Wraps the `lettre` async SMTP transport. The message is sent as
//! multipart/alternative so clients can pick the text or HTML body.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::MailTransport;
use crate::config::SmtpConfig;
use crate::error::MailError;
use crate::message::{DeliveryReceipt, OutgoingEmail};

/// Sends email via STARTTLS SMTP.
pub struct SmtpTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpTransport {
    pub fn new(config: SmtpConfig) -> Result<Self, MailError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?.port(config.port);

        if let (Some(user), Some(pass)) = (config.user, config.password) {
            builder = builder.credentials(Credentials::new(user, pass));
        }

        Ok(Self {
            mailer: builder.build(),
        })
    }
}

/// Assemble the MIME message for an outgoing email.
pub fn build_message(email: &OutgoingEmail) -> Result<Message, MailError> {
    Message::builder()
        .from(email.from.parse::<Mailbox>()?)
        .to(email.to.parse::<Mailbox>()?)
        .reply_to(email.reply_to.parse::<Mailbox>()?)
        .subject(email.subject.clone())
        .multipart(MultiPart::alternative_plain_html(
            email.text.clone(),
            email.html.clone(),
        ))
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl MailTransport for SmtpTransport {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, MailError> {
        let message = build_message(email)?;
        let response = self.mailer.send(message).await?;
        Ok(DeliveryReceipt {
            id: response.first_line().map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn email(reply_to: &str) -> OutgoingEmail {
        OutgoingEmail {
            from: "onboarding@resend.dev".into(),
            to: "info@aimterior.com".into(),
            reply_to: reply_to.into(),
            subject: "Contact Form - Office Design from Ada".into(),
            text: "plain".into(),
            html: "<p>rich</p>".into(),
        }
    }

    #[test]
    fn builds_multipart_message_with_reply_to() {
        let message = build_message(&email("ada@example.com")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Reply-To: ada@example.com"));
        assert!(raw.contains("multipart/alternative"));
    }

    #[test]
    fn invalid_reply_to_is_an_address_error() {
        assert_matches!(
            build_message(&email("not-an-email")),
            Err(MailError::Address(_))
        );
    }
}
