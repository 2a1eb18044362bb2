//! Notification dispatcher.
//!
//! Resolves the interest label, renders the email, and submits it through
//! the configured [`MailTransport`]. Stateless per call.

use std::sync::Arc;

use aimterior_core::interest::InterestCatalog;
use aimterior_core::submission::{RequestKind, SubmissionPayload};

use crate::config::{MailConfig, TransportConfig};
use crate::error::MailError;
use crate::message::{DeliveryReceipt, OutgoingEmail};
use crate::template;
use crate::transport::resend::ResendTransport;
use crate::transport::smtp::SmtpTransport;
use crate::transport::{MailTransport, UnconfiguredTransport};

/// Formats submission notifications and hands them to a transport.
pub struct Dispatcher {
    catalog: Arc<InterestCatalog>,
    transport: Arc<dyn MailTransport>,
    from_address: String,
    to_address: String,
}

impl Dispatcher {
    pub fn new(
        catalog: Arc<InterestCatalog>,
        transport: Arc<dyn MailTransport>,
        from_address: impl Into<String>,
        to_address: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            transport,
            from_address: from_address.into(),
            to_address: to_address.into(),
        }
    }

    /// Build a dispatcher with the transport selected by `config`.
    pub fn from_config(
        config: MailConfig,
        catalog: Arc<InterestCatalog>,
    ) -> Result<Self, MailError> {
        let transport: Arc<dyn MailTransport> = match config.transport {
            TransportConfig::Resend(resend) => Arc::new(ResendTransport::new(resend)?),
            TransportConfig::Smtp(smtp) => Arc::new(SmtpTransport::new(smtp)?),
            TransportConfig::Unconfigured => {
                tracing::warn!("No email provider configured; form notifications will fail");
                Arc::new(UnconfiguredTransport)
            }
        };
        Ok(Self::new(
            catalog,
            transport,
            config.from_address,
            config.to_address,
        ))
    }

    /// Name of the active transport.
    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// Render the notification for a submission without sending it.
    pub fn compose(&self, payload: &SubmissionPayload, kind: RequestKind) -> OutgoingEmail {
        let label = self.catalog.label_for(payload.interest());
        OutgoingEmail {
            from: self.from_address.clone(),
            to: self.to_address.clone(),
            reply_to: payload.email().unwrap_or_default().to_string(),
            subject: template::subject(kind, payload, label),
            text: template::render_text(kind, payload, label),
            html: template::render_html(kind, payload, label),
        }
    }

    /// Render and send the notification for a submission.
    ///
    /// Transport failures are logged and returned unchanged; nothing is
    /// retried.
    pub async fn dispatch(
        &self,
        payload: &SubmissionPayload,
        kind: RequestKind,
    ) -> Result<DeliveryReceipt, MailError> {
        let email = self.compose(payload, kind);

        match self.transport.send(&email).await {
            Ok(receipt) => {
                tracing::info!(
                    %kind,
                    transport = self.transport.name(),
                    message_id = receipt.id.as_deref().unwrap_or("-"),
                    "Notification email sent"
                );
                Ok(receipt)
            }
            Err(e) => {
                tracing::error!(
                    %kind,
                    transport = self.transport.name(),
                    error = %e,
                    "Notification email failed"
                );
                Err(e)
            }
        }
    }
}
