//! Delivery transports.
//!
//! A transport takes a rendered [`OutgoingEmail`] and performs exactly one
//! exchange with its provider. Failures are returned unchanged.

pub mod resend;
pub mod smtp;

use async_trait::async_trait;

use crate::error::MailError;
use crate::message::{DeliveryReceipt, OutgoingEmail};

/// Sends a rendered email through an external provider.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    /// Submit the message, returning the provider's acknowledgement.
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, MailError>;
}

/// Transport used when no provider is configured. Every send fails.
#[derive(Debug, Default)]
pub struct UnconfiguredTransport;

#[async_trait]
impl MailTransport for UnconfiguredTransport {
    fn name(&self) -> &'static str {
        "unconfigured"
    }

    async fn send(&self, _email: &OutgoingEmail) -> Result<DeliveryReceipt, MailError> {
        Err(MailError::NotConfigured)
    }
}
