//! Notification emails for website form submissions.
//!
//! - [`Dispatcher`] turns a [`SubmissionPayload`](aimterior_core::submission::SubmissionPayload)
//!   into an [`OutgoingEmail`] and hands it to a transport.
//! - [`MailTransport`] is the delivery seam: [`ResendTransport`] calls the
//!   Resend HTTP API, [`SmtpTransport`] relays through an SMTP server.
//! - [`template`] renders the subject, plain-text and HTML bodies.
//!
//! Each dispatch is a single request/response exchange with the provider:
//! no retry, no queue.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod message;
pub mod template;
pub mod transport;

pub use config::{MailConfig, TransportConfig};
pub use dispatcher::Dispatcher;
pub use error::MailError;
pub use message::{DeliveryReceipt, OutgoingEmail};
pub use transport::resend::ResendTransport;
pub use transport::smtp::SmtpTransport;
pub use transport::{MailTransport, UnconfiguredTransport};
