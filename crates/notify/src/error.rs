/// Error type for notification delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The HTTP request to the email API failed (network, DNS, timeout, etc.).
    #[error("Email API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The email API rejected the message.
    #[error("Email API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// The recipient, sender or reply-to address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// No email provider is configured.
    #[error("Email delivery is not configured")]
    NotConfigured,
}
