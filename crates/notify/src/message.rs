use serde::Serialize;

/// A fully rendered notification, ready for any transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Acknowledgement from the provider that it accepted a message.
///
/// `id` is the provider's message identifier when it returns one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub id: Option<String>,
}
