//! Contact and quote-request submissions.
//!
//! A submission lives for a single request: it is validated, handed to the
//! notification dispatcher, then dropped. The two request kinds differ only
//! in which fields are mandatory.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Which public form produced a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// The full contact form: email and full name are required.
    Contact,
    /// The quote-request card: only email is required.
    Quote,
}

impl RequestKind {
    /// Heading used in the notification email ("Contact Form" / "Quote Request").
    pub fn title(self) -> &'static str {
        match self {
            RequestKind::Contact => "Contact Form",
            RequestKind::Quote => "Quote Request",
        }
    }

    /// Acknowledgement returned to the browser on success.
    pub fn success_message(self) -> &'static str {
        match self {
            RequestKind::Contact => "Contact form submitted successfully",
            RequestKind::Quote => "Quote request submitted successfully",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Contact => f.write_str("contact"),
            RequestKind::Quote => f.write_str("quote"),
        }
    }
}

/// Form data posted by the browser. Every field is optional at the wire
/// level so a missing email yields a validation error rather than a
/// deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    pub interest: Option<String>,
}

impl SubmissionPayload {
    pub fn full_name(&self) -> Option<&str> {
        non_empty(&self.full_name)
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    pub fn phone_number(&self) -> Option<&str> {
        non_empty(&self.phone_number)
    }

    pub fn company(&self) -> Option<&str> {
        non_empty(&self.company)
    }

    pub fn message(&self) -> Option<&str> {
        non_empty(&self.message)
    }

    pub fn interest(&self) -> Option<&str> {
        non_empty(&self.interest)
    }

    /// Check the fields required by `kind`.
    ///
    /// Contact requests need an email and a full name; quote requests only an
    /// email. Empty strings count as missing.
    pub fn validate(&self, kind: RequestKind) -> Result<(), CoreError> {
        match kind {
            RequestKind::Contact => {
                if self.email().is_none() || self.full_name().is_none() {
                    return Err(CoreError::Validation(
                        "Email and full name are required".to_string(),
                    ));
                }
            }
            RequestKind::Quote => {
                if self.email().is_none() {
                    return Err(CoreError::Validation("Email is required".to_string()));
                }
            }
        }
        Ok(())
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
