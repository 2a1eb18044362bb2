//! Subject and body rendering for submission notifications.
//!
//! The text body is the canonical content; the HTML body presents the same
//! fields in a styled card layout. User-supplied values are escaped before
//! they are embedded in HTML.

use aimterior_core::submission::{RequestKind, SubmissionPayload};

/// Placeholder for optional fields the submitter left blank.
pub const NOT_PROVIDED: &str = "Not provided";

/// Text-body placeholder when no message was written.
const NO_MESSAGE: &str = "No additional message provided";

/// Name used in the subject and sign-off when no full name was given.
const ANONYMOUS_NAME: &str = "Customer";

/// Email subject, e.g. `Quote Request - Space Planning from Ada Lovelace`.
pub fn subject(kind: RequestKind, payload: &SubmissionPayload, interest_label: &str) -> String {
    format!(
        "{} - {interest_label} from {}",
        kind.title(),
        payload.full_name().unwrap_or(ANONYMOUS_NAME)
    )
}

/// Plain-text body.
pub fn render_text(kind: RequestKind, payload: &SubmissionPayload, interest_label: &str) -> String {
    let email = payload.email().unwrap_or_default();

    let intro = match kind {
        RequestKind::Contact => "You have received a new contact form submission:",
        RequestKind::Quote => "You have received a new quote request:",
    };

    let closing = match kind {
        RequestKind::Contact => format!(
            "---\n\
             This email was sent from the AIMTERIOR website contact form.\n\
             Reply directly to this email to respond to {email}"
        ),
        RequestKind::Quote => format!(
            "Please contact me to discuss my project requirements.\n\
             \n\
             Best regards,\n\
             {}",
            payload.full_name().unwrap_or(ANONYMOUS_NAME)
        ),
    };

    format!(
        "Hello AIMTERIOR Team,\n\
         \n\
         {intro}\n\
         \n\
         Contact Details:\n\
         - Full Name: {name}\n\
         - Email: {email}\n\
         - Phone: {phone}\n\
         - Company: {company}\n\
         - Interest: {interest_label}\n\
         \n\
         Message:\n\
         {message}\n\
         \n\
         {closing}",
        name = payload.full_name().unwrap_or(NOT_PROVIDED),
        phone = payload.phone_number().unwrap_or(NOT_PROVIDED),
        company = payload.company().unwrap_or(NOT_PROVIDED),
        message = payload.message().unwrap_or(NO_MESSAGE),
    )
}

/// Styled HTML body. The message card is omitted when there is no message.
pub fn render_html(kind: RequestKind, payload: &SubmissionPayload, interest_label: &str) -> String {
    let title = kind.title();
    let email = escape_html(payload.email().unwrap_or_default());
    let name = escape_html(payload.full_name().unwrap_or(NOT_PROVIDED));
    let phone = escape_html(payload.phone_number().unwrap_or(NOT_PROVIDED));
    let company = escape_html(payload.company().unwrap_or(NOT_PROVIDED));
    let interest = escape_html(interest_label);

    let message_card = payload
        .message()
        .map(|message| {
            format!(
                r#"
    <div style="background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1);">
      <h3 style="color: #333; margin-top: 0; border-bottom: 2px solid #667eea; padding-bottom: 10px;">Message</h3>
      <p style="white-space: pre-wrap; margin: 0;">{}</p>
    </div>"#,
                escape_html(message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} - AIMTERIOR</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 30px; text-align: center; border-radius: 10px 10px 0 0;">
    <h1 style="color: white; margin: 0; font-size: 24px;">{title}</h1>
    <p style="color: rgba(255,255,255,0.9); margin: 10px 0 0 0;">AIMTERIOR Website</p>
  </div>

  <div style="background: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px;">
    <h2 style="color: #667eea; margin-top: 0;">New Submission</h2>

    <div style="background: white; padding: 20px; border-radius: 8px; margin-bottom: 20px; box-shadow: 0 2px 4px rgba(0,0,0,0.1);">
      <h3 style="color: #333; margin-top: 0; border-bottom: 2px solid #667eea; padding-bottom: 10px;">Contact Information</h3>
      <p style="margin: 8px 0;"><strong>Full Name:</strong> {name}</p>
      <p style="margin: 8px 0;"><strong>Email:</strong> <a href="mailto:{email}" style="color: #667eea;">{email}</a></p>
      <p style="margin: 8px 0;"><strong>Phone:</strong> {phone}</p>
      <p style="margin: 8px 0;"><strong>Company:</strong> {company}</p>
      <p style="margin: 8px 0;"><strong>Interest:</strong> {interest}</p>
    </div>
{message_card}

    <div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #ddd; text-align: center; color: #666; font-size: 12px;">
      <p>This email was sent from the AIMTERIOR website contact form.</p>
      <p>Reply directly to this email to respond to <a href="mailto:{email}" style="color: #667eea;">{email}</a></p>
    </div>
  </div>
</body>
</html>"#
    )
}

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
