//! Mail configuration loaded from environment variables.

/// Default Resend API base URL.
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `FROM_EMAIL` is not set.
const DEFAULT_FROM_ADDRESS: &str = "onboarding@resend.dev";

/// Default recipient of form notifications when `TO_EMAIL` is not set.
const DEFAULT_TO_ADDRESS: &str = "info@aimterior.com";

/// Settings for the Resend HTTP API.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    pub api_key: String,
    pub base_url: String,
}

/// Settings for an SMTP relay.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
}

/// Which provider delivers notifications.
#[derive(Debug, Clone)]
pub enum TransportConfig {
    Resend(ResendConfig),
    Smtp(SmtpConfig),
    /// Neither provider configured; sends fail with
    /// [`MailError::NotConfigured`](crate::MailError::NotConfigured).
    Unconfigured,
}

/// Configuration for the notification dispatcher.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// Fixed sender address of every notification.
    pub from_address: String,
    /// Fixed recipient: the studio inbox.
    pub to_address: String,
    pub transport: TransportConfig,
}

impl MailConfig {
    /// Load configuration from environment variables.
    ///
    /// Resend wins when `RESEND_API_KEY` is set; otherwise `SMTP_HOST`
    /// selects SMTP.
    ///
    /// | Variable         | Default                  |
    /// |------------------|--------------------------|
    /// | `RESEND_API_KEY` | unset                    |
    /// | `RESEND_API_URL` | `https://api.resend.com` |
    /// | `SMTP_HOST`      | unset                    |
    /// | `SMTP_PORT`      | `587`                    |
    /// | `SMTP_USER`      | unset                    |
    /// | `SMTP_PASSWORD`  | unset                    |
    /// | `FROM_EMAIL`     | `onboarding@resend.dev`  |
    /// | `TO_EMAIL`       | `info@aimterior.com`     |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values are
    /// treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let transport = if let Some(api_key) = var("RESEND_API_KEY") {
            TransportConfig::Resend(ResendConfig {
                api_key,
                base_url: var("RESEND_API_URL")
                    .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
            })
        } else if let Some(host) = var("SMTP_HOST") {
            TransportConfig::Smtp(SmtpConfig {
                host,
                port: var("SMTP_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_SMTP_PORT),
                user: var("SMTP_USER"),
                password: var("SMTP_PASSWORD"),
            })
        } else {
            TransportConfig::Unconfigured
        };

        Self {
            from_address: var("FROM_EMAIL").unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
            to_address: var("TO_EMAIL").unwrap_or_else(|| DEFAULT_TO_ADDRESS.to_string()),
            transport,
        }
    }
}
