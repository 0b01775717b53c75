use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_STORE_TIMEOUT_SECS, DEFAULT_WEBHOOK_TOLERANCE_SECS,
    MAX_STORE_TIMEOUT_SECS, MAX_WEBHOOK_TOLERANCE_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Provider-issued signing secret ("whsec_..."); mandatory, the
    /// endpoint fails closed without it
    pub signing_secret: Option<String>,
    /// Accepted clock skew for delivery timestamps, in seconds
    pub tolerance_secs: u64,
    /// Upper bound on a single store operation during resolution
    pub store_timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            signing_secret: None,
            tolerance_secs: DEFAULT_WEBHOOK_TOLERANCE_SECS,
            store_timeout_secs: DEFAULT_STORE_TIMEOUT_SECS,
        }
    }
}

impl WebhookConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.signing_secret.as_deref() {
            None | Some("") => {
                return Err(ConfigError::webhook(
                    "webhook.signing_secret is required",
                ));
            }
            Some(_) => {}
        }

        if self.tolerance_secs == 0 || self.tolerance_secs > MAX_WEBHOOK_TOLERANCE_SECS {
            return Err(ConfigError::webhook(format!(
                "webhook.tolerance_secs must be 1-{}, got {}",
                MAX_WEBHOOK_TOLERANCE_SECS, self.tolerance_secs
            )));
        }

        if self.store_timeout_secs == 0 || self.store_timeout_secs > MAX_STORE_TIMEOUT_SECS {
            return Err(ConfigError::webhook(format!(
                "webhook.store_timeout_secs must be 1-{}, got {}",
                MAX_STORE_TIMEOUT_SECS, self.store_timeout_secs
            )));
        }

        Ok(())
    }
}
