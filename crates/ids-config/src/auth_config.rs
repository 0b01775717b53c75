use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, MIN_JWT_SECRET_LENGTH};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// HS256 shared secret for session token validation
    pub jwt_secret: Option<String>,
    /// RS256 public key file, relative to the config directory
    pub jwt_public_key_path: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if self.jwt_secret.is_none() && self.jwt_public_key_path.is_none() {
            return Err(ConfigError::auth(
                "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
            ));
        }

        if let Some(ref secret) = self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if let Some(ref key_path) = self.jwt_public_key_path {
            let full_path = config_dir.join(key_path);
            if !full_path.exists() {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_public_key_path does not exist: {}",
                    full_path.display()
                )));
            }
        }

        Ok(())
    }
}
