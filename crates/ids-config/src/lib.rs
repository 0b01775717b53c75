mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod webhook_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use webhook_config::WebhookConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8100;
const DEFAULT_DATABASE_FILENAME: &str = "identity.db";
const DEFAULT_AUTH_ENABLED: bool = false;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_WEBHOOK_TOLERANCE_SECS: u64 = 300;
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 5;
const MIN_PORT: u16 = 1024;
const MIN_JWT_SECRET_LENGTH: usize = 32;
const MAX_WEBHOOK_TOLERANCE_SECS: u64 = 3600;
const MAX_STORE_TIMEOUT_SECS: u64 = 60;

#[cfg(test)]
mod tests;
