pub mod error;
pub mod extractors;
pub mod redirect;
pub mod session;
pub mod webhooks;
