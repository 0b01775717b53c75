pub mod dispatcher;
pub mod error;
pub mod resolver;
pub mod signature;

pub use dispatcher::{DispatchOutcome, dispatch};
pub use error::{Result, StoreFailureKind, WebhookError};
pub use resolver::IdentityResolver;
pub use signature::{
    DeliveryHeaders, HEADER_DELIVERY_ID, HEADER_DELIVERY_SIGNATURE, HEADER_DELIVERY_TIMESTAMP,
    SignatureVerifier,
};

#[cfg(test)]
mod tests;
