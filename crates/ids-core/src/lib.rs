pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::event_kind::EventKind;
pub use models::identity::Identity;
pub use models::identity_event::{EmailAddress, IdentityEvent, IdentityEventData};
pub use models::role::Role;
pub use models::role_mapper::{derive_role, intent_to_role, role_to_intent};
pub use models::signup_intent::SignupIntent;
pub use models::trusted_metadata::TrustedMetadata;
pub use models::untrusted_metadata::UntrustedMetadata;

#[cfg(test)]
mod tests;
