//! Translation between the external signup-intent vocabulary and the
//! internal role enumeration.

use crate::{Role, SignupIntent, TrustedMetadata, UntrustedMetadata};

use std::str::FromStr;

/// Map a raw signup-intent value to an internal role.
/// Total over arbitrary input: unrecognized intents map to `Standard`,
/// so a user-suppliable value can never select a role the intent
/// vocabulary does not map to.
pub fn intent_to_role(intent: &str) -> Role {
    match SignupIntent::from_str(intent) {
        Ok(SignupIntent::Customer) => Role::Standard,
        Ok(SignupIntent::Vendor) => Role::Vendor,
        Ok(SignupIntent::Admin) => Role::Admin,
        Err(_) => Role::Standard,
    }
}

/// Inverse of [`intent_to_role`]. Total and exhaustive over the closed
/// role enum; there is no error case because the enum has no "other"
/// member.
pub fn role_to_intent(role: Role) -> SignupIntent {
    match role {
        Role::Standard => SignupIntent::Customer,
        Role::Vendor => SignupIntent::Vendor,
        Role::Admin => SignupIntent::Admin,
    }
}

/// Derive the effective role from the two provider metadata tiers.
///
/// Precedence, highest first:
/// 1. trusted-tier `role` (settable only by privileged backend action),
///    validated against the closed enum with unknown values falling back
///    to `Standard`;
/// 2. untrusted-tier `signup_intent` (end-user-suppliable) through
///    [`intent_to_role`];
/// 3. `Standard`.
///
/// The untrusted tier must never grant an elevated role directly; it can
/// only select among what the intent vocabulary maps to, and only when
/// the trusted tier is silent.
pub fn derive_role(trusted: &TrustedMetadata, untrusted: &UntrustedMetadata) -> Role {
    if let Some(raw) = trusted.role.as_deref() {
        return Role::from_metadata_value(raw);
    }

    if let Some(intent) = untrusted.signup_intent.as_deref() {
        return intent_to_role(intent);
    }

    Role::default()
}
