use crate::{
    Role, SignupIntent, TrustedMetadata, UntrustedMetadata, derive_role, intent_to_role,
    role_to_intent,
};

#[test]
fn test_intent_to_role_known_values() {
    assert_eq!(intent_to_role("customer"), Role::Standard);
    assert_eq!(intent_to_role("vendor"), Role::Vendor);
    assert_eq!(intent_to_role("admin"), Role::Admin);
}

#[test]
fn test_intent_to_role_unknown_maps_to_standard() {
    assert_eq!(intent_to_role("wedding-planner"), Role::Standard);
    assert_eq!(intent_to_role(""), Role::Standard);
}

#[test]
fn test_role_to_intent_is_inverse_of_intent_to_role() {
    for intent in [
        SignupIntent::Customer,
        SignupIntent::Vendor,
        SignupIntent::Admin,
    ] {
        assert_eq!(role_to_intent(intent_to_role(intent.as_str())), intent);
    }
}

#[test]
fn test_derive_role_trusted_tier_wins() {
    let trusted = TrustedMetadata {
        role: Some("standard".to_string()),
    };
    let untrusted = UntrustedMetadata {
        signup_intent: Some("vendor".to_string()),
    };

    assert_eq!(derive_role(&trusted, &untrusted), Role::Standard);
}

#[test]
fn test_derive_role_unknown_trusted_value_falls_back_to_standard() {
    let trusted = TrustedMetadata {
        role: Some("superuser".to_string()),
    };
    let untrusted = UntrustedMetadata::default();

    assert_eq!(derive_role(&trusted, &untrusted), Role::Standard);
}

#[test]
fn test_derive_role_untrusted_intent_applies_when_trusted_silent() {
    let trusted = TrustedMetadata::default();
    let untrusted = UntrustedMetadata {
        signup_intent: Some("vendor".to_string()),
    };

    assert_eq!(derive_role(&trusted, &untrusted), Role::Vendor);
}

#[test]
fn test_derive_role_defaults_to_standard() {
    assert_eq!(
        derive_role(&TrustedMetadata::default(), &UntrustedMetadata::default()),
        Role::Standard
    );
}
