use crate::{EventKind, IdentityEvent, Role};

fn parse(json: &str) -> IdentityEvent {
    serde_json::from_str(json).expect("event should parse")
}

#[test]
fn test_full_created_payload_parses() {
    let event = parse(
        r#"{
            "type": "user.created",
            "data": {
                "id": "user_2abc",
                "email_addresses": [
                    {"id": "idn_1", "email_address": "dana@example.com"},
                    {"id": "idn_2", "email_address": "dana.alt@example.com"}
                ],
                "primary_email_address_id": "idn_2",
                "first_name": "Dana",
                "last_name": "Reyes",
                "image_url": "https://img.example.com/dana.png",
                "public_metadata": {"role": "vendor"},
                "unsafe_metadata": {"signup_intent": "customer"}
            }
        }"#,
    );

    assert_eq!(event.kind(), EventKind::Created);
    assert_eq!(event.data.id, "user_2abc");
    assert_eq!(event.data.primary_email(), Some("dana.alt@example.com"));
    assert_eq!(event.data.display_name(), Some("Dana Reyes".to_string()));
    assert_eq!(
        event.data.image_url.as_deref(),
        Some("https://img.example.com/dana.png")
    );
    assert_eq!(event.data.role(), Role::Vendor);
}

#[test]
fn test_minimal_payload_parses_with_defaults() {
    let event = parse(r#"{"type": "user.created", "data": {"id": "user_2min"}}"#);

    assert_eq!(event.data.primary_email(), None);
    assert_eq!(event.data.display_name(), None);
    assert_eq!(event.data.role(), Role::Standard);
}

#[test]
fn test_primary_email_falls_back_to_first_listed() {
    let event = parse(
        r#"{
            "type": "user.updated",
            "data": {
                "id": "user_2abc",
                "email_addresses": [
                    {"id": "idn_1", "email_address": "first@example.com"},
                    {"id": "idn_2", "email_address": "second@example.com"}
                ],
                "primary_email_address_id": "idn_gone"
            }
        }"#,
    );

    assert_eq!(event.data.primary_email(), Some("first@example.com"));
}

#[test]
fn test_unknown_event_type_is_other() {
    let event = parse(r#"{"type": "session.created", "data": {"id": "user_2abc"}}"#);

    assert_eq!(event.kind(), EventKind::Other);
}

#[test]
fn test_unknown_metadata_fields_are_ignored() {
    let event = parse(
        r#"{
            "type": "user.created",
            "data": {
                "id": "user_2abc",
                "public_metadata": {"role": "admin", "theme": "dark"},
                "unsafe_metadata": {"signup_intent": "vendor", "referrer": "ad"}
            }
        }"#,
    );

    assert_eq!(event.data.role(), Role::Admin);
}

#[test]
fn test_display_name_with_single_part() {
    let event = parse(
        r#"{"type": "user.created", "data": {"id": "user_2abc", "first_name": "Dana"}}"#,
    );

    assert_eq!(event.data.display_name(), Some("Dana".to_string()));
}
