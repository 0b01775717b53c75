use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str_round_trip() {
    for role in [Role::Standard, Role::Vendor, Role::Admin] {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_role_from_str_rejects_unknown() {
    let result = Role::from_str("superuser");

    assert!(matches!(result, Err(CoreError::InvalidRole { .. })));
}

#[test]
fn test_role_from_metadata_value_falls_back_to_standard() {
    assert_eq!(Role::from_metadata_value("vendor"), Role::Vendor);
    assert_eq!(Role::from_metadata_value("admin"), Role::Admin);
    assert_eq!(Role::from_metadata_value("superuser"), Role::Standard);
    assert_eq!(Role::from_metadata_value(""), Role::Standard);
}

#[test]
fn test_role_default_is_standard() {
    assert_eq!(Role::default(), Role::Standard);
}
