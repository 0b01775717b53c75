use crate::api::redirect::{
    ADMIN_PANEL_ROOT, SITE_ROOT, STUDIO_ROOT, VENDOR_PORTAL_ROOT, resolve_redirect,
};

use ids_core::Role;

// =============================================================================
// Role defaults
// =============================================================================

#[test]
fn test_vendor_without_continue_path_lands_on_vendor_portal() {
    assert_eq!(
        resolve_redirect(Role::Vendor, None, None),
        VENDOR_PORTAL_ROOT
    );
}

#[test]
fn test_admin_without_continue_path_lands_on_admin_panel() {
    assert_eq!(resolve_redirect(Role::Admin, None, None), ADMIN_PANEL_ROOT);
}

#[test]
fn test_standard_without_continue_path_lands_on_site_root() {
    assert_eq!(resolve_redirect(Role::Standard, None, None), SITE_ROOT);
}

// =============================================================================
// Explicit continue path
// =============================================================================

#[test]
fn test_safe_continue_path_is_honored() {
    assert_eq!(
        resolve_redirect(Role::Standard, Some("/jobs/42"), None),
        "/jobs/42"
    );
}

#[test]
fn test_continue_path_into_admin_area_is_rejected() {
    assert_eq!(
        resolve_redirect(Role::Standard, Some("/admin"), None),
        SITE_ROOT
    );
    assert_eq!(
        resolve_redirect(Role::Standard, Some("/admin/users"), None),
        SITE_ROOT
    );
}

#[test]
fn test_continue_path_into_sign_in_loop_is_rejected() {
    assert_eq!(
        resolve_redirect(Role::Admin, Some("/login"), None),
        ADMIN_PANEL_ROOT
    );
    assert_eq!(
        resolve_redirect(Role::Standard, Some("/signup"), None),
        SITE_ROOT
    );
    assert_eq!(
        resolve_redirect(Role::Standard, Some("/verify-email?code=1"), None),
        SITE_ROOT
    );
}

#[test]
fn test_continue_path_prefix_match_requires_segment_boundary() {
    // "/administrivia" shares a prefix with "/admin" but is a different page
    assert_eq!(
        resolve_redirect(Role::Standard, Some("/administrivia"), None),
        "/administrivia"
    );
    assert_eq!(
        resolve_redirect(Role::Standard, Some("/loginhelp"), None),
        "/loginhelp"
    );
}

#[test]
fn test_absolute_and_protocol_relative_urls_are_rejected() {
    assert_eq!(
        resolve_redirect(Role::Standard, Some("https://evil.example.com"), None),
        SITE_ROOT
    );
    assert_eq!(
        resolve_redirect(Role::Standard, Some("//evil.example.com"), None),
        SITE_ROOT
    );
    assert_eq!(
        resolve_redirect(Role::Standard, Some("/\\evil.example.com"), None),
        SITE_ROOT
    );
    assert_eq!(resolve_redirect(Role::Standard, Some(""), None), SITE_ROOT);
}

#[test]
fn test_continue_path_beats_ambient_hint() {
    assert_eq!(
        resolve_redirect(Role::Standard, Some("/jobs/42"), Some("studio")),
        "/jobs/42"
    );
}

// =============================================================================
// Ambient studio-flow context
// =============================================================================

#[test]
fn test_studio_hint_routes_standard_to_studio_root() {
    assert_eq!(
        resolve_redirect(Role::Standard, None, Some("studio")),
        STUDIO_ROOT
    );
    assert_eq!(
        resolve_redirect(Role::Standard, None, Some("/studio/booking")),
        STUDIO_ROOT
    );
}

#[test]
fn test_studio_hint_never_overrides_vendor_or_admin() {
    assert_eq!(
        resolve_redirect(Role::Vendor, None, Some("studio")),
        VENDOR_PORTAL_ROOT
    );
    assert_eq!(
        resolve_redirect(Role::Admin, None, Some("/studio")),
        ADMIN_PANEL_ROOT
    );
}

#[test]
fn test_non_studio_hint_is_ignored() {
    assert_eq!(
        resolve_redirect(Role::Standard, None, Some("/studios")),
        SITE_ROOT
    );
    assert_eq!(
        resolve_redirect(Role::Standard, None, Some("checkout")),
        SITE_ROOT
    );
}

#[test]
fn test_rejected_continue_path_still_applies_ambient_hint() {
    assert_eq!(
        resolve_redirect(Role::Standard, Some("/admin"), Some("studio")),
        STUDIO_ROOT
    );
}
