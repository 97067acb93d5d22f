use super::*;

// =============================================================
// Path resolution
// =============================================================

#[test]
fn resolve_matches_served_paths() {
    assert_eq!(resolve("/login"), LOGIN);
    assert_eq!(resolve("/user"), USER_HOME);
    assert_eq!(resolve("/admin"), ADMIN_HOME);
}

#[test]
fn unknown_paths_fall_through_to_login() {
    assert_eq!(resolve("/"), LOGIN);
    assert_eq!(resolve(""), LOGIN);
    assert_eq!(resolve("/no/such/page"), LOGIN);
}

#[test]
fn query_and_fragment_do_not_affect_resolution() {
    assert_eq!(resolve("/admin?tab=report"), ADMIN_HOME);
    assert_eq!(resolve("/user#cart"), USER_HOME);
}

// =============================================================
// Table shape
// =============================================================

#[test]
fn admin_requires_the_admin_role() {
    assert!(ADMIN_HOME.requires_auth);
    assert_eq!(ADMIN_HOME.roles, ["ADMIN"]);
}

#[test]
fn user_home_requires_auth_but_no_roles() {
    assert!(USER_HOME.requires_auth);
    assert!(USER_HOME.roles.is_empty());
}

#[test]
fn fallback_is_the_user_home_not_login() {
    assert_eq!(FALLBACK, USER_HOME);
    assert_ne!(FALLBACK, LOGIN);
}
