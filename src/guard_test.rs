use super::*;
use crate::net::types::Identity;
use crate::routes;

fn identity(roles: &[&str]) -> IdentityResolution {
    IdentityResolution::Resolved(Identity {
        username: "alice".to_owned(),
        roles: roles.iter().map(|r| (*r).to_owned()).collect(),
    })
}

// =============================================================
// Role normalization
// =============================================================

#[test]
fn normalize_role_strips_the_marker() {
    assert_eq!(normalize_role("ROLE_ADMIN"), "ADMIN");
}

#[test]
fn normalize_role_passes_unmarked_names_through() {
    assert_eq!(normalize_role("ADMIN"), "ADMIN");
    assert_eq!(normalize_role(""), "");
}

#[test]
fn normalize_role_is_case_sensitive() {
    assert_eq!(normalize_role("role_admin"), "role_admin");
}

#[test]
fn normalize_role_strips_only_one_leading_marker() {
    assert_eq!(normalize_role("ROLE_ROLE_X"), "ROLE_X");
}

// =============================================================
// Attempted path assembly
// =============================================================

#[test]
fn attempted_path_includes_the_query_string() {
    assert_eq!(attempted_path("/user", "tab=cart"), "/user?tab=cart");
}

#[test]
fn attempted_path_without_query_is_the_pathname() {
    assert_eq!(attempted_path("/admin", ""), "/admin");
}

#[test]
fn attempted_path_tolerates_a_leading_question_mark() {
    assert_eq!(attempted_path("/user", "?tab=cart"), "/user?tab=cart");
}

// =============================================================
// Unrestricted routes
// =============================================================

#[test]
fn login_route_always_allows() {
    assert_eq!(
        evaluate(&routes::LOGIN, "/login", &IdentityResolution::Absent),
        Decision::Allow
    );
    assert_eq!(
        evaluate(&routes::LOGIN, "/login", &identity(&["ROLE_USER"])),
        Decision::Allow
    );
}

#[test]
fn open_routes_never_need_identity_resolution() {
    assert!(!requires_identity(&routes::LOGIN));
    let open = routes::RouteMeta {
        name: "about",
        path: "/about",
        requires_auth: false,
        roles: &[],
    };
    assert!(!requires_identity(&open));
    assert_eq!(evaluate(&open, "/about", &IdentityResolution::Absent), Decision::Allow);
}

#[test]
fn a_role_list_implies_auth_even_without_the_flag() {
    let meta = routes::RouteMeta {
        name: "reports",
        path: "/reports",
        requires_auth: false,
        roles: &["ADMIN"],
    };
    assert!(requires_identity(&meta));
    // Auth is checked before roles: no identity means login, not fallback.
    assert_eq!(
        evaluate(&meta, "/reports", &IdentityResolution::Absent),
        Decision::Redirect {
            to: routes::LOGIN,
            redirect: Some("/reports".to_owned()),
        }
    );
}

// =============================================================
// Unauthenticated navigation
// =============================================================

#[test]
fn absent_identity_redirects_to_login_with_the_attempted_path() {
    let decision = evaluate(&routes::ADMIN_HOME, "/admin", &IdentityResolution::Absent);
    assert_eq!(
        decision,
        Decision::Redirect {
            to: routes::LOGIN,
            redirect: Some("/admin".to_owned()),
        }
    );
}

#[test]
fn login_redirect_href_percent_encodes_the_attempted_path() {
    let decision = evaluate(&routes::USER_HOME, "/user?tab=cart", &IdentityResolution::Absent);
    assert_eq!(
        decision.href().as_deref(),
        Some("/login?redirect=%2Fuser%3Ftab%3Dcart")
    );
}

// =============================================================
// Role checks
// =============================================================

#[test]
fn prefixed_admin_role_allows_the_admin_route() {
    assert_eq!(
        evaluate(&routes::ADMIN_HOME, "/admin", &identity(&["ROLE_ADMIN"])),
        Decision::Allow
    );
}

#[test]
fn under_privileged_identity_falls_back_to_user_home() {
    let decision = evaluate(&routes::ADMIN_HOME, "/admin", &identity(&["ROLE_USER"]));
    assert_eq!(
        decision,
        Decision::Redirect {
            to: routes::FALLBACK,
            redirect: None,
        }
    );
    // Fallback redirect carries no query parameters.
    assert_eq!(decision.href().as_deref(), Some("/user"));
}

#[test]
fn any_single_required_role_suffices() {
    let meta = routes::RouteMeta {
        name: "ops",
        path: "/ops",
        requires_auth: true,
        roles: &["ADMIN", "OPS"],
    };
    assert_eq!(evaluate(&meta, "/ops", &identity(&["ROLE_OPS"])), Decision::Allow);
}

#[test]
fn unprefixed_roles_compare_directly() {
    assert_eq!(
        evaluate(&routes::ADMIN_HOME, "/admin", &identity(&["ADMIN"])),
        Decision::Allow
    );
}

#[test]
fn role_free_route_allows_any_present_identity() {
    assert_eq!(evaluate(&routes::USER_HOME, "/user", &identity(&[])), Decision::Allow);
    assert_eq!(
        evaluate(&routes::USER_HOME, "/user", &identity(&["ROLE_USER"])),
        Decision::Allow
    );
}

// =============================================================
// Statelessness
// =============================================================

#[test]
fn evaluate_is_idempotent_for_identical_inputs() {
    let id = identity(&["ROLE_USER"]);
    let first = evaluate(&routes::ADMIN_HOME, "/admin", &id);
    let second = evaluate(&routes::ADMIN_HOME, "/admin", &id);
    assert_eq!(first, second);
}

#[test]
fn allow_has_no_redirect_href() {
    let decision = evaluate(&routes::LOGIN, "/login", &IdentityResolution::Absent);
    assert_eq!(decision.href(), None);
}
