//! Static route table for the storefront SPA.
//!
//! The navigation guard consumes this metadata read-only; it never owns or
//! mutates it. Role names listed here are already normalized (no `ROLE_`
//! marker).

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Static metadata attached to one route definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub name: &'static str,
    pub path: &'static str,
    pub requires_auth: bool,
    /// Required roles, any one of which suffices. Empty means any
    /// authenticated identity may enter.
    pub roles: &'static [&'static str],
}

/// Login form; open to everyone.
pub const LOGIN: RouteMeta = RouteMeta {
    name: "login",
    path: "/login",
    requires_auth: false,
    roles: &[],
};

/// Home for authenticated users: catalog plus their cart.
pub const USER_HOME: RouteMeta = RouteMeta {
    name: "user",
    path: "/user",
    requires_auth: true,
    roles: &[],
};

/// Product management and the cart session report.
pub const ADMIN_HOME: RouteMeta = RouteMeta {
    name: "admin",
    path: "/admin",
    requires_auth: true,
    roles: &["ADMIN"],
};

/// Where authenticated-but-under-privileged users land instead of an error
/// screen. Distinct from the login route on purpose.
pub const FALLBACK: RouteMeta = USER_HOME;

/// Every served route, in declaration order.
pub const ALL: &[RouteMeta] = &[LOGIN, USER_HOME, ADMIN_HOME];

/// Resolve the route owning `path`, ignoring any query string or fragment.
/// Unknown paths (including `/`) resolve to the login route, matching the
/// router's catch-all redirect.
pub fn resolve(path: &str) -> RouteMeta {
    let route_path = path.split(['?', '#']).next().unwrap_or(path);
    ALL.iter()
        .copied()
        .find(|route| route.path == route_path)
        .unwrap_or(LOGIN)
}
