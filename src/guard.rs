//! Navigation-authorization guard.
//!
//! Every route transition funnels through [`check`]: resolve the identity
//! fresh from the server (never cached), then decide whether the transition
//! may proceed and, if not, where to send the user instead. The decision
//! itself is the pure function [`evaluate`], so every branch is testable
//! without a browser or a network.
//!
//! FAILURE POLICY
//! ==============
//! The guard never raises a user-visible error. Transport failures, non-2xx
//! statuses and unparseable bodies during identity resolution all collapse
//! into "no identity", which deterministically becomes a login redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Identity;
use crate::routes::{self, RouteMeta};

/// Marker some identity providers prepend to role names on the wire.
pub const ROLE_PREFIX: &str = "ROLE_";

/// Outcome of resolving the identity endpoint for one navigation attempt.
///
/// A tagged result rather than an `Option` in disguise: the absent branch is
/// a first-class decision input, not a swallowed error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum IdentityResolution {
    /// The endpoint answered 2xx with a parseable identity.
    Resolved(Identity),
    /// Anything else. Ambiguity about identity means logged out.
    #[default]
    Absent,
}

/// The guard's verdict for one navigation attempt. Exactly one is produced
/// per attempt; there is no backtracking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Let the transition proceed.
    Allow,
    /// Send the user elsewhere instead.
    Redirect {
        to: RouteMeta,
        /// The attempted full path, carried to the login form so it can
        /// return the user there after a successful sign-in.
        redirect: Option<String>,
    },
}

impl Decision {
    /// Target href for a redirect decision, query string included.
    /// `Allow` has no href.
    pub fn href(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::Redirect { to, redirect: Some(path) } => Some(format!(
                "{}?redirect={}",
                to.path,
                urlencoding::encode(path)
            )),
            Self::Redirect { to, redirect: None } => Some(to.path.to_owned()),
        }
    }
}

/// Full attempted path for one navigation attempt: the pathname plus the
/// query string when one is present. This is the value carried through a
/// login redirect's `redirect` parameter.
pub fn attempted_path(pathname: &str, search: &str) -> String {
    let search = search.strip_prefix('?').unwrap_or(search);
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Strip the [`ROLE_PREFIX`] marker from a raw role name. Names without the
/// marker pass through unchanged; comparison stays case-sensitive.
pub fn normalize_role(raw: &str) -> &str {
    raw.strip_prefix(ROLE_PREFIX).unwrap_or(raw)
}

/// Whether navigating to `target` needs a resolved identity at all.
///
/// The login route and routes not marked `requires_auth` are open, with one
/// exception: a non-empty role list implies authentication even when the
/// route forgot to set the flag.
pub fn requires_identity(target: &RouteMeta) -> bool {
    if target.name == routes::LOGIN.name {
        return false;
    }
    target.requires_auth || !target.roles.is_empty()
}

/// Decide one navigation attempt from its target metadata and a resolved
/// identity. Pure and stateless: identical inputs always yield the identical
/// decision.
///
/// Evaluation order is fixed: open routes first, then authentication, then
/// roles. An identity lacking every required role is redirected to the
/// fallback authenticated route, not to login, since the session itself is
/// valid.
pub fn evaluate(
    target: &RouteMeta,
    attempted_path: &str,
    identity: &IdentityResolution,
) -> Decision {
    if !requires_identity(target) {
        return Decision::Allow;
    }

    let IdentityResolution::Resolved(identity) = identity else {
        return Decision::Redirect {
            to: routes::LOGIN,
            redirect: Some(attempted_path.to_owned()),
        };
    };

    if target.roles.is_empty() {
        return Decision::Allow;
    }

    // OR semantics: any one of the required roles suffices.
    let allowed = identity
        .roles
        .iter()
        .any(|raw| target.roles.contains(&normalize_role(raw)));

    if allowed {
        Decision::Allow
    } else {
        Decision::Redirect {
            to: routes::FALLBACK,
            redirect: None,
        }
    }
}

/// Gate one route transition. Identity is fetched only when the target needs
/// it; open routes never touch the network. Never fails.
pub async fn check(target: &RouteMeta, attempted_path: &str) -> Decision {
    if !requires_identity(target) {
        return Decision::Allow;
    }

    let identity = crate::net::api::fetch_identity().await;
    let decision = evaluate(target, attempted_path, &identity);
    leptos::logging::log!("[guard] {attempted_path} -> {decision:?}");
    decision
}
