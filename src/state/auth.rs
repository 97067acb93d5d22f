#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Identity;

/// Authentication state tracking the signed-in identity and loading status.
///
/// Held in a context `RwSignal` by the root component so pages can greet the
/// user and toggle admin affordances. The navigation guard never reads it:
/// identity is re-resolved from the server on every protected navigation.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub identity: Option<Identity>,
    pub loading: bool,
}
