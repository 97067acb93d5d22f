//! # storefront-client
//!
//! Leptos + WASM frontend for the redis-cart storefront service: a login
//! form, a user-facing catalog/cart page and an admin page, with every
//! protected route transition gated by a navigation-authorization guard
//! that re-resolves the session identity on each attempt.
//!
//! The guard's decision logic (`guard`) and the route table (`routes`) are
//! pure and test natively; browser-only networking is gated behind the
//! `hydrate` feature.

pub mod app;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
