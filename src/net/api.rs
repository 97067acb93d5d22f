//! REST API helpers for the storefront service.
//!
//! Client-side (hydrate): real credentialed HTTP calls via `gloo-net`, with
//! the session cookie included on every request. Server-side (SSR): the
//! request core is a stub that fails, so every endpoint degrades the same
//! way it would with no network.
//!
//! ERROR HANDLING
//! ==============
//! User-initiated calls return `Result<_, RequestError>` so the calling page
//! can display the failure. The identity fetch used by the navigation guard
//! is the one exception: every failure collapses to
//! [`IdentityResolution::Absent`] and is never surfaced as an error.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::guard::IdentityResolution;

use super::types::{
    AddCartItemRequest, Cart, Identity, LoginRequest, Product, ProductDto, RequestError,
};

/// HTTP methods the storefront endpoints use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Issue one credentialed request and normalize the response.
///
/// A 2xx answer with a parseable JSON body yields `Ok(Some(..))`; an empty
/// or non-JSON success body yields `Ok(None)`. Every request is attempted
/// exactly once: no retry, no timeout beyond the transport's own.
///
/// # Errors
///
/// [`RequestError::Status`] for a non-success status,
/// [`RequestError::Transport`] when no response was produced at all.
#[cfg(feature = "hydrate")]
async fn request<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<&impl Serialize>,
) -> Result<Option<T>, RequestError> {
    use gloo_net::http::Request;
    use web_sys::RequestCredentials;

    let transport = |e: gloo_net::Error| RequestError::Transport(e.to_string());

    let builder = match method {
        Method::Get => Request::get(path),
        Method::Post => Request::post(path),
        Method::Put => Request::put(path),
        Method::Delete => Request::delete(path),
    }
    .credentials(RequestCredentials::Include);

    let request = match body {
        Some(body) => builder.json(body).map_err(transport)?,
        None => builder.build().map_err(transport)?,
    };

    let resp = request.send().await.map_err(transport)?;
    if !resp.ok() {
        return Err(RequestError::Status {
            status: resp.status(),
            message: resp.status_text(),
        });
    }

    // Empty success bodies are fine.
    Ok(resp.json::<T>().await.ok())
}

#[cfg(not(feature = "hydrate"))]
async fn request<T: DeserializeOwned>(
    _method: Method,
    _path: &str,
    _body: Option<&impl Serialize>,
) -> Result<Option<T>, RequestError> {
    Err(RequestError::Transport("not available on server".to_owned()))
}

// =============================================================
// Auth
// =============================================================

/// `POST /api/auth/login` — establishes the session cookie used by every
/// subsequent request and returns the signed-in identity.
///
/// # Errors
///
/// Propagates the [`RequestError`] for the login form to display.
pub async fn login(username: &str, password: &str) -> Result<Identity, RequestError> {
    let body = LoginRequest { username, password };
    request(Method::Post, "/api/auth/login", Some(&body))
        .await
        .map(Option::unwrap_or_default)
}

/// `GET /api/auth/me`, relaxed for the guard: a failure of any kind (network
/// error, non-2xx status, unparseable body) is an absent identity, never an
/// error.
pub async fn fetch_identity() -> IdentityResolution {
    match request::<Identity>(Method::Get, "/api/auth/me", None::<&()>).await {
        Ok(Some(identity)) => IdentityResolution::Resolved(identity),
        Ok(None) | Err(_) => IdentityResolution::Absent,
    }
}

/// `POST /api/auth/logout` — clears the session server-side. Fire and
/// forget; a failed logout leaves the user where they are.
pub async fn logout() {
    let _ = request::<serde_json::Value>(Method::Post, "/api/auth/logout", None::<&()>).await;
}

// =============================================================
// Products
// =============================================================

/// `GET /api/products` — one page of the catalog.
///
/// # Errors
///
/// Propagates the [`RequestError`].
pub async fn list_products(page: u32, size: u32) -> Result<Vec<Product>, RequestError> {
    let path = format!("/api/products?page={page}&size={size}");
    request(Method::Get, &path, None::<&()>)
        .await
        .map(Option::unwrap_or_default)
}

/// `GET /api/products/search/name` — full-text search on product names.
///
/// # Errors
///
/// Propagates the [`RequestError`].
pub async fn search_by_name(q: &str) -> Result<Vec<Product>, RequestError> {
    let path = format!("/api/products/search/name?q={}", urlencoding::encode(q));
    request(Method::Get, &path, None::<&()>)
        .await
        .map(Option::unwrap_or_default)
}

/// `GET /api/products/search/description` — full-text search on
/// descriptions.
///
/// # Errors
///
/// Propagates the [`RequestError`].
pub async fn search_by_description(q: &str) -> Result<Vec<Product>, RequestError> {
    let path = format!(
        "/api/products/search/description?q={}",
        urlencoding::encode(q)
    );
    request(Method::Get, &path, None::<&()>)
        .await
        .map(Option::unwrap_or_default)
}

/// `POST /api/products` — create a product (admin).
///
/// # Errors
///
/// Propagates the [`RequestError`].
pub async fn create_product(dto: &ProductDto) -> Result<Option<Product>, RequestError> {
    request(Method::Post, "/api/products", Some(dto)).await
}

/// `PUT /api/products/{id}` — update a product (admin).
///
/// # Errors
///
/// Propagates the [`RequestError`].
pub async fn update_product(id: &str, dto: &ProductDto) -> Result<Option<Product>, RequestError> {
    let path = format!("/api/products/{}", urlencoding::encode(id));
    request(Method::Put, &path, Some(dto)).await
}

/// `DELETE /api/products/{id}` — delete a product (admin).
///
/// # Errors
///
/// Propagates the [`RequestError`].
pub async fn delete_product(id: &str) -> Result<(), RequestError> {
    let path = format!("/api/products/{}", urlencoding::encode(id));
    request::<serde_json::Value>(Method::Delete, &path, None::<&()>)
        .await
        .map(|_| ())
}

// =============================================================
// Cart
// =============================================================

/// `GET /api/cart` — the current session's cart.
///
/// # Errors
///
/// Propagates the [`RequestError`].
pub async fn get_cart() -> Result<Option<Cart>, RequestError> {
    request(Method::Get, "/api/cart", None::<&()>).await
}

/// `POST /api/cart/items` — add a product; the server returns the updated
/// cart.
///
/// # Errors
///
/// Propagates the [`RequestError`].
pub async fn add_to_cart(product_id: &str, amount: u32) -> Result<Option<Cart>, RequestError> {
    let body = AddCartItemRequest {
        product_id: product_id.to_owned(),
        amount,
    };
    request(Method::Post, "/api/cart/items", Some(&body)).await
}

/// `DELETE /api/cart/items/{productId}` — remove a line; the server returns
/// the updated cart.
///
/// # Errors
///
/// Propagates the [`RequestError`].
pub async fn remove_from_cart(product_id: &str) -> Result<Option<Cart>, RequestError> {
    let path = format!("/api/cart/items/{}", urlencoding::encode(product_id));
    request(Method::Delete, &path, None::<&()>).await
}

/// `POST /api/cart/restore` — restore the last saved cart for this session.
///
/// # Errors
///
/// Propagates the [`RequestError`].
pub async fn restore_cart() -> Result<Option<Cart>, RequestError> {
    request(Method::Post, "/api/cart/restore", None::<&()>).await
}

// =============================================================
// Admin reports
// =============================================================

/// `GET /api/cart/report` — carts holding more than `threshold` items
/// (admin).
///
/// # Errors
///
/// Propagates the [`RequestError`].
pub async fn sessions_over_threshold(threshold: u32) -> Result<Vec<Cart>, RequestError> {
    let path = format!("/api/cart/report?threshold={threshold}");
    request(Method::Get, &path, None::<&()>)
        .await
        .map(Option::unwrap_or_default)
}

/// `GET /api/cart/{sessionId}` — inspect another session's cart (admin).
///
/// # Errors
///
/// Propagates the [`RequestError`].
pub async fn admin_cart_for_session(session_id: &str) -> Result<Option<Cart>, RequestError> {
    let path = format!("/api/cart/{}", urlencoding::encode(session_id));
    request(Method::Get, &path, None::<&()>).await
}
