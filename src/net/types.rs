//! Wire types shared with the storefront service.
//!
//! Field names follow the service's camelCase JSON. Prices travel as JSON
//! numbers; the client only displays them and never does arithmetic on them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Failure of an explicit, user-initiated request. Propagated to the calling
/// page for display; the guard's background identity check never produces
/// one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The server answered with a non-success status.
    #[error("{status} {message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
}

/// The authenticated principal as reported by `/api/auth/me` and login.
///
/// `roles` may arrive with the provider's `ROLE_` marker still attached; the
/// guard normalizes before comparing. Profile fields the guard does not
/// interpret are ignored on deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Body for `POST /api/auth/login`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// A catalog product as the service returns it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}

/// Create/update payload for a product. The service assigns the id.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProductDto {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Prefill an edit payload from an existing product; the id travels in the
/// URL, not the body.
impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            sku: product.sku.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
        }
    }
}

/// One line of a cart.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    pub amount: u32,
    pub total_price: f64,
}

/// A session's cart, as returned by the cart endpoints and the admin report.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub session_id: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

/// Body for `POST /api/cart/items`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub product_id: String,
    pub amount: u32,
}
