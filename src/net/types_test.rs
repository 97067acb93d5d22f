use super::*;

// =============================================================
// Identity
// =============================================================

#[test]
fn identity_keeps_prefixed_roles_verbatim() {
    let identity: Identity =
        serde_json::from_str(r#"{"username":"admin","roles":["ROLE_ADMIN","ROLE_USER"]}"#)
            .expect("identity");
    assert_eq!(identity.username, "admin");
    assert_eq!(identity.roles, ["ROLE_ADMIN", "ROLE_USER"]);
}

#[test]
fn identity_tolerates_a_missing_roles_field() {
    let identity: Identity = serde_json::from_str(r#"{"username":"guest"}"#).expect("identity");
    assert!(identity.roles.is_empty());
}

#[test]
fn identity_ignores_uninterpreted_profile_fields() {
    let identity: Identity = serde_json::from_str(
        r#"{"username":"a","roles":[],"displayName":"Alice","theme":"dark"}"#,
    )
    .expect("identity");
    assert_eq!(identity.username, "a");
}

// =============================================================
// Cart and product wire shapes
// =============================================================

#[test]
fn cart_deserializes_camel_case_field_names() {
    let cart: Cart = serde_json::from_str(
        r#"{"sessionId":"s-1","items":[{"productId":"p-1","name":"Wireless Mouse","shortDescription":"Ergonomic","amount":2,"totalPrice":59.98}]}"#,
    )
    .expect("cart");
    assert_eq!(cart.session_id, "s-1");
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].product_id, "p-1");
    assert_eq!(cart.items[0].amount, 2);
}

#[test]
fn cart_tolerates_missing_items() {
    let cart: Cart = serde_json::from_str(r#"{"sessionId":"s-2"}"#).expect("cart");
    assert!(cart.items.is_empty());
}

#[test]
fn add_cart_item_request_serializes_camel_case() {
    let body = serde_json::to_value(AddCartItemRequest {
        product_id: "p-1".to_owned(),
        amount: 3,
    })
    .expect("json");
    assert_eq!(body, serde_json::json!({"productId": "p-1", "amount": 3}));
}

#[test]
fn product_dto_prefills_every_field_from_a_product() {
    let product = Product {
        id: "p-1".to_owned(),
        sku: "SKU-1".to_owned(),
        name: "Wireless Mouse".to_owned(),
        description: "Ergonomic".to_owned(),
        price: 29.99,
    };
    let dto = ProductDto::from(&product);
    assert_eq!(dto.sku, "SKU-1");
    assert_eq!(dto.name, "Wireless Mouse");
    assert_eq!(dto.description, "Ergonomic");
    assert!((dto.price - 29.99).abs() < f64::EPSILON);
}

#[test]
fn product_description_defaults_to_empty() {
    let product: Product =
        serde_json::from_str(r#"{"id":"p-9","sku":"SKU-9","name":"Lamp","price":12.5}"#)
            .expect("product");
    assert_eq!(product.description, "");
}

// =============================================================
// RequestError
// =============================================================

#[test]
fn request_error_displays_the_status_line() {
    let err = RequestError::Status {
        status: 403,
        message: "Forbidden".to_owned(),
    };
    assert_eq!(err.to_string(), "403 Forbidden");
}

#[test]
fn transport_error_displays_the_cause() {
    let err = RequestError::Transport("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}
