//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                 - Health check
//!
//! # Catalog
//! GET    /catalog                - All products, or `?category=<selector>`
//! GET    /catalog/{selector}     - Products for a category or promotion
//! GET    /products/{id}          - Product detail
//!
//! # Cart (JSON, every response is the full cart view)
//! GET    /cart                   - Cart contents and totals
//! DELETE /cart                   - Empty the cart
//! POST   /cart/items             - Add a product
//! PUT    /cart/items/{id}        - Set quantity (0 removes)
//! DELETE /cart/items/{id}        - Remove a product
//! ```

pub mod cart;
pub mod catalog;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(catalog::list))
        .route("/catalog/{selector}", get(catalog::by_selector))
        .route("/products/{id}", get(catalog::product))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(cart::show).delete(cart::clear))
        .route("/cart/items", post(cart::add))
        .route("/cart/items/{id}", put(cart::update).delete(cart::remove))
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(catalog_routes())
        .merge(cart_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::cart::{CartStore, MemorySlot};
    use crate::catalog::Catalog;

    fn app(slot: MemorySlot) -> Router {
        let state = AppState::new(Catalog::demo().unwrap(), CartStore::open(slot));
        router(state)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn ids(view: &Value) -> Vec<i64> {
        view["products"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _) = send(&app(MemorySlot::new()), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_catalog_selector_path_and_query_agree() {
        let app = app(MemorySlot::new());

        let (status, by_path) = send(&app, "GET", "/catalog/Sale%20%26%20Clearance", None).await;
        assert_eq!(status, StatusCode::OK);
        let (_, by_query) = send(&app, "GET", "/catalog?category=sale-clearance", None).await;

        assert_eq!(ids(&by_path), vec![1, 3, 5, 8]);
        assert_eq!(ids(&by_path), ids(&by_query));
        assert_eq!(by_path["selector"], "sale-clearance");
        assert_eq!(by_path["title"], "Sale & Clearance");
        assert_eq!(by_path["count"], 4);
    }

    #[tokio::test]
    async fn test_catalog_unfiltered_and_unknown() {
        let app = app(MemorySlot::new());

        let (_, all) = send(&app, "GET", "/catalog", None).await;
        assert_eq!(all["count"], 11);
        assert!(all["selector"].is_null());

        let (status, none) = send(&app, "GET", "/catalog/hats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(none["count"], 0);
    }

    #[tokio::test]
    async fn test_category_title_keeps_requested_text() {
        let app = app(MemorySlot::new());

        let (status, view) = send(&app, "GET", "/catalog/Hiking%20Boots", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["title"], "Hiking Boots");
        assert_eq!(view["selector"], "hiking-boots");
        assert_eq!(ids(&view), vec![4, 5]);
    }

    #[tokio::test]
    async fn test_product_detail() {
        let app = app(MemorySlot::new());

        let (status, product) = send(&app, "GET", "/products/4", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(product["category"], "Hiking Boots");

        let (status, _) = send(&app, "GET", "/products/404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_merges_and_totals() {
        let slot = MemorySlot::new();
        let app = app(slot.clone());

        let (status, cart) = send(
            &app,
            "POST",
            "/cart/items",
            Some(json!({"productId": 1, "quantity": 2, "color": "Brown", "size": "10"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cart["totalItems"], 2);
        assert_eq!(cart["totalPrice"], "379.98");
        assert_eq!(cart["originalTotalPrice"], "439.98");
        assert_eq!(cart["totalDiscount"], "60.00");

        let (_, cart) = send(&app, "POST", "/cart/items", Some(json!({"productId": 1}))).await;
        let items = cart["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["quantity"], 3);
        assert_eq!(items[0]["selectedColor"], "Brown");

        let saved: Value = serde_json::from_str(&slot.value().unwrap()).unwrap();
        assert_eq!(saved[0]["quantity"], 3);
    }

    #[tokio::test]
    async fn test_add_rejections() {
        let app = app(MemorySlot::new());

        let (status, _) = send(&app, "POST", "/cart/items", Some(json!({"productId": 99}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // Product 2 has 6 in stock.
        let (status, _) = send(
            &app,
            "POST",
            "/cart/items",
            Some(json!({"productId": 2, "quantity": 7})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            "POST",
            "/cart/items",
            Some(json!({"productId": 1, "color": "Purple"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            "POST",
            "/cart/items",
            Some(json!({"productId": 1, "quantity": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, cart) = send(&app, "GET", "/cart", None).await;
        assert_eq!(cart["isEmpty"], true);
    }

    #[tokio::test]
    async fn test_update_and_remove() {
        let app = app(MemorySlot::new());
        send(&app, "POST", "/cart/items", Some(json!({"productId": 9, "quantity": 2}))).await;
        send(&app, "POST", "/cart/items", Some(json!({"productId": 7}))).await;

        let (status, cart) = send(&app, "PUT", "/cart/items/9", Some(json!({"quantity": 5}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cart["items"][0]["quantity"], 5);
        assert_eq!(cart["totalItems"], 6);

        // Product 9 has 40 in stock.
        let (status, _) = send(&app, "PUT", "/cart/items/9", Some(json!({"quantity": 41}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "PUT", "/cart/items/3", Some(json!({"quantity": 1}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, cart) = send(&app, "PUT", "/cart/items/9", Some(json!({"quantity": 0}))).await;
        assert_eq!(cart["items"].as_array().unwrap().len(), 1);
        assert_eq!(cart["items"][0]["id"], 7);

        let (status, _) = send(&app, "DELETE", "/cart/items/9", None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, cart) = send(&app, "DELETE", "/cart/items/7", None).await;
        assert_eq!(cart["isEmpty"], true);
    }

    #[tokio::test]
    async fn test_clear() {
        let slot = MemorySlot::new();
        let app = app(slot.clone());
        send(&app, "POST", "/cart/items", Some(json!({"productId": 6}))).await;

        let (status, cart) = send(&app, "DELETE", "/cart", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cart["totalItems"], 0);
        assert_eq!(slot.value().as_deref(), Some("[]"));
    }
}
