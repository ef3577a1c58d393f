//! Cart route handlers.
//!
//! Every handler returns the full cart view so a client can re-render the
//! line items and totals from a single response.

use axum::{
    Json,
    extract::{Path, State},
};
use hobnail_core::{CartEntry, CartTotals, ProductId, Selection};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cart::{CartStore, check_add, check_selection, check_set_quantity};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Cart contents and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartEntry>,
    #[serde(flatten)]
    pub totals: CartTotals,
}

impl From<&CartStore> for CartView {
    fn from(store: &CartStore) -> Self {
        Self {
            items: store.snapshot().to_vec(),
            totals: store.totals(),
        }
    }
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartForm {
    pub product_id: ProductId,
    pub quantity: Option<u32>,
    pub color: Option<String>,
    pub size: Option<String>,
}

/// Update quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub quantity: u32,
}

/// Show the cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<CartView>> {
    let cart = state.cart()?;
    Ok(Json(CartView::from(&*cart)))
}

/// Add a catalog product to the cart.
///
/// Quantity defaults to one. The resulting quantity may not exceed tracked
/// stock, and any chosen color or size must be offered by the product.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(form): Json<AddToCartForm>,
) -> Result<Json<CartView>> {
    let product = state
        .catalog()
        .get(form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let quantity = form.quantity.unwrap_or(1);
    let selection = Selection {
        color: form.color,
        size: form.size,
    };
    check_selection(product, &selection)?;

    let mut cart = state.cart()?;
    check_add(product, cart.quantity_of(product.id), quantity)?;
    cart.add(product, quantity, selection);

    Ok(Json(CartView::from(&*cart)))
}

/// Replace the quantity of a cart entry. Zero removes it.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    Json(form): Json<UpdateCartForm>,
) -> Result<Json<CartView>> {
    let mut cart = state.cart()?;
    if cart.entry(product_id).is_none() {
        return Err(AppError::NotFound(format!(
            "product {product_id} is not in the cart"
        )));
    }

    // Entries whose product left the catalog can still be changed; there is
    // no stock figure to check them against.
    if let Some(product) = state.catalog().get(product_id) {
        check_set_quantity(product, form.quantity)?;
    }
    cart.set_quantity(product_id, form.quantity);

    Ok(Json(CartView::from(&*cart)))
}

/// Remove a cart entry. Removing an absent entry succeeds.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<Json<CartView>> {
    let mut cart = state.cart()?;
    cart.remove(product_id);
    Ok(Json(CartView::from(&*cart)))
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<Json<CartView>> {
    let mut cart = state.cart()?;
    cart.clear();
    Ok(Json(CartView::from(&*cart)))
}
