//! Catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use hobnail_core::{Product, ProductId, Selector};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for the catalog listing.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Category or promotion selector; all products when absent.
    pub category: Option<String>,
}

/// A catalog listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    /// Selector slug, absent for the unfiltered listing.
    pub selector: Option<String>,
    pub title: String,
    pub count: usize,
    pub products: Vec<Product>,
}

impl CatalogView {
    fn all(catalog: &Catalog) -> Self {
        Self {
            selector: None,
            title: "All Products".to_string(),
            count: catalog.len(),
            products: catalog.products().to_vec(),
        }
    }

    fn filtered(catalog: &Catalog, selector: &Selector) -> Self {
        let products: Vec<Product> = catalog.filter(selector).into_iter().cloned().collect();
        Self {
            selector: Some(selector.slug().into_owned()),
            title: selector.title().into_owned(),
            count: products.len(),
            products,
        }
    }
}

/// List products, optionally narrowed by `?category=`.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<CatalogView> {
    let view = match query.category.as_deref() {
        Some(raw) => CatalogView::filtered(state.catalog(), &Selector::parse(raw)),
        None => CatalogView::all(state.catalog()),
    };
    Json(view)
}

/// List products for a category or promotion path segment.
#[instrument(skip(state))]
pub async fn by_selector(
    State(state): State<AppState>,
    Path(selector): Path<String>,
) -> Json<CatalogView> {
    Json(CatalogView::filtered(
        state.catalog(),
        &Selector::parse(&selector),
    ))
}

/// Product detail.
#[instrument(skip(state))]
pub async fn product(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .get(product_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))
}
