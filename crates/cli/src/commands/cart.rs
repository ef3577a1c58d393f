//! Cart commands.

use hobnail_core::{ProductId, Selection};
use hobnail_storefront::cart::{CartStore, check_add, check_selection, check_set_quantity};
use hobnail_storefront::catalog::Catalog;

use super::CommandError;

/// Add a catalog product, applying the same limits as the storefront.
///
/// # Errors
///
/// Returns an error if the product is unknown, the quantity is zero or over
/// stock, or the selection names an option the product does not offer.
pub fn add(
    store: &mut CartStore,
    catalog: &Catalog,
    product_id: ProductId,
    quantity: u32,
    selection: Selection,
) -> Result<(), CommandError> {
    let product = catalog
        .get(product_id)
        .ok_or(CommandError::UnknownProduct(product_id))?;
    check_selection(product, &selection)?;
    check_add(product, store.quantity_of(product_id), quantity)?;
    store.add(product, quantity, selection);
    Ok(())
}

/// Remove a product. Absent products are ignored.
pub fn remove(store: &mut CartStore, product_id: ProductId) {
    store.remove(product_id);
}

/// Set a line's quantity; zero removes it.
///
/// # Errors
///
/// Returns an error if the product is not in the cart or the quantity is over
/// stock.
pub fn set(
    store: &mut CartStore,
    catalog: &Catalog,
    product_id: ProductId,
    quantity: u32,
) -> Result<(), CommandError> {
    if store.entry(product_id).is_none() {
        return Err(CommandError::NotInCart(product_id));
    }
    if let Some(product) = catalog.get(product_id) {
        check_set_quantity(product, quantity)?;
    }
    store.set_quantity(product_id, quantity);
    Ok(())
}

/// Cart lines followed by totals.
#[must_use]
pub fn render(store: &CartStore) -> Vec<String> {
    if store.is_empty() {
        return vec!["Cart is empty".to_string()];
    }

    let mut lines: Vec<String> = store
        .snapshot()
        .iter()
        .map(|entry| {
            let options: Vec<&str> = [entry.selected_color.as_deref(), entry.selected_size.as_deref()]
                .into_iter()
                .flatten()
                .collect();
            let options = if options.is_empty() {
                String::new()
            } else {
                format!(" ({})", options.join(", "))
            };
            format!(
                "#{} {}{} x{} @ {} = {}",
                entry.product_id,
                entry.name,
                options,
                entry.quantity,
                entry.price,
                entry.line_total()
            )
        })
        .collect();

    let totals = store.totals();
    lines.push(format!("Items: {}", totals.total_items));
    lines.push(format!("Subtotal: {}", totals.total_price));
    if totals.total_discount > hobnail_core::Price::ZERO {
        lines.push(format!("You save: {}", totals.total_discount));
    }
    lines
}
