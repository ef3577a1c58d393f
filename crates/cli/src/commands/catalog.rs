//! Catalog commands.

use hobnail_core::{Product, Selector};
use hobnail_storefront::catalog::Catalog;

/// Products for `selector` (or the whole catalog), one line each.
#[must_use]
pub fn list(catalog: &Catalog, selector: Option<&str>) -> Vec<String> {
    let (title, products): (String, Vec<&Product>) = match selector {
        Some(raw) => {
            let selector = Selector::parse(raw);
            (selector.title().into_owned(), catalog.filter(&selector))
        }
        None => ("All Products".to_string(), catalog.products().iter().collect()),
    };

    let mut lines = vec![format!("{title} ({})", products.len())];
    lines.extend(products.into_iter().map(describe));
    lines
}

fn describe(product: &Product) -> String {
    let mut line = format!("#{} {} {}", product.id, product.name, product.price);
    if let Some(original) = product.original_price {
        line.push_str(&format!(" (was {original})"));
    }
    if let Some(stock) = product.stock {
        line.push_str(&format!(" [{stock} in stock]"));
    }
    line
}
