//! Response DTOs for computed order totals.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{calculate_item_total, calculate_subtotal};
use super::models::{LineItem, PriceAddon, Product};

/// Computed totals for display next to the order form. Money is
/// serialized as strings.
#[derive(Debug, Clone, Serialize)]
pub struct SubtotalResponse {
    /// Sum of line totals before any addon is applied.
    #[serde(with = "rust_decimal::serde::str")]
    pub items_total: Decimal,
    /// Final subtotal after the addon fold.
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
}

/// Compute the totals a host renders for an order.
pub fn subtotal_response(
    products: &[Product],
    items: &[LineItem],
    price_addons: &[PriceAddon],
) -> SubtotalResponse {
    let items_total = items
        .iter()
        .map(|item| calculate_item_total(products, item))
        .sum();

    SubtotalResponse {
        items_total,
        subtotal: calculate_subtotal(products, items, price_addons),
    }
}
