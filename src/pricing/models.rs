//! Domain types for order pricing.
//!
//! These are the coerced shapes the calculators operate on. Form-shaped
//! input (see [`super::requests`]) is converted into these exactly once
//! at the boundary; an empty form value and a missing one both become
//! `None` here.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One purchased unit in an order. Read-only input; identity is its
/// position in the submitted sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItem {
    /// Explicit unit price override, still in raw form (e.g. "$12.00").
    pub custom_price: Option<String>,
    pub product_id: Option<String>,
    pub variant_id: Option<String>,
    /// Raw quantity string; absent means 1.
    pub quantity: Option<String>,
}

/// Addon kind. Unrecognized non-empty kinds are kept as `Other` because
/// they still add flat amounts and still trigger the percentage
/// re-application step in the subtotal fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddonKind {
    Discount,
    Taxes,
    Fees,
    Shipping,
    Other(String),
}

impl AddonKind {
    /// Map a non-empty form value to a kind.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "discount" => AddonKind::Discount,
            "taxes" => AddonKind::Taxes,
            "fees" => AddonKind::Fees,
            "shipping" => AddonKind::Shipping,
            other => AddonKind::Other(other.to_string()),
        }
    }
}

/// One subtotal adjustment, flat or percentage-based. Order within the
/// submitted sequence is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceAddon {
    /// `None` when the form left the kind unset; such addons are
    /// skipped by the subtotal fold.
    pub kind: Option<AddonKind>,
    /// Raw amount string with formatting noise ("$1,200").
    pub amount: Option<String>,
    pub is_percentage: bool,
}

/// Catalog product with its sellable variants.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// Product variant carrying the sell price.
#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    pub id: String,
    #[serde(default)]
    pub price: Decimal,
}
