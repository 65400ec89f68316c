//! Form-shaped request DTOs.
//!
//! The order page submits live form-control objects, every field
//! wrapped as `{ "value": ... }`. These DTOs decode that shape and
//! coerce it into the domain types exactly once: a missing field, a
//! missing value and an empty string all become `None`, and the
//! `is_percentage` flag is truthy iff its value is a non-empty string.

use serde::Deserialize;

use crate::error::AppError;

use super::models::{AddonKind, LineItem, PriceAddon, Product};

/// A single form control: its current value, possibly unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub value: Option<String>,
}

impl Field {
    /// Non-empty value, or `None` (an empty string is falsy).
    fn into_present(self) -> Option<String> {
        self.value.filter(|v| !v.is_empty())
    }
}

/// Line item as submitted by the order form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineItemForm {
    #[serde(default)]
    pub custom_price: Option<Field>,
    #[serde(default)]
    pub product_id: Option<Field>,
    #[serde(default)]
    pub variant_id: Option<Field>,
    #[serde(default)]
    pub quantity: Option<Field>,
}

impl From<LineItemForm> for LineItem {
    fn from(form: LineItemForm) -> Self {
        LineItem {
            custom_price: form.custom_price.and_then(Field::into_present),
            product_id: form.product_id.and_then(Field::into_present),
            variant_id: form.variant_id.and_then(Field::into_present),
            quantity: form.quantity.and_then(Field::into_present),
        }
    }
}

/// Price addon as submitted by the order form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceAddonForm {
    #[serde(default)]
    pub kind: Option<Field>,
    #[serde(default)]
    pub amount: Option<Field>,
    #[serde(default)]
    pub is_percentage: Option<Field>,
}

impl From<PriceAddonForm> for PriceAddon {
    fn from(form: PriceAddonForm) -> Self {
        PriceAddon {
            kind: form
                .kind
                .and_then(Field::into_present)
                .map(|raw| AddonKind::parse(&raw)),
            amount: form.amount.and_then(Field::into_present),
            is_percentage: form
                .is_percentage
                .and_then(Field::into_present)
                .is_some(),
        }
    }
}

/// Full order form payload: line items plus the ordered addon list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    pub items: Vec<LineItemForm>,
    #[serde(default)]
    pub price_addons: Vec<PriceAddonForm>,
}

impl OrderForm {
    /// Decode a submitted order form from its JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Coerce into domain types, once, at the boundary.
    pub fn into_order(self) -> (Vec<LineItem>, Vec<PriceAddon>) {
        (
            self.items.into_iter().map(LineItem::from).collect(),
            self.price_addons.into_iter().map(PriceAddon::from).collect(),
        )
    }
}

/// Decode the product catalog payload.
pub fn catalog_from_json(payload: &str) -> Result<Vec<Product>, AppError> {
    Ok(serde_json::from_str(payload)?)
}
