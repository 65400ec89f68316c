//! Order pricing module.
//!
//! Pure subtotal calculations over line items, a product catalog and an
//! ordered list of price addons, plus the form-shaped JSON boundary the
//! order page submits through.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;

// Re-export commonly used items
pub use calculators::{calculate_item_price, calculate_item_total, calculate_subtotal, parse_money};
pub use models::{AddonKind, LineItem, PriceAddon, Product, Variant};
pub use requests::OrderForm;
pub use responses::{subtotal_response, SubtotalResponse};
