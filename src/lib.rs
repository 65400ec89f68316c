//! Order-form utilities: date-picker binding and order subtotal math.
//!
//! Two independent components with no shared state:
//! - [`binder`] attaches date-picker widgets to marked form inputs and
//!   re-runs the binding pass when the hosting document mutates.
//! - [`pricing`] folds line items, a product catalog and an ordered
//!   list of price addons into a displayable subtotal.

pub mod binder;
pub mod error;
pub mod pricing;

pub use error::{AppError, Result};
