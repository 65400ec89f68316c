//! Date-picker widget binding.
//!
//! Attaches a picker to every marked form input and re-runs the whole
//! binding pass when one of the observed containers mutates. The
//! document itself sits behind the [`DocumentHost`] trait; this module
//! only drives the lifecycle.

pub mod host;
pub mod service;

pub use host::{DocumentHost, MutationWatch};
pub use service::{BinderState, PickerBinder};
