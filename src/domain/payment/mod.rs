//! Payment entity and its method variants.

mod entity;
mod method;

pub use entity::{Payment, PaymentTerms};
pub use method::PaymentMethod;
