//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Notification collector, rule contracts, ids, timestamps, errors
//! - `values` - Self-validating value objects (name, document, e-mail, address)
//! - `payment` - Payment entity and its method variants
//! - `student` - Student and subscription entities

pub mod foundation;
pub mod payment;
pub mod student;
pub mod values;
