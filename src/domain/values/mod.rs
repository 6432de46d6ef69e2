//! Self-validating value objects.
//!
//! Construction never fails: each value object runs its rules immediately and
//! keeps the failures in its own notification collection.

mod address;
mod document;
mod email;
mod name;

pub use address::{Address, AddressParts};
pub use document::{Document, DocumentType};
pub use email::Email;
pub use name::Name;
