//! Foundation module - Shared domain primitives.
//!
//! Contains the notification collector, rule contracts, identifiers,
//! timestamps and error types used by every other domain module.

mod contract;
mod errors;
mod ids;
mod notification;
mod timestamp;

pub use contract::{rules, Contract};
pub use errors::{DomainError, ErrorCode};
pub use ids::{PaymentId, StudentId, SubscriptionId};
pub use notification::{Notifiable, Notification, Notifications};
pub use timestamp::Timestamp;
