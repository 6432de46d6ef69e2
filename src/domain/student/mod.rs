//! Student entity and the subscriptions it owns.

mod entity;
mod subscription;

pub use entity::Student;
pub use subscription::Subscription;
