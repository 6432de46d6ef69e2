//! Strategy seam between the subscription workflow and its command variants.

use super::SubscriptionDetails;
use crate::domain::foundation::Notifiable;
use crate::domain::payment::PaymentMethod;

/// A request to create a subscription paid through one payment method.
///
/// The workflow is identical for every method; implementors only supply
/// their method-specific validation and the [`PaymentMethod`] to build.
pub trait SubscriptionCommand: Notifiable + Send + Sync {
    /// Method label used in logs.
    const KIND: &'static str;

    /// Recomputes the command's notifications from its current fields.
    ///
    /// Idempotent: calling it twice leaves the same set as calling it once.
    fn validate(&mut self);

    /// Shared student, payer, address and amount fields.
    fn details(&self) -> &SubscriptionDetails;

    /// The payment method variant this command pays with.
    fn payment_method(&self) -> PaymentMethod;
}
