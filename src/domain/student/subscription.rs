//! Subscription entity.

use serde::Serialize;

use crate::domain::foundation::{Contract, Notifiable, Notifications, SubscriptionId, Timestamp};
use crate::domain::payment::Payment;

/// A period of access paid for by one or more payments.
///
/// # Invariants
///
/// - Active while `expires_at` lies in the future
/// - Needs at least one payment before a student accepts it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub created_at: Timestamp,
    pub last_updated_at: Timestamp,
    pub expires_at: Timestamp,
    payments: Vec<Payment>,
    #[serde(skip)]
    notifications: Notifications,
}

impl Subscription {
    /// Creates an empty subscription valid until `expires_at`.
    pub fn new(expires_at: Timestamp) -> Self {
        let now = Timestamp::now();
        Self {
            id: SubscriptionId::new(),
            created_at: now,
            last_updated_at: now,
            expires_at,
            payments: Vec::new(),
            notifications: Notifications::new(),
        }
    }

    /// Attaches a payment. A payment dated in the future is recorded as a failure.
    pub fn add_payment(&mut self, payment: Payment) {
        let now = Timestamp::now();
        let contract = Contract::new().is_true(
            !payment.paid_date.is_after(&now),
            "Subscription.Payments",
            "A data do pagamento não pode ser futura",
        );
        self.notifications.add_all(&contract);
        self.payments.push(payment);
        self.last_updated_at = now;
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// True while the expiry date has not been reached.
    pub fn is_active(&self) -> bool {
        Timestamp::now().is_before(&self.expires_at)
    }
}

impl Notifiable for Subscription {
    fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}
