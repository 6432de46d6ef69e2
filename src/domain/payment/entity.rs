//! Payment entity.
//!
//! A payment embeds the payer's document, address and e-mail. Their
//! notifications are propagated into the payment's own set, ahead of the
//! payment's rules, so a payment is only valid when everything it carries is.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::PaymentMethod;
use crate::domain::foundation::{
    Contract, Notifiable, Notification, Notifications, PaymentId, Timestamp,
};
use crate::domain::values::{Address, Document, Email};

/// Amounts, dates and payer shared by every payment method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentTerms {
    pub paid_date: Timestamp,
    pub expire_date: Timestamp,
    pub total: Decimal,
    pub total_paid: Decimal,
    pub payer: String,
}

/// A payment made towards a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payment {
    pub id: PaymentId,
    /// Human-friendly reference, 10 upper-case hex characters.
    pub number: String,
    pub paid_date: Timestamp,
    pub expire_date: Timestamp,
    pub total: Decimal,
    pub total_paid: Decimal,
    pub payer: String,
    pub document: Document,
    pub address: Address,
    pub email: Email,
    #[serde(flatten)]
    pub method: PaymentMethod,
    #[serde(skip)]
    notifications: Notifications,
    #[serde(skip)]
    embedded: usize,
}

impl Payment {
    /// Builds a payment and validates it together with its embedded values.
    pub fn new(
        terms: PaymentTerms,
        document: Document,
        address: Address,
        email: Email,
        method: PaymentMethod,
    ) -> Self {
        let mut notifications = Notifications::new();
        notifications.merge(&[&document, &email, &address]);
        let embedded = notifications.len();

        let contract = Contract::new()
            .is_greater_than(
                terms.total,
                Decimal::ZERO,
                "Payment.Total",
                "O total não pode ser zero",
            )
            .is_greater_or_equal(
                terms.total_paid,
                terms.total,
                "Payment.TotalPaid",
                "O valor pago é menor que o valor do pagamento",
            )
            .requires(&terms.payer, "Payment.Payer", "O pagador é obrigatório");
        notifications.add_all(&method.check(contract));

        Self {
            id: PaymentId::new(),
            number: Self::generate_number(),
            paid_date: terms.paid_date,
            expire_date: terms.expire_date,
            total: terms.total,
            total_paid: terms.total_paid,
            payer: terms.payer.trim().to_string(),
            document,
            address,
            email,
            method,
            notifications,
            embedded,
        }
    }

    /// Failures raised by the payment's own rules, without the propagated
    /// document, e-mail and address failures.
    pub fn own_notifications(&self) -> &[Notification] {
        &self.notifications.as_slice()[self.embedded..]
    }

    fn generate_number() -> String {
        Uuid::new_v4().simple().to_string()[..10].to_uppercase()
    }
}

impl Notifiable for Payment {
    fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}
