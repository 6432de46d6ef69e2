//! CreatePayPalSubscriptionCommand - subscription paid through PayPal.

use serde::Deserialize;

use super::{SubscriptionCommand, SubscriptionDetails};
use crate::domain::foundation::{Contract, Notifiable, Notifications};
use crate::domain::payment::PaymentMethod;

/// Command to create a subscription paid with PayPal.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePayPalSubscriptionCommand {
    #[serde(flatten)]
    pub details: SubscriptionDetails,
    pub transaction_code: String,
    #[serde(skip)]
    notifications: Notifications,
}

impl CreatePayPalSubscriptionCommand {
    pub fn new(details: SubscriptionDetails, transaction_code: impl Into<String>) -> Self {
        Self {
            details,
            transaction_code: transaction_code.into(),
            notifications: Notifications::new(),
        }
    }
}

impl SubscriptionCommand for CreatePayPalSubscriptionCommand {
    const KIND: &'static str = "paypal";

    fn validate(&mut self) {
        self.notifications = self
            .details
            .check(Contract::new())
            .requires(
                &self.transaction_code,
                "PayPalPayment.TransactionCode",
                "O código da transação é obrigatório",
            )
            .into_notifications();
    }

    fn details(&self) -> &SubscriptionDetails {
        &self.details
    }

    fn payment_method(&self) -> PaymentMethod {
        PaymentMethod::PayPal {
            transaction_code: self.transaction_code.clone(),
        }
    }
}

impl Notifiable for CreatePayPalSubscriptionCommand {
    fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}
