//! CreateBoletoSubscriptionCommand - subscription paid with a bank slip.

use serde::Deserialize;

use super::{SubscriptionCommand, SubscriptionDetails};
use crate::domain::foundation::{Contract, Notifiable, Notifications};
use crate::domain::payment::PaymentMethod;

/// Command to create a subscription paid by boleto.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateBoletoSubscriptionCommand {
    #[serde(flatten)]
    pub details: SubscriptionDetails,
    pub bar_code: String,
    pub boleto_number: String,
    #[serde(skip)]
    notifications: Notifications,
}

impl CreateBoletoSubscriptionCommand {
    pub fn new(
        details: SubscriptionDetails,
        bar_code: impl Into<String>,
        boleto_number: impl Into<String>,
    ) -> Self {
        Self {
            details,
            bar_code: bar_code.into(),
            boleto_number: boleto_number.into(),
            notifications: Notifications::new(),
        }
    }
}

impl SubscriptionCommand for CreateBoletoSubscriptionCommand {
    const KIND: &'static str = "boleto";

    fn validate(&mut self) {
        self.notifications = self
            .details
            .check(Contract::new())
            .requires(
                &self.bar_code,
                "BoletoPayment.BarCode",
                "O código de barras é obrigatório",
            )
            .requires(
                &self.boleto_number,
                "BoletoPayment.BoletoNumber",
                "O número do boleto é obrigatório",
            )
            .into_notifications();
    }

    fn details(&self) -> &SubscriptionDetails {
        &self.details
    }

    fn payment_method(&self) -> PaymentMethod {
        PaymentMethod::Boleto {
            bar_code: self.bar_code.clone(),
            boleto_number: self.boleto_number.clone(),
        }
    }
}

impl Notifiable for CreateBoletoSubscriptionCommand {
    fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}
