//! CreateCreditCardSubscriptionCommand - subscription paid by card.

use serde::Deserialize;

use super::{SubscriptionCommand, SubscriptionDetails};
use crate::domain::foundation::{Contract, Notifiable, Notifications};
use crate::domain::payment::PaymentMethod;

/// Command to create a subscription paid with a credit card.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateCreditCardSubscriptionCommand {
    #[serde(flatten)]
    pub details: SubscriptionDetails,
    pub card_holder_name: String,
    pub card_number: String,
    pub last_transaction_number: String,
    #[serde(skip)]
    notifications: Notifications,
}

impl CreateCreditCardSubscriptionCommand {
    pub fn new(
        details: SubscriptionDetails,
        card_holder_name: impl Into<String>,
        card_number: impl Into<String>,
        last_transaction_number: impl Into<String>,
    ) -> Self {
        Self {
            details,
            card_holder_name: card_holder_name.into(),
            card_number: card_number.into(),
            last_transaction_number: last_transaction_number.into(),
            notifications: Notifications::new(),
        }
    }
}

impl SubscriptionCommand for CreateCreditCardSubscriptionCommand {
    const KIND: &'static str = "credit_card";

    fn validate(&mut self) {
        self.notifications = self
            .details
            .check(Contract::new())
            .requires(
                &self.card_holder_name,
                "CreditCardPayment.CardHolderName",
                "O nome do titular do cartão é obrigatório",
            )
            .requires(
                &self.card_number,
                "CreditCardPayment.CardNumber",
                "O número do cartão é obrigatório",
            )
            .into_notifications();
    }

    fn details(&self) -> &SubscriptionDetails {
        &self.details
    }

    fn payment_method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard {
            card_holder_name: self.card_holder_name.clone(),
            card_number: self.card_number.clone(),
            last_transaction_number: self.last_transaction_number.clone(),
        }
    }
}

impl Notifiable for CreateCreditCardSubscriptionCommand {
    fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::details::tests::valid_details;

    #[test]
    fn requires_holder_and_number() {
        let mut cmd = CreateCreditCardSubscriptionCommand::new(valid_details(), "", "", "");
        cmd.validate();

        assert_eq!(
            cmd.notifications().keys(),
            vec![
                "CreditCardPayment.CardHolderName",
                "CreditCardPayment.CardNumber"
            ]
        );
    }

    #[test]
    fn last_transaction_number_is_optional() {
        let mut cmd = CreateCreditCardSubscriptionCommand::new(
            valid_details(),
            "BRUCE WAYNE",
            "4111111111111111",
            "",
        );
        cmd.validate();
        assert!(cmd.is_valid());
    }
}
