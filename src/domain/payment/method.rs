//! Payment method variants.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Contract;

/// How a payment was made, with the data specific to that channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Bank slip.
    Boleto {
        bar_code: String,
        boleto_number: String,
    },
    /// PayPal checkout.
    #[serde(rename = "paypal")]
    PayPal { transaction_code: String },
    /// Card charge.
    CreditCard {
        card_holder_name: String,
        card_number: String,
        last_transaction_number: String,
    },
}

impl PaymentMethod {
    /// Short label used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Boleto { .. } => "boleto",
            PaymentMethod::PayPal { .. } => "paypal",
            PaymentMethod::CreditCard { .. } => "credit_card",
        }
    }

    /// Adds the rules specific to this method to `contract`.
    pub(crate) fn check(&self, contract: Contract) -> Contract {
        match self {
            PaymentMethod::Boleto {
                bar_code,
                boleto_number,
            } => contract
                .requires(
                    bar_code,
                    "BoletoPayment.BarCode",
                    "O código de barras é obrigatório",
                )
                .requires(
                    boleto_number,
                    "BoletoPayment.BoletoNumber",
                    "O número do boleto é obrigatório",
                ),
            PaymentMethod::PayPal { transaction_code } => contract.requires(
                transaction_code,
                "PayPalPayment.TransactionCode",
                "O código da transação é obrigatório",
            ),
            PaymentMethod::CreditCard {
                card_holder_name,
                card_number,
                ..
            } => contract
                .requires(
                    card_holder_name,
                    "CreditCardPayment.CardHolderName",
                    "O nome do titular do cartão é obrigatório",
                )
                .is_digits(
                    card_number,
                    "CreditCardPayment.CardNumber",
                    "O número do cartão é inválido",
                ),
        }
    }
}
