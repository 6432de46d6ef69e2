//! Subscription commands.
//!
//! Each command is a flat record of raw request fields plus its own
//! notification state, filled by `validate()`.

mod create_boleto_subscription;
mod create_credit_card_subscription;
mod create_paypal_subscription;
mod details;
mod subscription_command;

pub use create_boleto_subscription::CreateBoletoSubscriptionCommand;
pub use create_credit_card_subscription::CreateCreditCardSubscriptionCommand;
pub use create_paypal_subscription::CreatePayPalSubscriptionCommand;
pub use details::SubscriptionDetails;
pub use subscription_command::SubscriptionCommand;

#[cfg(test)]
pub(crate) use details::tests::valid_details;
