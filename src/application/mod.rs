//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod commands;
pub mod handlers;

pub use commands::{
    CreateBoletoSubscriptionCommand, CreateCreditCardSubscriptionCommand,
    CreatePayPalSubscriptionCommand, SubscriptionCommand, SubscriptionDetails,
};
pub use handlers::{
    CommandHandler, CommandResult, SubscriptionHandler, SUBSCRIPTION_CREATED,
    SUBSCRIPTION_REJECTED,
};
