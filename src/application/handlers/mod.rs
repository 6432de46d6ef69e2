//! Application handlers.
//!
//! Command handlers that orchestrate domain construction, validation and
//! the calls to persistence and notice ports.

mod command_result;
mod subscription_handler;

pub use command_result::{CommandResult, SUBSCRIPTION_CREATED, SUBSCRIPTION_REJECTED};
pub use subscription_handler::{CommandHandler, SubscriptionHandler};
