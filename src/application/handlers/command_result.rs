//! Outcome returned to the caller of a command handler.

use serde::Serialize;

/// Fixed message for a committed subscription.
pub const SUBSCRIPTION_CREATED: &str = "Assinatura realizada com sucesso";

/// Fixed message for any rejected subscription.
pub const SUBSCRIPTION_REJECTED: &str = "Não foi possível realizar sua assinatura";

/// Terminal success/failure outcome of one handler invocation.
///
/// Field-level detail is not carried here; read the handler's notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    success: bool,
    message: String,
}

impl CommandResult {
    pub fn new(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(true, message)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(false, message)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
