//! Notice service port - outbound messages to students.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Port for delivering a notice (welcome e-mail, receipt) to a person.
///
/// The subscription workflow does not retry a failed delivery and does not
/// roll back persistence when delivery fails.
#[async_trait]
pub trait NoticeService: Send + Sync {
    /// Sends one notice.
    ///
    /// # Errors
    ///
    /// - `DeliveryFailed` when the delivery channel is unreachable
    async fn send(
        &self,
        recipient_name: &str,
        recipient_address: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), DomainError>;
}
