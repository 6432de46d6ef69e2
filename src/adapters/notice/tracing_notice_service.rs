//! Notice service that writes notices to the tracing log instead of sending them.
//!
//! For development and testing. Replace with a real delivery adapter
//! (SMTP, transactional e-mail API) in production.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::config::NoticeConfig;
use crate::domain::foundation::DomainError;
use crate::ports::NoticeService;

/// A notice handed to [`TracingNoticeService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotice {
    pub recipient_name: String,
    pub recipient_address: String,
    pub subject: String,
    pub body: String,
}

/// Logs every notice at `info` level and keeps a copy for inspection.
#[derive(Debug)]
pub struct TracingNoticeService {
    from_header: String,
    sent: Mutex<Vec<SentNotice>>,
}

impl Default for TracingNoticeService {
    fn default() -> Self {
        Self::new(&NoticeConfig::default())
    }
}

impl TracingNoticeService {
    /// Creates a service that signs notices with the configured sender.
    pub fn new(config: &NoticeConfig) -> Self {
        Self {
            from_header: config.from_header(),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Returns every notice handed to this service.
    pub fn sent(&self) -> Vec<SentNotice> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl NoticeService for TracingNoticeService {
    async fn send(
        &self,
        recipient_name: &str,
        recipient_address: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), DomainError> {
        tracing::info!(
            from = %self.from_header,
            subject = %subject,
            "Notice sent"
        );

        self.sent
            .lock()
            .map_err(|_| DomainError::delivery("notice log poisoned"))?
            .push(SentNotice {
                recipient_name: recipient_name.to_string(),
                recipient_address: recipient_address.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_sent_notice() {
        let service = TracingNoticeService::default();

        service
            .send("Bruce Wayne", "batman@dc.com", "Bem-vindo", "Olá")
            .await
            .unwrap();

        let sent = service.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient_name, "Bruce Wayne");
        assert_eq!(sent[0].subject, "Bem-vindo");
    }
}
