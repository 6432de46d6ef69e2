//! SubscriptionHandler - builds, validates and commits a new subscription.
//!
//! One pass per invocation:
//!
//! 1. Validate the command; on failure, report its notifications and stop
//! 2. Look up the document and e-mail; conflicts are recorded, not fatal
//! 3. Build name, documents, e-mails, address, payment, subscription, student
//! 4. Merge every notification in construction order
//! 5. Reject when anything was recorded; nothing is persisted
//! 6. Otherwise persist the student and send the welcome notice
//!
//! The three payment methods share this workflow through [`SubscriptionCommand`].

use async_trait::async_trait;
use std::sync::Arc;

use super::command_result::{CommandResult, SUBSCRIPTION_CREATED, SUBSCRIPTION_REJECTED};
use crate::application::commands::{SubscriptionCommand, SubscriptionDetails};
use crate::config::NoticeConfig;
use crate::domain::foundation::{rules, Notifiable, Notifications, Timestamp};
use crate::domain::payment::{Payment, PaymentTerms};
use crate::domain::student::{Student, Subscription};
use crate::domain::values::{Address, Document, DocumentType, Email, Name};
use crate::ports::{NoticeService, StudentRepository};

/// Months of access granted by a new subscription.
const SUBSCRIPTION_MONTHS: u32 = 1;

/// Handles one command type, producing a terminal result.
#[async_trait]
pub trait CommandHandler<C>: Send
where
    C: Send + 'static,
{
    async fn handle(&mut self, command: C) -> CommandResult;
}

/// Handler for the boleto, PayPal and credit card subscription commands.
///
/// Notifications from the latest invocation stay readable through
/// [`Notifiable`] until the next call to `handle`.
pub struct SubscriptionHandler {
    repository: Arc<dyn StudentRepository>,
    notice_service: Arc<dyn NoticeService>,
    notice: NoticeConfig,
    notifications: Notifications,
}

impl SubscriptionHandler {
    pub fn new(
        repository: Arc<dyn StudentRepository>,
        notice_service: Arc<dyn NoticeService>,
    ) -> Self {
        Self {
            repository,
            notice_service,
            notice: NoticeConfig::default(),
            notifications: Notifications::new(),
        }
    }

    /// Overrides the welcome notice subject and body.
    pub fn with_notice_config(mut self, notice: NoticeConfig) -> Self {
        self.notice = notice;
        self
    }

    async fn create_subscription<C: SubscriptionCommand>(&mut self, mut command: C) -> CommandResult {
        self.notifications.clear();

        command.validate();
        if command.is_invalid() {
            self.notifications.add_all(&command);
            tracing::warn!(
                method = C::KIND,
                failures = self.notifications.len(),
                "Subscription command rejected"
            );
            return CommandResult::failure(SUBSCRIPTION_REJECTED);
        }

        tracing::debug!(method = C::KIND, "Subscription command valid");

        let details = command.details();
        self.check_uniqueness(details).await;
        tracing::debug!(
            method = C::KIND,
            conflicts = self.notifications.len(),
            "Uniqueness checked"
        );

        let payment = Payment::new(
            PaymentTerms {
                paid_date: details.paid_date,
                expire_date: details.expire_date,
                total: details.total,
                total_paid: details.total_paid,
                payer: details.payer.clone(),
            },
            Document::new(&details.payer_document, details.payer_document_type),
            Address::new(details.address.clone()),
            Email::new(&details.payer_email),
            command.payment_method(),
        );

        let mut subscription =
            Subscription::new(Timestamp::now().add_months(SUBSCRIPTION_MONTHS));
        subscription.add_payment(payment);

        let mut student = Student::new(
            Name::new(&details.first_name, &details.last_name),
            Document::new(&details.document, DocumentType::Cpf),
            Email::new(&details.email),
        );
        student.add_subscription(subscription);

        self.merge_notifications(&student);
        tracing::debug!(method = C::KIND, student_id = %student.id, "Student built");

        if self.is_invalid() {
            tracing::warn!(
                method = C::KIND,
                failures = self.notifications.len(),
                keys = ?self.notifications.keys(),
                "Subscription rejected"
            );
            return CommandResult::failure(SUBSCRIPTION_REJECTED);
        }

        if let Err(e) = self.repository.create_subscription(&student).await {
            tracing::error!(method = C::KIND, student_id = %student.id, "Failed to persist subscription: {}", e);
            self.notifications
                .add("Subscription", "Não foi possível salvar sua assinatura");
            return CommandResult::failure(SUBSCRIPTION_REJECTED);
        }

        tracing::info!(method = C::KIND, student_id = %student.id, "Subscription created");

        if let Err(e) = self
            .notice_service
            .send(
                &student.name.to_string(),
                student.email.address(),
                &self.notice.subject,
                &self.notice.body,
            )
            .await
        {
            tracing::warn!(student_id = %student.id, "Welcome notice not delivered: {}", e);
        }

        CommandResult::success(SUBSCRIPTION_CREATED)
    }

    /// Records a conflict for an already-registered document or e-mail.
    ///
    /// Documents are looked up in the digits-only form they are stored in.
    /// A failed lookup counts as a conflict.
    async fn check_uniqueness(&mut self, details: &SubscriptionDetails) {
        let document = rules::strip_document_punctuation(&details.document);
        match self.repository.document_exists(&document).await {
            Ok(false) => {}
            Ok(true) => self.notifications.add("Document", "Este CPF já está em uso"),
            Err(e) => {
                tracing::error!("Document lookup failed: {}", e);
                self.notifications
                    .add("Document", "Não foi possível verificar o CPF");
            }
        }

        match self.repository.email_exists(&details.email).await {
            Ok(false) => {}
            Ok(true) => self.notifications.add("Email", "Este E-mail já está em uso"),
            Err(e) => {
                tracing::error!("E-mail lookup failed: {}", e);
                self.notifications
                    .add("Email", "Não foi possível verificar o E-mail");
            }
        }
    }

    /// Copies the graph's notifications in the order the pieces are built:
    /// name, document, e-mail, payer document, payer e-mail, address,
    /// student, subscription, payment.
    ///
    /// The payer pieces are merged on their own, so only the payment's own
    /// rule failures are taken from the payment.
    fn merge_notifications(&mut self, student: &Student) {
        let subscription = student.subscriptions().last();
        let payment = subscription.and_then(|s| s.payments().last());

        self.notifications
            .merge(&[&student.name, &student.document, &student.email]);
        if let Some(payment) = payment {
            self.notifications
                .merge(&[&payment.document, &payment.email, &payment.address]);
        }
        self.notifications.add_all(student);
        if let Some(subscription) = subscription {
            self.notifications.add_all(subscription);
        }
        if let Some(payment) = payment {
            self.notifications
                .extend_from_slice(payment.own_notifications());
        }
    }
}

#[async_trait]
impl<C> CommandHandler<C> for SubscriptionHandler
where
    C: SubscriptionCommand + 'static,
{
    async fn handle(&mut self, command: C) -> CommandResult {
        self.create_subscription(command).await
    }
}

impl Notifiable for SubscriptionHandler {
    fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}
