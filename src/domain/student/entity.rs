//! Student entity.

use serde::Serialize;

use super::Subscription;
use crate::domain::foundation::{Contract, Notifiable, Notifications, StudentId};
use crate::domain::values::{Document, Email, Name};

/// A student and the subscriptions they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: StudentId,
    pub name: Name,
    pub document: Document,
    pub email: Email,
    subscriptions: Vec<Subscription>,
    #[serde(skip)]
    notifications: Notifications,
}

impl Student {
    /// Creates a student without subscriptions.
    ///
    /// The name, document and e-mail keep their own notifications; they are
    /// not copied into the student's set.
    pub fn new(name: Name, document: Document, email: Email) -> Self {
        Self {
            id: StudentId::new(),
            name,
            document,
            email,
            subscriptions: Vec::new(),
            notifications: Notifications::new(),
        }
    }

    /// Attaches a subscription.
    ///
    /// Records a notification when the student already holds an active
    /// subscription or when the subscription carries no payment. The
    /// subscription is kept either way; an invalid student is never persisted.
    pub fn add_subscription(&mut self, subscription: Subscription) {
        let contract = Contract::new()
            .is_true(
                !self.has_active_subscription(),
                "Student.Subscriptions",
                "Você já tem uma assinatura ativa",
            )
            .is_true(
                !subscription.payments().is_empty(),
                "Student.Subscription.Payments",
                "Esta assinatura não possui pagamentos",
            );

        self.notifications.add_all(&contract);
        self.subscriptions.push(subscription);
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn has_active_subscription(&self) -> bool {
        self.subscriptions.iter().any(Subscription::is_active)
    }
}

impl Notifiable for Student {
    fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::student::subscription::tests::payment_paid_at;
    use crate::domain::values::DocumentType;

    fn student() -> Student {
        Student::new(
            Name::new("Bruce", "Wayne"),
            Document::new("52998224725", DocumentType::Cpf),
            Email::new("batman@dc.com"),
        )
    }

    fn paid_subscription() -> Subscription {
        let mut subscription = Subscription::new(Timestamp::now().add_months(1));
        subscription.add_payment(payment_paid_at(Timestamp::now().add_days(-1)));
        subscription
    }

    #[test]
    fn accepts_paid_subscription() {
        let mut student = student();
        student.add_subscription(paid_subscription());

        assert!(student.is_valid());
        assert_eq!(student.subscriptions().len(), 1);
        assert!(student.has_active_subscription());
    }

    #[test]
    fn reports_subscription_without_payments() {
        let mut student = student();
        student.add_subscription(Subscription::new(Timestamp::now().add_months(1)));

        assert_eq!(
            student.notifications().keys(),
            vec!["Student.Subscription.Payments"]
        );
    }

    #[test]
    fn reports_second_active_subscription() {
        let mut student = student();
        student.add_subscription(paid_subscription());
        student.add_subscription(paid_subscription());

        assert_eq!(student.notifications().keys(), vec!["Student.Subscriptions"]);
        assert_eq!(student.subscriptions().len(), 2);
    }

    #[test]
    fn expired_subscription_does_not_block_a_new_one() {
        let mut expired = Subscription::new(Timestamp::now().add_days(-1));
        expired.add_payment(payment_paid_at(Timestamp::now().add_days(-40)));

        let mut student = student();
        student.add_subscription(expired);
        student.add_subscription(paid_subscription());

        assert!(student.is_valid());
        assert!(student.has_active_subscription());
    }

    #[test]
    fn invalid_name_does_not_leak_into_student() {
        let student = Student::new(
            Name::new("", ""),
            Document::new("52998224725", DocumentType::Cpf),
            Email::new("batman@dc.com"),
        );
        assert!(student.is_valid());
    }
}
