//! Student repository port.
//!
//! Defines the uniqueness lookups and the persistence call the subscription
//! workflow needs. Implementations handle the actual storage.
//!
//! # Design
//!
//! - **Lookups are separate calls**: `document_exists` and `email_exists` are
//!   not wrapped in a transaction with `create_subscription`; two concurrent
//!   requests for the same document can both pass the lookups.
//! - **Aggregate write**: `create_subscription` stores the student together
//!   with its nested subscriptions and payments.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::student::Student;

/// Repository port for students and their subscriptions.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Returns true when a student with this document number is already stored.
    async fn document_exists(&self, document: &str) -> Result<bool, DomainError>;

    /// Returns true when a student with this e-mail address is already stored.
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError>;

    /// Persists the student, its subscriptions and their payments.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` when the store is unreachable
    async fn create_subscription(&self, student: &Student) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn student_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn StudentRepository) {}
    }
}
