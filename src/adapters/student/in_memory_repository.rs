//! In-memory student repository.
//!
//! Useful for:
//! - Development and testing environments
//! - Demonstration and prototyping
//!
//! Enforces document and e-mail uniqueness on insert, like the unique
//! constraints a relational store would carry.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

use crate::domain::foundation::{rules, DomainError, ErrorCode};
use crate::domain::student::Student;
use crate::ports::StudentRepository;

/// In-memory implementation of the StudentRepository port.
///
/// Thread-safe via internal `Mutex`. Does not persist data across restarts.
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    students: Mutex<Vec<Student>>,
}

impl InMemoryStudentRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every stored student, in insertion order.
    pub fn students(&self) -> Vec<Student> {
        self.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Returns the number of stored students.
    pub fn len(&self) -> usize {
        self.lock().map(|s| s.len()).unwrap_or_default()
    }

    /// Returns true if no student is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Student>>, DomainError> {
        self.students
            .lock()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "student store poisoned"))
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn document_exists(&self, document: &str) -> Result<bool, DomainError> {
        let document = rules::strip_document_punctuation(document);
        let students = self.lock()?;
        Ok(students.iter().any(|s| s.document.number() == document))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        let email = email.trim().to_lowercase();
        let students = self.lock()?;
        Ok(students.iter().any(|s| s.email.address() == email))
    }

    async fn create_subscription(&self, student: &Student) -> Result<(), DomainError> {
        let mut students = self.lock()?;

        if students
            .iter()
            .any(|s| s.document.number() == student.document.number())
        {
            return Err(DomainError::new(
                ErrorCode::DocumentInUse,
                "A student with this document already exists",
            )
            .with_detail("student_id", student.id.to_string()));
        }
        if students
            .iter()
            .any(|s| s.email.address() == student.email.address())
        {
            return Err(DomainError::new(
                ErrorCode::EmailInUse,
                "A student with this e-mail already exists",
            )
            .with_detail("student_id", student.id.to_string()));
        }

        students.push(student.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::{Document, DocumentType, Email, Name};

    fn student(document: &str, email: &str) -> Student {
        Student::new(
            Name::new("Bruce", "Wayne"),
            Document::new(document, DocumentType::Cpf),
            Email::new(email),
        )
    }

    #[tokio::test]
    async fn stores_student_and_finds_it_by_document_and_email() {
        let repo = InMemoryStudentRepository::new();
        repo.create_subscription(&student("52998224725", "batman@dc.com"))
            .await
            .unwrap();

        assert_eq!(repo.len(), 1);
        assert!(repo.document_exists("52998224725").await.unwrap());
        assert!(repo.document_exists("529.982.247-25").await.unwrap());
        assert!(repo.email_exists("Batman@DC.com").await.unwrap());
        assert!(!repo.document_exists("11144477735").await.unwrap());
        assert!(!repo.email_exists("robin@dc.com").await.unwrap());
    }

    #[tokio::test]
    async fn rejects_duplicate_document() {
        let repo = InMemoryStudentRepository::new();
        repo.create_subscription(&student("52998224725", "batman@dc.com"))
            .await
            .unwrap();

        let err = repo
            .create_subscription(&student("529.982.247-25", "robin@dc.com"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DocumentInUse);
        assert!(err.details.contains_key("student_id"));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn rejects_duplicate_email() {
        let repo = InMemoryStudentRepository::new();
        repo.create_subscription(&student("52998224725", "batman@dc.com"))
            .await
            .unwrap();

        let err = repo
            .create_subscription(&student("11144477735", "batman@dc.com"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmailInUse);
    }

    #[test]
    fn new_repository_is_empty() {
        let repo = InMemoryStudentRepository::new();
        assert!(repo.is_empty());
        assert!(repo.students().is_empty());
    }
}
