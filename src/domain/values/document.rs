//! Identity document value object (CPF for people, CNPJ for companies).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{rules, Contract, Notifiable, Notifications};

/// Supported document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    /// Individual taxpayer registry, 11 digits.
    #[default]
    Cpf,
    /// Company registry, 14 digits.
    Cnpj,
}

impl DocumentType {
    /// Runs the type-specific length and check-digit algorithm.
    pub fn accepts(&self, number: &str) -> bool {
        match self {
            DocumentType::Cpf => rules::is_cpf(number),
            DocumentType::Cnpj => rules::is_cnpj(number),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentType::Cpf => write!(f, "CPF"),
            DocumentType::Cnpj => write!(f, "CNPJ"),
        }
    }
}

/// A document number together with its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    number: String,
    #[serde(rename = "type")]
    doc_type: DocumentType,
    #[serde(skip)]
    notifications: Notifications,
}

impl Document {
    /// Creates a document and validates it against its declared type.
    ///
    /// The number is kept in digits-only form, so formatted and bare inputs
    /// of the same registry number compare equal.
    pub fn new(number: impl Into<String>, doc_type: DocumentType) -> Self {
        let number = rules::strip_document_punctuation(&number.into());
        let notifications = Contract::new()
            .is_true(
                doc_type.accepts(&number),
                "Document.Number",
                "Documento inválido",
            )
            .into_notifications();

        Self {
            number,
            doc_type,
            notifications,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn doc_type(&self) -> DocumentType {
        self.doc_type
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.doc_type, self.number)
    }
}

impl Notifiable for Document {
    fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_cpf_is_accepted() {
        assert!(Document::new("52998224725", DocumentType::Cpf).is_valid());
    }

    #[test]
    fn valid_cnpj_is_accepted() {
        assert!(Document::new("11222333000181", DocumentType::Cnpj).is_valid());
    }

    #[test]
    fn cnpj_number_declared_as_cpf_is_rejected() {
        let document = Document::new("11222333000181", DocumentType::Cpf);
        assert_eq!(document.notifications().keys(), vec!["Document.Number"]);
    }

    #[test]
    fn cpf_number_declared_as_cnpj_is_rejected() {
        assert!(Document::new("52998224725", DocumentType::Cnpj).is_invalid());
    }

    #[test]
    fn wrong_check_digit_is_rejected() {
        assert!(Document::new("52998224726", DocumentType::Cpf).is_invalid());
    }

    #[test]
    fn formatted_number_is_stored_as_digits() {
        let formatted = Document::new("529.982.247-25", DocumentType::Cpf);
        let bare = Document::new("52998224725", DocumentType::Cpf);

        assert!(formatted.is_valid());
        assert_eq!(formatted.number(), "52998224725");
        assert_eq!(formatted, bare);
    }

    #[test]
    fn document_type_deserializes_from_upper_case() {
        let doc_type: DocumentType = serde_json::from_str("\"CNPJ\"").unwrap();
        assert_eq!(doc_type, DocumentType::Cnpj);
    }
}
