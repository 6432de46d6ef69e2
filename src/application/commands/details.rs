//! Raw request fields shared by every subscription command.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::foundation::{Contract, Timestamp};
use crate::domain::values::{AddressParts, DocumentType};

/// Student, payer, address and amount fields common to all payment methods.
///
/// Missing fields deserialize to empty values so that validation, not
/// decoding, reports them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubscriptionDetails {
    pub first_name: String,
    pub last_name: String,
    pub document: String,
    pub email: String,

    pub paid_date: Timestamp,
    pub expire_date: Timestamp,
    pub total: Decimal,
    pub total_paid: Decimal,
    pub payer: String,
    pub payer_document: String,
    pub payer_document_type: DocumentType,
    pub payer_email: String,

    #[serde(flatten)]
    pub address: AddressParts,
}

impl Default for SubscriptionDetails {
    fn default() -> Self {
        let now = Timestamp::now();
        Self {
            first_name: String::new(),
            last_name: String::new(),
            document: String::new(),
            email: String::new(),
            paid_date: now,
            expire_date: now,
            total: Decimal::ZERO,
            total_paid: Decimal::ZERO,
            payer: String::new(),
            payer_document: String::new(),
            payer_document_type: DocumentType::default(),
            payer_email: String::new(),
            address: AddressParts::default(),
        }
    }
}

impl SubscriptionDetails {
    /// Adds the shared required-field and structural rules to `contract`.
    pub(crate) fn check(&self, contract: Contract) -> Contract {
        contract
            .has_length_between(
                &self.first_name,
                3,
                40,
                "Name.FirstName",
                "Nome deve conter entre 3 e 40 caracteres",
            )
            .has_length_between(
                &self.last_name,
                3,
                40,
                "Name.LastName",
                "Sobrenome deve conter entre 3 e 40 caracteres",
            )
            .requires(&self.document, "Document.Number", "O documento é obrigatório")
            .requires(&self.email, "Email.Address", "O e-mail é obrigatório")
            .requires(&self.payer, "Payment.Payer", "O pagador é obrigatório")
            .requires(
                &self.payer_document,
                "Payment.PayerDocument",
                "O documento do pagador é obrigatório",
            )
            .requires(
                &self.payer_email,
                "Payment.PayerEmail",
                "O e-mail do pagador é obrigatório",
            )
            .requires(&self.address.street, "Address.Street", "A rua é obrigatória")
            .requires(&self.address.number, "Address.Number", "O número é obrigatório")
            .requires(
                &self.address.neighborhood,
                "Address.Neighborhood",
                "O bairro é obrigatório",
            )
            .requires(&self.address.city, "Address.City", "A cidade é obrigatória")
            .requires(&self.address.state, "Address.State", "O estado é obrigatório")
            .requires(&self.address.country, "Address.Country", "O país é obrigatório")
            .requires(&self.address.zip_code, "Address.ZipCode", "O CEP é obrigatório")
            .is_greater_than(
                self.total,
                Decimal::ZERO,
                "Payment.Total",
                "O total não pode ser zero",
            )
            .is_after(
                &self.expire_date,
                &self.paid_date,
                "Payment.ExpireDate",
                "A data de vencimento deve ser posterior à data de pagamento",
            )
    }
}
