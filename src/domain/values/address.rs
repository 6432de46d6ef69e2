//! Postal address value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Contract, Notifiable, Notifications};

/// Raw address parts as they arrive in a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressParts {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

/// Billing address of a payer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    #[serde(flatten)]
    parts: AddressParts,
    #[serde(skip)]
    notifications: Notifications,
}

impl Address {
    /// Creates an address; street, number and neighborhood are mandatory.
    pub fn new(parts: AddressParts) -> Self {
        let notifications = Contract::new()
            .requires(&parts.street, "Address.Street", "A rua é obrigatória")
            .requires(&parts.number, "Address.Number", "O número é obrigatório")
            .requires(
                &parts.neighborhood,
                "Address.Neighborhood",
                "O bairro é obrigatório",
            )
            .into_notifications();

        Self {
            parts,
            notifications,
        }
    }

    pub fn street(&self) -> &str {
        &self.parts.street
    }

    pub fn number(&self) -> &str {
        &self.parts.number
    }

    pub fn neighborhood(&self) -> &str {
        &self.parts.neighborhood
    }

    pub fn city(&self) -> &str {
        &self.parts.city
    }

    pub fn state(&self) -> &str {
        &self.parts.state
    }

    pub fn country(&self) -> &str {
        &self.parts.country
    }

    pub fn zip_code(&self) -> &str {
        &self.parts.zip_code
    }
}

impl Notifiable for Address {
    fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> AddressParts {
        AddressParts {
            street: "Rua das Flores".to_string(),
            number: "42".to_string(),
            neighborhood: "Centro".to_string(),
            city: "Curitiba".to_string(),
            state: "PR".to_string(),
            country: "BR".to_string(),
            zip_code: "80010000".to_string(),
        }
    }

    #[test]
    fn complete_address_is_valid() {
        let address = Address::new(parts());
        assert!(address.is_valid());
        assert_eq!(address.city(), "Curitiba");
    }

    #[test]
    fn every_missing_mandatory_part_is_reported() {
        let address = Address::new(AddressParts {
            street: " ".to_string(),
            number: String::new(),
            neighborhood: String::new(),
            ..parts()
        });

        assert_eq!(
            address.notifications().keys(),
            vec!["Address.Street", "Address.Number", "Address.Neighborhood"]
        );
    }

    #[test]
    fn optional_parts_may_be_empty() {
        let address = Address::new(AddressParts {
            city: String::new(),
            zip_code: String::new(),
            ..parts()
        });
        assert!(address.is_valid());
    }
}
