//! Person name value object.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::{Contract, Notifiable, Notifications};

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 40;

/// First and last name of a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name {
    first_name: String,
    last_name: String,
    #[serde(skip)]
    notifications: Notifications,
}

impl Name {
    /// Creates a name and validates both parts.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let first_name = first_name.into().trim().to_string();
        let last_name = last_name.into().trim().to_string();

        let notifications = Contract::new()
            .has_length_between(
                &first_name,
                MIN_LEN,
                MAX_LEN,
                "Name.FirstName",
                "Nome deve conter entre 3 e 40 caracteres",
            )
            .has_length_between(
                &last_name,
                MIN_LEN,
                MAX_LEN,
                "Name.LastName",
                "Sobrenome deve conter entre 3 e 40 caracteres",
            )
            .into_notifications();

        Self {
            first_name,
            last_name,
            notifications,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl Notifiable for Name {
    fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}
