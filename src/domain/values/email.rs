//! E-mail address value object.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::{Contract, Notifiable, Notifications};

/// An e-mail address, normalised to lower case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    address: String,
    #[serde(skip)]
    notifications: Notifications,
}

impl Email {
    /// Creates an e-mail and checks its shape.
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into().trim().to_lowercase();
        let notifications = Contract::new()
            .is_email(&address, "Email.Address", "E-mail inválido")
            .into_notifications();

        Self {
            address,
            notifications,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl Notifiable for Email {
    fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}
