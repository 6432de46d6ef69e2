//! Welcome notice configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Sender and content of the notice sent after a subscription is created.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NoticeConfig {
    #[serde(default = "default_subject")]
    pub subject: String,

    #[serde(default = "default_body")]
    pub body: String,

    #[serde(default = "default_from_name")]
    pub from_name: String,

    #[serde(default = "default_from_email")]
    pub from_email: String,
}

impl NoticeConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate notice configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.subject.trim().is_empty() {
            return Err(ValidationError::MissingRequired("NOTICE__SUBJECT"));
        }
        if self.body.trim().is_empty() {
            return Err(ValidationError::MissingRequired("NOTICE__BODY"));
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        Ok(())
    }
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            body: default_body(),
            from_name: default_from_name(),
            from_email: default_from_email(),
        }
    }
}

fn default_subject() -> String {
    "bem vindo ao balta.io".to_string()
}

fn default_body() -> String {
    "Sua assinatura foi criado".to_string()
}

fn default_from_name() -> String {
    "balta.io".to_string()
}

fn default_from_email() -> String {
    "hello@balta.io".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_config_defaults() {
        let config = NoticeConfig::default();
        assert_eq!(config.subject, "bem vindo ao balta.io");
        assert_eq!(config.body, "Sua assinatura foi criado");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_header() {
        let config = NoticeConfig {
            from_email: "support@example.com".to_string(),
            from_name: "Support Team".to_string(),
            ..Default::default()
        };
        assert_eq!(config.from_header(), "Support Team <support@example.com>");
    }

    #[test]
    fn test_validation_blank_subject() {
        let config = NoticeConfig {
            subject: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("NOTICE__SUBJECT"))
        ));
    }

    #[test]
    fn test_validation_blank_body() {
        let config = NoticeConfig {
            body: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_from_email() {
        let config = NoticeConfig {
            from_email: "invalid-email".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidFromEmail)
        ));
    }
}
