//! Lead data model and wire payload.
//!
//! DESIGN
//! ======
//! `ContactMessage` separates required fields from the optional phone so
//! validation is a single `Result` instead of truthiness checks at each call
//! site. `LeadPayload` is the fixed, localized JSON schema the form endpoint
//! receives.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;

/// Inline message shown when a required field is missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Por favor, preencha nome, e-mail e mensagem.";

/// One contact-form submission. Built fresh per attempt, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    /// URL of the page the lead was submitted from.
    pub source_page: String,
}

impl ContactMessage {
    /// Build a message from raw form input, trimming every field.
    /// A blank phone becomes `None`.
    pub fn from_input(name: &str, email: &str, phone: &str, message: &str, source_page: &str) -> Self {
        let phone = phone.trim();
        Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            phone: (!phone.is_empty()).then(|| phone.to_owned()),
            message: message.trim().to_owned(),
            source_page: source_page.to_owned(),
        }
    }

    /// Check that name, e-mail and message are non-empty after trimming.
    ///
    /// No e-mail syntax or length checks; phone is never required.
    ///
    /// # Errors
    ///
    /// Returns the first missing required field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        Ok(())
    }

    /// Phone as rendered in payloads and mail drafts (empty when absent).
    pub fn phone_or_empty(&self) -> &str {
        self.phone.as_deref().unwrap_or_default()
    }

    pub fn to_payload(&self) -> LeadPayload {
        LeadPayload {
            nome: self.name.clone(),
            email: self.email.clone(),
            telefone: self.phone_or_empty().to_owned(),
            mensagem: self.message.clone(),
            page: self.source_page.clone(),
        }
    }
}

/// JSON body POSTed to the configured form endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeadPayload {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub mensagem: String,
    pub page: String,
}

/// A required contact field is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("message is required")]
    MissingMessage,
}

impl ValidationError {
    /// Localized inline message. The same for every missing field.
    pub fn user_message(self) -> &'static str {
        REQUIRED_FIELDS_MESSAGE
    }
}

/// The lead endpoint could not be reached or rejected the submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("lead endpoint responded with status {0}")]
    Status(u16),
    #[error("payload encoding failed: {0}")]
    Encode(String),
}
