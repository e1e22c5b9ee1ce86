//! Consultation request type.

use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`ConsultationRequest`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsultationError {
    /// Name, phone, or email was missing or blank.
    #[error("Please fill in all required fields.")]
    MissingRequiredField,
}

/// A validated request to be contacted by a provider.
///
/// ## Constraints
///
/// - Name, phone, and email are required and are stored trimmed
/// - Notes are optional; a blank notes field becomes `None`
///
/// Validation is deliberately light. The intake team reaches out by phone
/// either way, so a typo in the email must not block the request.
///
/// ## Examples
///
/// ```
/// use petal_core::ConsultationRequest;
///
/// let request = ConsultationRequest::new("Dana Reyes", "555-0142", "dana@example.com", "  ").unwrap();
/// assert_eq!(request.name(), "Dana Reyes");
/// assert_eq!(request.notes(), None);
///
/// assert!(ConsultationRequest::new("", "555-0142", "dana@example.com", "").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    name: String,
    phone: String,
    email: String,
    notes: Option<String>,
}

impl ConsultationRequest {
    /// Build a validated consultation request from raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`ConsultationError::MissingRequiredField`] if the name,
    /// phone, or email is empty after trimming.
    pub fn new(
        name: &str,
        phone: &str,
        email: &str,
        notes: &str,
    ) -> Result<Self, ConsultationError> {
        let name = name.trim();
        let phone = phone.trim();
        let email = email.trim();

        if name.is_empty() || phone.is_empty() || email.is_empty() {
            return Err(ConsultationError::MissingRequiredField);
        }

        let notes = notes.trim();
        let notes = if notes.is_empty() {
            None
        } else {
            Some(notes.to_owned())
        };

        Ok(Self {
            name: name.to_owned(),
            phone: phone.to_owned(),
            email: email.to_owned(),
            notes,
        })
    }

    /// The requester's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The requester's phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// The requester's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Anything the requester wanted the provider to know up front.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}
