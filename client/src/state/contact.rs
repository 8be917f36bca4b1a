//! Lead-capture form state: fields, service tab, and submission lifecycle.
//!
//! DESIGN
//! ======
//! The form is a small state machine (`Idle -> Submitting -> Success`) kept
//! free of browser types so the component only drives timers and navigation.
//! Delivery is never confirmed: once the deep link is handed to the browser
//! the form reports success.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;

use crate::util::deep_link;

/// Artificial delay between submit and hand-off, used only for the spinner.
pub const SUBMIT_DELAY_MS: u64 = 1_000;

/// Which service the lead is asking about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServiceKind {
    #[default]
    Neda,
    Chemicals,
    General,
}

impl ServiceKind {
    /// Tab order in the service selector.
    pub const ALL: [Self; 3] = [Self::Neda, Self::Chemicals, Self::General];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Neda => "NEDA",
            Self::Chemicals => "Chemicals",
            Self::General => "General",
        }
    }

    /// Prompt shown in the details textarea for this service.
    #[must_use]
    pub fn details_placeholder(self) -> &'static str {
        match self {
            Self::Neda => "Est. Rock Volume (BCM), Rock Hardness, Location...",
            Self::Chemicals => "Road Length (km), Coal Tonnage, Dust Issue...",
            Self::General => "How can we help you?",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Editable text fields of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Phone,
    Details,
}

/// A visitor's inquiry as currently typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub details: String,
    pub service: ServiceKind,
}

impl ContactSubmission {
    /// Check required fields. Optional fields are never inspected.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule in field order (name, then email).
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !email.contains('@') {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Phone => &self.phone,
            ContactField::Details => &self.details,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Phone => &mut self.phone,
            ContactField::Details => &mut self.details,
        }
    }
}

/// Submission lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Reasons a submit attempt is rejected. The form stays where it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please enter your full name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("A request is already in progress.")]
    NotIdle,
}

/// Form state owned by a single `ContactForm` component instance.
#[derive(Clone, Debug, Default)]
pub struct ContactFormState {
    pub submission: ContactSubmission,
    pub status: SubmissionStatus,
    pub error: Option<ContactError>,
}

impl ContactFormState {
    pub fn set_field(&mut self, field: ContactField, value: String) {
        *self.submission.field_mut(field) = value;
        self.error = None;
    }

    pub fn set_service(&mut self, service: ServiceKind) {
        self.submission.service = service;
    }

    /// Start a submission. Only valid from `Idle` with required fields present.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::NotIdle`] outside `Idle`, or the validation
    /// failure from [`ContactSubmission::validate`].
    pub fn begin_submit(&mut self) -> Result<(), ContactError> {
        if self.status != SubmissionStatus::Idle {
            return Err(ContactError::NotIdle);
        }
        if let Err(e) = self.submission.validate() {
            self.error = Some(e);
            return Err(e);
        }
        self.error = None;
        self.status = SubmissionStatus::Submitting;
        Ok(())
    }

    /// Finish a pending submission, returning the deep link to open.
    ///
    /// Returns `None` when no submission is pending (for example a stale
    /// timer after the form was already completed).
    pub fn complete_submit(&mut self) -> Option<String> {
        if self.status != SubmissionStatus::Submitting {
            return None;
        }
        let url = deep_link::whatsapp_url(&deep_link::compose_message(&self.submission));
        self.status = SubmissionStatus::Success;
        Some(url)
    }

    /// Return from the success panel to the form. Field values are kept.
    pub fn reset(&mut self) {
        if self.status == SubmissionStatus::Success {
            self.status = SubmissionStatus::Idle;
        }
    }
}
