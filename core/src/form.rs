//! Contact form handling
//!
//! Field storage, validation, and simulated submission. Nothing is sent
//! anywhere: an accepted submission clears the fields and reports success,
//! and that is the whole transaction.

use tracing::debug;

use crate::validate::is_valid_email;

/// The named fields of the contact form, in focus order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// Label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }
}

/// Why a submission was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// One or more fields are empty
    MissingFields,
    /// The email field does not look like an email address
    InvalidEmail,
}

impl RejectReason {
    /// User-facing message for the rejection.
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::MissingFields => "Please fill in all fields.",
            RejectReason::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

/// Result of a submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submission accepted (simulated); the form has been reset
    Accepted,
    /// Submission rejected; fields are unchanged
    Rejected(RejectReason),
}

/// Contact form state.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to a field's buffer, for the editing UI.
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// Read access to a field's buffer.
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Validate and "submit" the form. On acceptance the fields are cleared;
    /// on rejection they are left untouched.
    pub fn submit(&mut self) -> SubmitOutcome {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return SubmitOutcome::Rejected(RejectReason::MissingFields);
        }
        if !is_valid_email(email) {
            return SubmitOutcome::Rejected(RejectReason::InvalidEmail);
        }

        debug!(name, email, "contact form submitted (simulated)");
        self.reset();
        SubmitOutcome::Accepted
    }

    /// Clear all fields.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn valid_submission_is_accepted_and_resets() {
        let mut form = filled_form();
        assert_eq!(form.submit(), SubmitOutcome::Accepted);
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn empty_message_is_rejected_and_fields_retained() {
        let mut form = filled_form();
        form.message.clear();

        assert_eq!(
            form.submit(),
            SubmitOutcome::Rejected(RejectReason::MissingFields)
        );
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.com");
    }

    #[test]
    fn whitespace_only_field_counts_as_empty() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        assert_eq!(
            form.submit(),
            SubmitOutcome::Rejected(RejectReason::MissingFields)
        );
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();

        assert_eq!(
            form.submit(),
            SubmitOutcome::Rejected(RejectReason::InvalidEmail)
        );
        // Fields survive the rejection.
        assert_eq!(form.message, "Hello there");
    }

    #[test]
    fn email_is_trimmed_before_validation() {
        let mut form = filled_form();
        form.email = "  ada@example.com  ".to_string();
        assert_eq!(form.submit(), SubmitOutcome::Accepted);
    }

    #[test]
    fn field_accessors_route_to_buffers() {
        let mut form = ContactForm::new();
        form.field_mut(FormField::Email).push_str("a@b.co");
        assert_eq!(form.field(FormField::Email), "a@b.co");
        assert_eq!(form.email, "a@b.co");
    }
}
