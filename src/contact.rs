use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Form control name and id.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

impl ContactError {
    pub fn field(&self) -> ContactField {
        match self {
            ContactError::MissingField(field) => *field,
            ContactError::InvalidEmail(_) => ContactField::Email,
        }
    }
}

/// What a visitor typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Handle for one in-flight submission. Only the newest ticket completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// Contact form state with a simulated, cancellable send.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    message: ContactMessage,
    state: SubmissionState,
    issued: u64,
    pending: Option<SubmissionTicket>,
}

impl ContactForm {
    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        self.message.set(field, value);
    }

    /// Validates and starts sending. Any earlier pending submission is
    /// superseded; its ticket will no longer complete.
    pub fn begin_submit(&mut self) -> Result<SubmissionTicket, ContactError> {
        self.message.validate()?;
        if let Some(old) = self.pending.take() {
            log::debug!("superseding pending submission {:?}", old);
        }
        self.issued += 1;
        let ticket = SubmissionTicket(self.issued);
        self.pending = Some(ticket);
        self.state = SubmissionState::Submitting;
        Ok(ticket)
    }

    /// Completes `ticket` if it is still the pending one: the form returns to
    /// idle, every field is cleared and the sent message is handed back.
    pub fn finish(&mut self, ticket: SubmissionTicket) -> Option<ContactMessage> {
        if self.pending != Some(ticket) {
            return None;
        }
        self.pending = None;
        self.state = SubmissionState::Idle;
        Some(std::mem::take(&mut self.message))
    }

    /// Drops the pending submission without sending; fields are kept.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.state = SubmissionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Ada Lovelace");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Subject, "Engines");
        form.set(ContactField::Message, "Shall we compute some Bernoulli numbers?");
        form
    }

    #[test]
    fn test_submit_cycle_clears_fields() {
        let mut form = filled();
        assert_eq!(form.state(), SubmissionState::Idle);

        let ticket = form.begin_submit().expect("filled form should validate");
        assert_eq!(form.state(), SubmissionState::Submitting);
        // fields stay visible while sending
        assert_eq!(form.message().name, "Ada Lovelace");

        let sent = form.finish(ticket).expect("pending ticket should complete");
        assert_eq!(sent.email, "ada@example.com");
        assert_eq!(form.state(), SubmissionState::Idle);
        for field in ContactField::ALL {
            assert_eq!(form.message().get(field), "");
        }
        assert!(form.message().is_empty());
    }

    #[test]
    fn test_second_submit_supersedes_first() {
        let mut form = filled();
        let first = form.begin_submit().expect("should validate");
        let second = form.begin_submit().expect("should validate");
        assert_ne!(first, second);

        assert_eq!(form.finish(first), None);
        assert!(form.is_submitting());
        assert!(form.finish(second).is_some());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_cancel_drops_pending_ticket() {
        let mut form = filled();
        let ticket = form.begin_submit().expect("should validate");
        form.cancel();

        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.finish(ticket), None);
        assert_eq!(form.message().subject, "Engines");
    }

    #[test]
    fn test_missing_fields_rejected_in_order() {
        let mut form = ContactForm::default();
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(ContactField::Name))
        );

        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Subject, "   ");
        let err = form.begin_submit().unwrap_err();
        assert_eq!(err, ContactError::MissingField(ContactField::Subject));
        assert_eq!(err.to_string(), "Subject is required");
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_email_validation() {
        let mut message = filled().message().clone();
        for bad in ["ada", "@example.com", "ada@", "ada@localhost", "ada@@x.io", "a da@x.io"] {
            message.email = bad.to_string();
            assert_eq!(
                message.validate(),
                Err(ContactError::InvalidEmail(bad.to_string())),
                "{bad} should be rejected"
            );
        }
        for good in ["ada@example.com", " ada.l+site@mail.example.org "] {
            message.email = good.to_string();
            assert_eq!(message.validate(), Ok(()));
        }
        assert_eq!(ContactError::InvalidEmail("x".into()).field(), ContactField::Email);
    }

    #[test]
    fn test_message_serializes_for_relay() {
        let json = serde_json::to_value(filled().message()).expect("should serialize");
        assert_eq!(json["subject"], "Engines");
        assert_eq!(json["name"], "Ada Lovelace");
    }
}
