//! Contact form.
//!
//! The form is edited in place on the page and posted as JSON to a hosted
//! form endpoint through a [`FormBackend`].

mod backend;

pub use backend::{FormBackend, HttpFormBackend};

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("no contact endpoint configured (use --endpoint)")]
    NoEndpoint,
    #[error("form endpoint rejected the message (HTTP {0})")]
    Rejected(u16),
    #[error("could not reach form endpoint: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Outcome of the last submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Subject,
            Self::Subject => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Subject => Self::Email,
            Self::Message => Self::Subject,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The JSON body posted to the form endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub focus: Field,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            focus: Field::Name,
        }
    }
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Insert a character into the focused field. Newlines are only kept in
    /// the message body.
    pub fn insert(&mut self, c: char) {
        if c == '\n' && self.focus != Field::Message {
            return;
        }
        self.value_mut(self.focus).push(c);
    }

    pub fn backspace(&mut self) {
        self.value_mut(self.focus).pop();
    }

    pub const fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub const fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.value(*f).is_empty())
    }

    /// Check the form and build the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingField`] for the first blank field and
    /// [`ContactError::InvalidEmail`] for a malformed address.
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.value(*f).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim_end().to_string(),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's build something.\n".to_string(),
            focus: Field::Name,
        }
    }

    #[test]
    fn test_validate_builds_trimmed_payload() {
        let mut form = filled();
        form.name = "  Ada ".to_string();
        let payload = form.validate().unwrap();
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.message, "Let's build something.");
    }

    #[test]
    fn test_validate_reports_first_blank_field() {
        let mut form = filled();
        form.subject = "   ".to_string();
        form.message.clear();
        assert!(matches!(
            form.validate(),
            Err(ContactError::MissingField(Field::Subject))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_emails() {
        for bad in ["ada", "@example.com", "ada@", "ada@example", "a b@example.com", "a@b@c.d"] {
            let mut form = filled();
            form.email = bad.to_string();
            assert!(
                matches!(form.validate(), Err(ContactError::InvalidEmail)),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_payload_serializes_exactly_four_keys() {
        let payload = filled().validate().unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["email", "message", "name", "subject"]);
        assert_eq!(object["email"], "ada@example.com");
    }

    #[test]
    fn test_insert_targets_focused_field() {
        let mut form = ContactForm::default();
        form.insert('A');
        form.focus_next();
        form.insert('b');
        form.insert('\n');
        assert_eq!(form.name, "A");
        assert_eq!(form.email, "b");

        form.focus = Field::Message;
        form.insert('x');
        form.insert('\n');
        assert_eq!(form.message, "x\n");
        form.backspace();
        assert_eq!(form.message, "x");
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut form = ContactForm::default();
        for _ in 0..4 {
            form.focus_next();
        }
        assert_eq!(form.focus, Field::Name);
        form.focus_prev();
        assert_eq!(form.focus, Field::Message);
    }

    #[test]
    fn test_clear_resets_values_and_focus() {
        let mut form = filled();
        form.focus = Field::Subject;
        form.clear();
        assert!(form.is_empty());
        assert_eq!(form.focus, Field::Name);
    }

    #[test]
    fn test_missing_field_message_uses_label() {
        let err = ContactError::MissingField(Field::Email);
        assert_eq!(err.to_string(), "Your Email is required");
    }
}
