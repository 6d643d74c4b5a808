use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ContactError {
    #[error("Couldn't open mail client: {0}")]
    Navigation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Used for both the element id and the form field name.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "your.email@example.com",
            Field::Message => "Your message...",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Name | Field::Message => "text",
        }
    }

    pub fn is_multiline(self) -> bool {
        self == Field::Message
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn subject(&self) -> String {
        format!("Portfolio Contact from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    pub fn mailto(&self, recipient: &str) -> MailtoLink {
        MailtoLink {
            recipient: recipient.to_string(),
            subject: self.subject(),
            body: self.body(),
        }
    }

    /// Builds the link for the current values and resets every field.
    pub fn submit(&mut self, recipient: &str) -> MailtoLink {
        let link = self.mailto(recipient);
        self.clear();
        link
    }
}

/// A `mailto:` target with a pre-filled subject and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    recipient: String,
    subject: String,
    body: String,
}

impl MailtoLink {
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPIENT: &str = "owner@example.com";

    fn query_param(href: &str, key: &str) -> String {
        let (_, query) = href.split_once('?').expect("link should have a query");
        let raw = query
            .split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{key}=")))
            .expect("param should be present");
        urlencoding::decode(raw)
            .expect("param should be valid UTF-8")
            .into_owned()
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "Hello");
        form
    }

    #[test]
    fn test_submit_builds_mailto_and_resets() {
        let mut form = filled_form();
        let link = form.submit(RECIPIENT);
        let href = link.href();

        assert!(href.starts_with("mailto:owner@example.com?subject="));
        assert_eq!(query_param(&href, "subject"), "Portfolio Contact from Ada");
        let body = query_param(&href, "body");
        assert!(body.contains("Ada"));
        assert!(body.contains("ada@example.com"));
        assert!(body.contains("Hello"));
        assert_eq!(
            body,
            "Name: Ada\nEmail: ada@example.com\n\nMessage:\nHello"
        );

        assert!(form.is_empty());
        for field in Field::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Bob & Co");
        form.set(Field::Email, "bob+tag@example.com");
        form.set(Field::Message, "a=b?c&d\n100% sure");
        let href = form.mailto(RECIPIENT).href();

        let (_, query) = href.split_once('?').expect("link should have a query");
        assert_eq!(query.matches('&').count(), 1);
        assert_eq!(query.matches('?').count(), 0);
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert_eq!(query_param(&href, "subject"), "Portfolio Contact from Bob & Co");
        assert!(query_param(&href, "body").contains("a=b?c&d\n100% sure"));
    }

    #[test]
    fn test_fields_edit_independently() {
        let mut form = ContactForm::default();
        assert!(form.is_empty());
        form.set(Field::Email, "x@y.z");
        assert_eq!(form.get(Field::Name), "");
        assert_eq!(form.get(Field::Email), "x@y.z");
        form.set(Field::Email, String::from("changed@y.z"));
        assert_eq!(form.get(Field::Email), "changed@y.z");
        assert!(!form.is_empty());
    }

    #[test]
    fn test_mailto_leaves_fields_untouched() {
        let form = filled_form();
        let link = form.mailto(RECIPIENT);
        assert_eq!(link.recipient(), RECIPIENT);
        assert_eq!(link.subject(), "Portfolio Contact from Ada");
        assert_eq!(form, filled_form());
    }

    #[test]
    fn test_field_attributes() {
        assert_eq!(Field::Email.input_type(), "email");
        assert!(Field::Message.is_multiline());
        assert!(!Field::Name.is_multiline());
        let ids = Field::ALL.map(Field::id);
        assert_eq!(ids, ["name", "email", "message"]);
    }
}
