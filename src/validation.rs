//! Contact form field rules.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name must be at least 2 characters and contain only letters")]
    Name,
    #[error("Please enter a valid email address")]
    Email,
    #[error("Message must be at least 10 characters long")]
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn validate(self, raw: &str) -> Result<(), FieldError> {
        match self {
            Self::Name => validate_name(raw),
            Self::Email => validate_email(raw),
            Self::Message => validate_message(raw),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

pub fn validate_name(raw: &str) -> Result<(), FieldError> {
    let name = raw.trim();
    let letters_only = name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace());

    if name.chars().count() >= NAME_MIN_CHARS && letters_only {
        Ok(())
    } else {
        Err(FieldError::Name)
    }
}

pub fn validate_email(raw: &str) -> Result<(), FieldError> {
    if email_pattern().is_match(raw.trim()) {
        Ok(())
    } else {
        Err(FieldError::Email)
    }
}

pub fn validate_message(raw: &str) -> Result<(), FieldError> {
    if raw.trim().chars().count() >= MESSAGE_MIN_CHARS {
        Ok(())
    } else {
        Err(FieldError::Message)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Runs every rule; the form may be submitted only when the list is empty.
    pub fn validate(&self) -> Vec<(Field, FieldError)> {
        Field::ALL
            .iter()
            .filter_map(|field| {
                field
                    .validate(self.value(*field))
                    .err()
                    .map(|error| (*field, error))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules() {
        assert_eq!(validate_name("A1"), Err(FieldError::Name));
        assert_eq!(validate_name("Al"), Ok(()));
        assert_eq!(validate_name("A"), Err(FieldError::Name));
        assert_eq!(validate_name("  Mary Ann  "), Ok(()));
        assert_eq!(validate_name("O'Brien"), Err(FieldError::Name));
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate_email("a@b"), Err(FieldError::Email));
        assert_eq!(validate_email("a@b.com"), Ok(()));
        assert_eq!(validate_email(" a@b.com "), Ok(()));
        assert_eq!(validate_email("a b@c.com"), Err(FieldError::Email));
        assert_eq!(validate_email("@b.com"), Err(FieldError::Email));
    }

    #[test]
    fn message_rules() {
        assert_eq!(validate_message("123456789"), Err(FieldError::Message));
        assert_eq!(validate_message("1234567890"), Ok(()));
        assert_eq!(validate_message("   12345678   "), Err(FieldError::Message));
    }

    #[test]
    fn form_reports_every_failing_field() {
        let form = ContactForm {
            name: "A1".to_string(),
            email: "a@b.com".to_string(),
            message: "short".to_string(),
        };

        assert_eq!(
            form.validate(),
            vec![(Field::Name, FieldError::Name), (Field::Message, FieldError::Message)]
        );
    }

    #[test]
    fn valid_form_has_no_errors() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Al".to_string());
        form.set(Field::Email, "al@example.com".to_string());
        form.set(Field::Message, "Hello there, nice work".to_string());

        assert!(form.validate().is_empty());
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            FieldError::Email.to_string(),
            "Please enter a valid email address"
        );
    }
}
