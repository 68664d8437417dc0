use std::{collections::BTreeMap, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{email_address::EmailAddress, macros::nutype_string};

/// Minimum number of characters of a first name.
pub const FIRST_NAME_MIN_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactFormField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl ContactFormField {
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];

    /// The name used in error messages, events and as the id of the input.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }
}

impl std::fmt::Display for ContactFormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name().fmt(f)
    }
}

#[derive(Debug, Error)]
#[error("Unknown contact form field: {0}")]
pub struct UnknownContactFormField(pub String);

impl FromStr for ContactFormField {
    type Err = UnknownContactFormField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownContactFormField(s.into()))
    }
}

/// The raw values of all fields, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormValues {
    pub fn get(&self, field: ContactFormField) -> &str {
        match field {
            ContactFormField::FirstName => &self.first_name,
            ContactFormField::LastName => &self.last_name,
            ContactFormField::Email => &self.email,
            ContactFormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactFormField, value: String) {
        let slot = match field {
            ContactFormField::FirstName => &mut self.first_name,
            ContactFormField::LastName => &mut self.last_name,
            ContactFormField::Email => &mut self.email,
            ContactFormField::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFormValidationError {
    #[error("{field} must have at least {min} characters")]
    TooShort { field: ContactFormField, min: usize },
    #[error("{field} is a required field")]
    Required { field: ContactFormField },
    #[error("{field} must be a valid email address")]
    InvalidEmail { field: ContactFormField },
}

impl ContactFormValidationError {
    pub fn field(&self) -> ContactFormField {
        match *self {
            Self::TooShort { field, .. }
            | Self::Required { field }
            | Self::InvalidEmail { field } => field,
        }
    }
}

/// The validation errors of all fields that are currently invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormErrors(BTreeMap<ContactFormField, ContactFormValidationError>);

impl ContactFormErrors {
    pub fn get(&self, field: ContactFormField) -> Option<&ContactFormValidationError> {
        self.0.get(&field)
    }

    /// Record the result of validating `field`: an error replaces any previous
    /// entry, `None` removes it.
    pub fn set(&mut self, field: ContactFormField, error: Option<ContactFormValidationError>) {
        match error {
            Some(error) => {
                self.0.insert(field, error);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContactFormValidationError> {
        self.0.values()
    }
}

impl FromIterator<ContactFormValidationError> for ContactFormErrors {
    fn from_iter<T: IntoIterator<Item = ContactFormValidationError>>(iter: T) -> Self {
        Self(iter.into_iter().map(|err| (err.field(), err)).collect())
    }
}

/// Snapshot of the values of the last successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormSubmission {
    pub first_name: ContactFirstName,
    pub last_name: ContactLastName,
    pub email: EmailAddress,
    pub message: Option<ContactMessage>,
}

nutype_string!(ContactFirstName(validate(len_char_min = 5)));
nutype_string!(ContactLastName(validate(not_empty)));
nutype_string!(ContactMessage(validate(not_empty)));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub values: ContactFormValues,
    pub errors: ContactFormErrors,
    pub submission: Option<ContactFormSubmission>,
}

/// A single user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContactFormEvent {
    Change {
        field: ContactFormField,
        value: String,
    },
    Submit,
}
