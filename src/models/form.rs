//! Draft form state for creating a user.
//!
//! The draft holds raw text exactly as typed. Conversion to a [`NewUser`]
//! happens only on submit.

use serde::Serialize;
use strum::{Display, EnumString};
use thiserror::Error;

use super::user::NewUser;

/// A named input of the draft form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FormField {
    Name,
    Age,
}

/// Reasons a draft cannot be submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(FormField),

    #[error("age must be a whole number, got {0:?}")]
    InvalidAge(String),
}

/// In-progress user input, reset to empty after a successful create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewUserForm {
    pub name: String,
    pub age: String,
}

impl NewUserForm {
    /// Replace one field, leaving the other untouched.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        match field {
            FormField::Name => self.name = value.into(),
            FormField::Age => self.age = value.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Age => &self.age,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the request body.
    ///
    /// Both fields are required. The name only has to be non-empty, so
    /// whitespace is sent as typed. The age is read with
    /// [`parse_int_prefix`], so `"30 years"` submits as `30`.
    pub fn to_new_user(&self) -> Result<NewUser, FormError> {
        if self.name.is_empty() {
            return Err(FormError::MissingField(FormField::Name));
        }
        if self.age.trim().is_empty() {
            return Err(FormError::MissingField(FormField::Age));
        }
        let age = parse_int_prefix(&self.age).ok_or_else(|| FormError::InvalidAge(self.age.clone()))?;
        Ok(NewUser {
            name: self.name.clone(),
            age,
        })
    }
}

/// Parse the leading base-10 integer of `raw`.
///
/// Leading whitespace and a single sign are accepted, then the longest run
/// of ASCII digits is taken and anything after it is ignored. Returns `None`
/// when there are no digits or the value does not fit in an `i64`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign_len = match s.as_bytes().first() {
        Some(b'-' | b'+') => 1,
        _ => 0,
    };
    let rest = &s[sign_len..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    s[..sign_len + end].parse().ok()
}
