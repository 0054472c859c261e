// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contact-detail validation for the personal-information step.
//!
//! Every field is checked independently and all failures are reported
//! together, so a failing field never blocks another field from being
//! corrected.

use crate::error::DomainError;
use crate::types::ContactDetails;

/// Validates and normalizes phone numbers.
///
/// The booking form delegates phone handling to an international phone
/// input widget; this trait is the seam for it. Implementations decide
/// validity and produce the normalized international form.
pub trait PhoneValidator {
    /// Checks whether the raw input is a valid phone number.
    fn is_valid(&self, raw: &str) -> bool;

    /// Returns the normalized international form (e.g. "+995599123456"),
    /// or `None` when the input cannot be normalized.
    fn normalize(&self, raw: &str) -> Option<String>;
}

/// The contact-form field a validation failure is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    /// The full-name field.
    FullName,
    /// The phone-number field.
    Phone,
    /// The email-address field.
    Email,
    /// The skill-level select.
    SkillLevel,
}

impl ContactField {
    /// Returns the field's form identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::SkillLevel => "skill_level",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validation failure scoped to a single contact-form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field the failure is attached to.
    pub field: ContactField,
    /// The underlying domain error.
    pub error: DomainError,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

/// Validates that a full name is present.
///
/// # Errors
///
/// Returns an error if the name is empty or whitespace only.
pub fn validate_full_name(full_name: &str) -> Result<(), DomainError> {
    if full_name.trim().is_empty() {
        return Err(DomainError::EmptyFullName);
    }
    Ok(())
}

/// Validates the shape of an email address.
///
/// The accepted shape is the booking form's: exactly one `@`, no
/// whitespace anywhere, a non-empty local part, and a domain with at
/// least one interior dot.
///
/// # Errors
///
/// Returns an error if the address does not match that shape.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidEmail(email.to_string()));
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(DomainError::InvalidEmail(email.to_string())),
    };

    if local.is_empty() {
        return Err(DomainError::InvalidEmail(email.to_string()));
    }

    // The domain needs a dot with at least one character on each side
    let chars: Vec<char> = domain.chars().collect();
    if chars.len() < 3 || !chars[1..chars.len() - 1].contains(&'.') {
        return Err(DomainError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

/// Validates the contact details entered on the personal-information step.
///
/// All fields are checked; the result carries one [`FieldError`] per
/// failing field so the UI can surface field-level messages without
/// touching healthy fields.
///
/// # Arguments
///
/// * `details` - The entered contact details
/// * `phones` - The phone input collaborator deciding phone validity
///
/// # Errors
///
/// Returns the list of failing fields, in form order.
pub fn validate_contact_details(
    details: &ContactDetails,
    phones: &dyn PhoneValidator,
) -> Result<(), Vec<FieldError>> {
    let mut errors: Vec<FieldError> = Vec::new();

    if let Err(error) = validate_full_name(&details.full_name) {
        errors.push(FieldError {
            field: ContactField::FullName,
            error,
        });
    }

    if !phones.is_valid(&details.phone) {
        errors.push(FieldError {
            field: ContactField::Phone,
            error: DomainError::InvalidPhoneNumber,
        });
    }

    if let Err(error) = validate_email(&details.email) {
        errors.push(FieldError {
            field: ContactField::Email,
            error,
        });
    }

    if details.skill_level.is_none() {
        errors.push(FieldError {
            field: ContactField::SkillLevel,
            error: DomainError::MissingSkillLevel,
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
