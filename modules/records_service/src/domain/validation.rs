//! Field validation for entity payloads
//!
//! Mirrors the column constraints: required fields must be non-blank,
//! bounded columns reject over-long values, and emails must be
//! structurally plausible (local part, domain, dotted suffix).

use crate::contract::{CategoryDraft, CustomerDraft, EmployeeDraft, RecordsError};

/// Limit for person/city/country names and employee positions
pub const NAME_MAX: usize = 50;
/// Limit for customer email addresses
pub const EMAIL_MAX: usize = 100;
/// Limit for customer phone numbers
pub const PHONE_MAX: usize = 15;
/// Limit for category names
pub const CATEGORY_NAME_MAX: usize = 100;
/// Limit for category descriptions
pub const DESCRIPTION_MAX: usize = 500;

fn required(field: &'static str, value: &str) -> Result<(), RecordsError> {
    if value.trim().is_empty() {
        return Err(RecordsError::Validation {
            message: format!("{field} must not be empty"),
        });
    }
    Ok(())
}

fn max_len(field: &'static str, value: &str, limit: usize) -> Result<(), RecordsError> {
    if value.chars().count() > limit {
        return Err(RecordsError::Validation {
            message: format!("{field} must be at most {limit} characters"),
        });
    }
    Ok(())
}

/// Validate email shape: one '@', non-empty local part, dotted domain
pub fn validate_email(email: &str) -> Result<(), RecordsError> {
    let invalid = || RecordsError::Validation {
        message: format!("'{email}' is not a valid email address"),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid());
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let Some((host, suffix)) = domain.rsplit_once('.') else {
        return Err(invalid());
    };
    if host.is_empty() || suffix.is_empty() {
        return Err(invalid());
    }
    Ok(())
}

/// Validate a customer payload against column constraints
pub fn validate_customer(draft: &CustomerDraft) -> Result<(), RecordsError> {
    required("first_name", &draft.first_name)?;
    max_len("first_name", &draft.first_name, NAME_MAX)?;
    required("last_name", &draft.last_name)?;
    max_len("last_name", &draft.last_name, NAME_MAX)?;
    required("email", &draft.email)?;
    max_len("email", &draft.email, EMAIL_MAX)?;
    validate_email(&draft.email)?;

    if let Some(phone) = &draft.phone {
        max_len("phone", phone, PHONE_MAX)?;
    }
    if let Some(city) = &draft.city {
        max_len("city", city, NAME_MAX)?;
    }
    if let Some(country) = &draft.country {
        max_len("country", country, NAME_MAX)?;
    }
    Ok(())
}

/// Validate a category payload against column constraints
pub fn validate_category(draft: &CategoryDraft) -> Result<(), RecordsError> {
    required("category_name", &draft.category_name)?;
    max_len("category_name", &draft.category_name, CATEGORY_NAME_MAX)?;
    if let Some(description) = &draft.description {
        max_len("description", description, DESCRIPTION_MAX)?;
    }
    Ok(())
}

/// Validate an employee payload against column constraints
pub fn validate_employee(draft: &EmployeeDraft) -> Result<(), RecordsError> {
    required("first_name", &draft.first_name)?;
    max_len("first_name", &draft.first_name, NAME_MAX)?;
    required("last_name", &draft.last_name)?;
    max_len("last_name", &draft.last_name, NAME_MAX)?;
    if let Some(position) = &draft.position {
        max_len("position", position, NAME_MAX)?;
    }
    Ok(())
}
