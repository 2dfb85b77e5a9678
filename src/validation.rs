//! Contact validation and normalization.
//!
//! Both operations are explicit pure functions invoked by callers before a
//! persistence attempt, rather than implicit lifecycle hooks: `validate`
//! checks the candidate, `normalize` rewrites the phone number and derives
//! the international flag. Normalization always completes, even for
//! unparseable input, so downstream save logic can proceed.

use crate::domain::{EmailAddress, PhoneNumber, Region};
use crate::models::ContactDraft;
use serde::Serialize;

/// A validation error attached to a single field.
///
/// Cross-field "at least one of" group failures use the synthetic field
/// name `"base"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a candidate contact against the model invariants.
///
/// Rules:
/// - the candidate must have an owning user;
/// - at least one of first name, last name, company must be present;
/// - at least one of phone number, email must be present;
/// - email, when present, must match a basic `local@domain.tld` pattern;
/// - phone, when present, must parse as a plausible number for some region.
///
/// Blank fields were already mapped to `None` during draft construction,
/// so presence checks are `is_some` checks here.
pub fn validate(draft: &ContactDraft, default_region: Region) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if draft.user.is_none() {
        errors.push(FieldError::new("user", "User must exist"));
    }

    if draft.first_name.is_none() && draft.last_name.is_none() && draft.company.is_none() {
        errors.push(FieldError::new(
            "base",
            "At least one of first name, last name or company must be present",
        ));
    }

    if draft.phone.is_none() && draft.email.is_none() {
        errors.push(FieldError::new(
            "base",
            "At least one of phone number or email must be present",
        ));
    }

    if let Some(email) = &draft.email {
        if !EmailAddress::is_valid(email) {
            errors.push(FieldError::new("email", "Email address must be valid"));
        }
    }

    if let Some(phone) = &draft.phone {
        if PhoneNumber::parse(phone, default_region).is_err() {
            errors.push(FieldError::new("phone", "Phone number must be valid"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Normalize a candidate before a persistence attempt.
///
/// Rewrites the phone number to its canonical E.164 form and sets the
/// international flag relative to `default_region`. Never fails: a blank or
/// unparseable phone passes through untouched with the flag cleared, so a
/// save attempt can always follow.
pub fn normalize(mut draft: ContactDraft, default_region: Region) -> ContactDraft {
    match draft
        .phone
        .as_deref()
        .and_then(|raw| PhoneNumber::parse(raw, default_region).ok())
    {
        Some(parsed) => {
            draft.international = parsed.is_international(default_region);
            draft.phone = Some(parsed.e164().to_string());
        }
        None => {
            draft.international = false;
        }
    }
    draft
}
