//! Contact model: persisted records and in-memory candidates.

use crate::domain::{EmailAddress, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted contact, exclusively owned by one user.
///
/// The phone field, when present, holds the canonical E.164 string and
/// `international` reflects whether its country differs from the configured
/// default region. Records are immutable once stored; there is no update or
/// delete lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Store-assigned identifier
    pub id: String,

    /// Owning user (required; every contact belongs to exactly one user)
    pub user: UserId,

    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Email address, validated at construction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailAddress>,

    /// Phone number in canonical E.164 form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Company/organization name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Derived: phone country differs from the default region
    pub international: bool,

    /// When the contact was persisted
    pub created_at: DateTime<Utc>,
}

/// An in-memory, not-yet-persisted contact candidate.
///
/// Built from one import line or by direct construction. Blank input maps
/// to `None`, so "blank" and "absent" are the same state downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub user: Option<UserId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,

    /// Derived during normalization; false until then.
    #[serde(default)]
    pub international: bool,
}

impl ContactDraft {
    /// Create an empty draft owned by `user`.
    pub fn new(user: UserId) -> Self {
        Self {
            user: Some(user),
            ..Self::default()
        }
    }

    /// Build a draft from the five positional import fields.
    ///
    /// Fields are trimmed; whitespace-only values become `None`.
    pub fn from_fields(
        user: UserId,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
        company: &str,
    ) -> Self {
        Self {
            user: Some(user),
            first_name: blank_to_none(first_name),
            last_name: blank_to_none(last_name),
            email: blank_to_none(email),
            phone: blank_to_none(phone),
            company: blank_to_none(company),
            international: false,
        }
    }

    /// The raw field values joined by tabs, in import column order.
    pub fn raw_values(&self) -> String {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.company,
        ]
        .iter()
        .map(|f| f.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\t")
    }
}

/// Composite uniqueness key: no two contacts for the same user may share
/// all five identity fields. Email compares case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactKey {
    user: String,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    company: Option<String>,
}

impl ContactKey {
    /// Key for a candidate. Returns `None` when the draft has no owner,
    /// since ownership is part of the constraint.
    pub fn from_draft(draft: &ContactDraft) -> Option<Self> {
        let user = draft.user.as_ref()?;
        Some(Self {
            user: user.as_str().to_string(),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.as_deref().map(EmailAddress::canonicalize),
            phone: draft.phone.clone(),
            company: draft.company.clone(),
        })
    }

    /// Key for a persisted record.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            user: contact.user.as_str().to_string(),
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            email: contact.email.as_ref().map(|e| e.canonical()),
            phone: contact.phone.clone(),
            company: contact.company.clone(),
        }
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
