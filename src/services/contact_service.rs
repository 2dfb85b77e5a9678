//! Contact service layer.
//!
//! Business logic for creating single contacts and serving the dashboard
//! query. Validation and normalization are invoked explicitly here, in
//! that order, before every persistence attempt.

use crate::domain::{Region, UserId};
use crate::error::{CreateContactError, StoreError, StoreResult};
use crate::models::{Contact, ContactDraft};
use crate::repositories::ContactStore;
use crate::validation::{normalize, validate};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Data behind the dashboard endpoint: a user's contacts and their count.
///
/// Authentication and rendering remain with the caller.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub user: UserId,
    pub total: usize,
    pub contacts: Vec<Contact>,
}

/// Service for contact creation and per-user queries.
pub struct ContactService {
    store: Arc<dyn ContactStore>,
    default_region: Region,
}

impl ContactService {
    /// Create a new contact service.
    pub fn new(store: Arc<dyn ContactStore>, default_region: Region) -> Self {
        Self {
            store,
            default_region,
        }
    }

    /// Validate, normalize, and persist a candidate contact.
    ///
    /// Runs a best-effort duplicate probe after normalization; the store's
    /// own duplicate rejection still applies and covers the race window
    /// the probe cannot close.
    ///
    /// # Errors
    ///
    /// - `CreateContactError::Invalid` with field-level details when the
    ///   candidate fails validation;
    /// - `CreateContactError::Store(StoreError::DuplicateContact)` when an
    ///   identical contact already exists for the owning user.
    pub async fn create(&self, draft: ContactDraft) -> Result<Contact, CreateContactError> {
        validate(&draft, self.default_region).map_err(CreateContactError::Invalid)?;

        let draft = normalize(draft, self.default_region);

        if self.store.find_duplicate(&draft).await?.is_some() {
            return Err(CreateContactError::Store(StoreError::DuplicateContact));
        }

        let contact = self.store.insert_unique(&draft).await?;
        info!(contact_id = %contact.id, user = %contact.user, "contact created");
        Ok(contact)
    }

    /// Fetch the dashboard data for a user.
    pub async fn dashboard(&self, user: &UserId) -> StoreResult<DashboardView> {
        let contacts = self.store.list_for_user(user).await?;
        let total = contacts.len();
        Ok(DashboardView {
            user: user.clone(),
            total,
            contacts,
        })
    }
}
