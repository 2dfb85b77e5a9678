use crate::domain::{EmailAddress, UserId};
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactDraft, ContactKey};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use super::traits::ContactStore;

/// In-memory contact store with a composite unique index.
///
/// All records live behind a single mutex, which makes `insert_unique` an
/// atomic check-and-insert: concurrent writers racing on the same composite
/// key observe exactly one winner, matching the behavior of a persistent
/// unique constraint. The lock is never held across an await point.
pub struct MemoryContactStore {
    inner: Mutex<Inner>,
}

struct Inner {
    by_key: HashMap<ContactKey, Contact>,
    next_id: u64,
}

impl MemoryContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                by_key: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))
    }
}

impl Default for MemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn insert_unique(&self, draft: &ContactDraft) -> StoreResult<Contact> {
        let user = draft
            .user
            .clone()
            .ok_or_else(|| StoreError::Backend("candidate has no owning user".to_string()))?;
        let key = ContactKey::from_draft(draft)
            .ok_or_else(|| StoreError::Backend("candidate has no owning user".to_string()))?;

        // Candidates are validated by callers; an invalid email here means
        // the contract was bypassed, which the store treats as its own fault.
        let email = draft
            .email
            .as_deref()
            .map(EmailAddress::new)
            .transpose()
            .map_err(|err| StoreError::Backend(err.to_string()))?;

        let mut inner = self.lock()?;
        if inner.by_key.contains_key(&key) {
            return Err(StoreError::DuplicateContact);
        }

        let id = inner.next_id.to_string();
        inner.next_id += 1;

        let contact = Contact {
            id,
            user,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email,
            phone: draft.phone.clone(),
            company: draft.company.clone(),
            international: draft.international,
            created_at: Utc::now(),
        };

        debug!(contact_id = %contact.id, user = %contact.user, "contact stored");
        inner.by_key.insert(key, contact.clone());
        Ok(contact)
    }

    async fn find_duplicate(&self, draft: &ContactDraft) -> StoreResult<Option<Contact>> {
        let key = match ContactKey::from_draft(draft) {
            Some(key) => key,
            None => return Ok(None),
        };
        let inner = self.lock()?;
        Ok(inner.by_key.get(&key).cloned())
    }

    async fn list_for_user(&self, user: &UserId) -> StoreResult<Vec<Contact>> {
        let inner = self.lock()?;
        let mut contacts: Vec<Contact> = inner
            .by_key
            .values()
            .filter(|c| &c.user == user)
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; sort by numeric ID for
        // stable oldest-first output.
        contacts.sort_by_key(|c| c.id.parse::<u64>().unwrap_or(u64::MAX));
        Ok(contacts)
    }

    async fn count_for_user(&self, user: &UserId) -> StoreResult<usize> {
        let inner = self.lock()?;
        Ok(inner.by_key.values().filter(|c| &c.user == user).count())
    }
}
