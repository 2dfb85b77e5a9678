//! Mock contact store for integration tests.
//!
//! Delegates to the in-memory store but tracks call counts and can inject
//! a backend failure for rows whose company matches a marker value.

#![allow(dead_code)]

use async_trait::async_trait;
use rolodex::domain::UserId;
use rolodex::error::{StoreError, StoreResult};
use rolodex::models::{Contact, ContactDraft};
use rolodex::repositories::{ContactStore, MemoryContactStore};
use std::collections::HashMap;
use std::sync::Mutex;

pub struct MockContactStore {
    inner: MemoryContactStore,
    fail_on_company: Option<String>,
    call_counts: Mutex<HashMap<&'static str, usize>>,
}

impl MockContactStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryContactStore::new(),
            fail_on_company: None,
            call_counts: Mutex::new(HashMap::new()),
        }
    }

    /// Fail `insert_unique` with a backend error whenever the candidate's
    /// company equals `marker`.
    pub fn failing_on_company(marker: &str) -> Self {
        Self {
            fail_on_company: Some(marker.to_string()),
            ..Self::new()
        }
    }

    pub fn call_count(&self, method: &str) -> usize {
        *self.call_counts.lock().unwrap().get(method).unwrap_or(&0)
    }

    fn record_call(&self, method: &'static str) {
        *self.call_counts.lock().unwrap().entry(method).or_insert(0) += 1;
    }
}

#[async_trait]
impl ContactStore for MockContactStore {
    async fn insert_unique(&self, draft: &ContactDraft) -> StoreResult<Contact> {
        self.record_call("insert_unique");
        if let (Some(marker), Some(company)) = (&self.fail_on_company, &draft.company) {
            if marker == company {
                return Err(StoreError::Backend("injected failure".to_string()));
            }
        }
        self.inner.insert_unique(draft).await
    }

    async fn find_duplicate(&self, draft: &ContactDraft) -> StoreResult<Option<Contact>> {
        self.record_call("find_duplicate");
        self.inner.find_duplicate(draft).await
    }

    async fn list_for_user(&self, user: &UserId) -> StoreResult<Vec<Contact>> {
        self.record_call("list_for_user");
        self.inner.list_for_user(user).await
    }

    async fn count_for_user(&self, user: &UserId) -> StoreResult<usize> {
        self.record_call("count_for_user");
        self.inner.count_for_user(user).await
    }
}
