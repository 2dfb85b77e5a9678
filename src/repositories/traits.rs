use crate::error::StoreResult;
use crate::domain::UserId;
use crate::models::{Contact, ContactDraft};
use async_trait::async_trait;

/// Storage collaborator for contact records.
///
/// Provides abstraction over contact persistence, enabling different
/// implementations (in-memory, database-backed, mock). Implementations
/// must uphold the composite uniqueness contract: `insert_unique` is an
/// atomic insert-if-absent over the (user, first name, last name, email,
/// phone, company) key, and the duplicate rejection it raises is the
/// race-proof counterpart to the best-effort `find_duplicate` probe.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Persist a candidate, assigning an ID and creation timestamp.
    ///
    /// Fails with `StoreError::DuplicateContact` when a record with the
    /// same composite key already exists for the owning user.
    async fn insert_unique(&self, draft: &ContactDraft) -> StoreResult<Contact>;

    /// Best-effort duplicate probe for validation-time uniqueness checks.
    ///
    /// Not race-free: a concurrent writer may insert between this probe
    /// and a subsequent `insert_unique`, which is why callers must still
    /// treat the insert's duplicate rejection as an expected outcome.
    async fn find_duplicate(&self, draft: &ContactDraft) -> StoreResult<Option<Contact>>;

    /// All contacts owned by a user, oldest first.
    async fn list_for_user(&self, user: &UserId) -> StoreResult<Vec<Contact>>;

    /// Number of contacts owned by a user.
    async fn count_for_user(&self, user: &UserId) -> StoreResult<usize>;
}
