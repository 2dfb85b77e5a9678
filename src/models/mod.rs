//! Data models for contact records.
//!
//! This module contains the data structures representing persisted contacts,
//! in-memory candidates, and the composite uniqueness key shared by the
//! validation and storage layers.

pub mod contact;

pub use contact::{Contact, ContactDraft, ContactKey};
