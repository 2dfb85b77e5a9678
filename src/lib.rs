//! Rolodex - contact management core.
//!
//! This library provides validated, per-user contact records and a bulk
//! importer for tab-separated contact files. Each import row is validated
//! and persisted independently; failures are aggregated per row rather
//! than aborting the batch.
//!
//! # Architecture
//!
//! - **domain**: Value objects for user IDs, emails, and phone numbers
//! - **models**: Contact records, candidates, and the composite uniqueness key
//! - **validation**: Explicit validate/normalize functions run before persistence
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Contact storage trait and the in-memory implementation
//! - **services**: Contact creation, dashboard queries, and the bulk importer

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod validation;

pub use config::Config;
pub use domain::{EmailAddress, PhoneNumber, Region, UserId};
pub use error::{ConfigError, CreateContactError, ImportError, StoreError};
pub use models::{Contact, ContactDraft};
pub use repositories::{ContactStore, MemoryContactStore};
pub use services::{ContactService, DashboardView, ImportReport, Importer, RowError};
pub use validation::{normalize, validate, FieldError};
