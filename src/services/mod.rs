//! Service layer: contact creation, dashboard queries, and bulk import.

pub mod contact_service;
pub mod importer;

pub use contact_service::{ContactService, DashboardView};
pub use importer::{ImportReport, Importer, RowError};
