//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! user IDs, email addresses, and phone numbers. These value objects
//! provide validation at construction time and prevent invalid data from
//! being represented in the system.

pub mod email;
pub mod errors;
pub mod phone;
pub mod user_id;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::{PhoneNumber, Region};
pub use user_id::UserId;
