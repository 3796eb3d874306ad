//! Shared types used across all modules.
//!
//! The wire types for the users API and the client-only draft form live
//! here, so the API client and the page never reach into each other.

pub mod form;
pub mod user;

pub use form::{FormError, FormField, NewUserForm};
pub use user::{NewUser, User};
