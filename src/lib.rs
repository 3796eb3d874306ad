//! userdeck — terminal users page for a users REST backend (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod api;
pub mod config;
pub mod constants;
pub mod env;
pub mod logging;
pub mod models;
pub mod output;
pub mod page;
