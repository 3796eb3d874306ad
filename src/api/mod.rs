//! UserApi trait and the backend error type.
//!
//! Provides an abstraction layer over the users REST backend so the page
//! can be driven by the real HTTP client or by an in-memory fake.

pub mod http;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::models::{NewUser, User};

pub use http::HttpUserApi;

/// Errors from the users backend.
///
/// The page shows the same banner for every variant; the variant and its
/// detail only go to the log.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("{method} {url} failed: {reason}")]
    Request {
        method: &'static str,
        url: String,
        reason: String,
    },

    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: StatusCode,
    },

    #[error("failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

/// The two calls the users page makes.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch the full collection, in server order.
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// Create a user. The response body is not read.
    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError>;
}

#[async_trait]
impl<T: UserApi + ?Sized> UserApi for Arc<T> {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        (**self).list_users().await
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        (**self).create_user(user).await
    }
}
