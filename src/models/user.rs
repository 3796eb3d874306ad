//! User records as exchanged with the backend.

use serde::{Deserialize, Serialize};

/// A user as returned by `GET /users`.
///
/// The `id` is assigned by the server; the client never edits a user
/// in place and only sees changes through a full reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: i64,
}

/// Request body for `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub age: i64,
}
