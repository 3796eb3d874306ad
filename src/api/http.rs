//! reqwest-backed implementation of [`UserApi`].

use async_trait::async_trait;

use crate::api::{ApiError, UserApi};
use crate::config::ApiConfig;
use crate::constants::USERS_PATH;
use crate::models::{NewUser, User};

/// HTTP client for `{base_url}/users`.
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: reqwest::Client,
    users_url: String,
}

impl HttpUserApi {
    /// Build a client from the `[api]` config section.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;
        Ok(Self {
            client,
            users_url: users_url(&config.base_url),
        })
    }

    /// The collection endpoint every request goes to.
    pub fn users_url(&self) -> &str {
        &self.users_url
    }
}

fn users_url(base_url: &str) -> String {
    format!("{}{USERS_PATH}", base_url.trim_end_matches('/'))
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        tracing::debug!(url = %self.users_url, "fetching users");

        let response = self
            .client
            .get(&self.users_url)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                method: "GET",
                url: self.users_url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method: "GET",
                url: self.users_url.clone(),
                status,
            });
        }

        // Read the body first so transport failures and bad JSON stay distinct.
        let body = response.bytes().await.map_err(|e| ApiError::Request {
            method: "GET",
            url: self.users_url.clone(),
            reason: e.to_string(),
        })?;
        let users: Vec<User> = serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            url: self.users_url.clone(),
            reason: e.to_string(),
        })?;

        tracing::debug!(count = users.len(), "fetched users");
        Ok(users)
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        tracing::debug!(url = %self.users_url, name = %user.name, age = user.age, "creating user");

        let response = self
            .client
            .post(&self.users_url)
            .json(user)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                method: "POST",
                url: self.users_url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method: "POST",
                url: self.users_url.clone(),
                status,
            });
        }

        tracing::debug!(%status, "created user");
        Ok(())
    }
}
