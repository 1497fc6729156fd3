use std::fmt::Display;

use crate::config;
use crate::models::UserSummary;
use super::client::get_json;
use super::error::FetchError;

/// Fetches user records from `{api_base_url}/api/users/{id}`.
#[derive(Clone, Debug)]
pub struct UserFetcher {
    client: reqwest::Client,
    api_base_url: String,
}

impl UserFetcher {
    pub fn new(client: reqwest::Client, api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        Self { client, api_base_url }
    }

    /// Build a fetcher from the environment (`API_BASE_URL`).
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Transport` if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("userfetch/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::new(client, config::get_api_base_url()))
    }

    /// Point the fetcher at another base URL, keeping the same client.
    pub fn with_api_base_url(self, api_base_url: impl Into<String>) -> Self {
        Self::new(self.client, api_base_url)
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Fetch a user and return the failure cause to the caller.
    pub async fn fetch_user(&self, user_id: impl Display) -> Result<UserSummary, FetchError> {
        fetch_user(&self.client, &self.api_base_url, user_id).await
    }

    /// Fetch a user, logging any failure and returning `None` in its place.
    pub async fn fetch_user_data(&self, user_id: impl Display) -> Option<UserSummary> {
        fetch_user_data(&self.client, &self.api_base_url, user_id).await
    }
}

/// Path of a user resource. The id is inserted verbatim, without escaping.
pub fn user_endpoint(user_id: impl Display) -> String {
    format!("{}/{}", config::USERS_ENDPOINT, user_id)
}

pub async fn fetch_user(
    client: &reqwest::Client,
    api_base_url: &str,
    user_id: impl Display,
) -> Result<UserSummary, FetchError> {
    let payload = get_json(client, api_base_url, &user_endpoint(user_id)).await?;
    if payload.is_null() {
        return Err(FetchError::Parse("response body is null".into()));
    }
    Ok(UserSummary::from_raw(&payload))
}

pub async fn fetch_user_data(
    client: &reqwest::Client,
    api_base_url: &str,
    user_id: impl Display,
) -> Option<UserSummary> {
    match fetch_user(client, api_base_url, user_id).await {
        Ok(summary) => Some(summary),
        Err(e) => {
            tracing::error!("Error fetching user: {}", e);
            None
        }
    }
}
