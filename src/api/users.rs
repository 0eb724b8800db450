use crate::api::types::ProfileRecord;
use crate::api::{ApiClientError, GitHubClient};

impl GitHubClient {
    /// Look up a user profile by login.
    pub async fn get_user(&self, username: &str) -> Result<ProfileRecord, ApiClientError> {
        let path = format!("/users/{}", urlencoding::encode(username));
        match self.get(&path).await {
            Err(ApiClientError::ApiError { status: 404, .. }) => Err(ApiClientError::NotFound {
                username: username.to_string(),
            }),
            other => other,
        }
    }
}
