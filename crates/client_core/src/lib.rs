use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{UserDraft, UserId, UserRecord},
    error::{FetchError, StoreOperation},
};
use tracing::{debug, warn};

pub mod config;

pub use config::{load_settings, IdAssignment, Settings};

/// Remote collection of user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> Result<Vec<UserRecord>, FetchError>;
    async fn create(&self, draft: &UserDraft) -> Result<UserRecord, FetchError>;
    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<UserRecord, FetchError>;
    async fn delete(&self, id: UserId) -> Result<(), FetchError>;
}

/// `GET/POST {base}`, `PUT/DELETE {base}/{id}` over JSON.
#[derive(Debug, Clone)]
pub struct UserStoreClient {
    http: Client,
    base_url: String,
}

impl UserStoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: UserId) -> String {
        format!("{}/{}", self.base_url, id.0)
    }

    async fn send(
        &self,
        operation: StoreOperation,
        request: RequestBuilder,
    ) -> Result<Response, FetchError> {
        let response = request.send().await.map_err(|err| {
            warn!(?operation, "user store request failed: {err}");
            FetchError::transport(operation, err.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(?operation, status = status.as_u16(), "user store rejected request");
            return Err(FetchError::status(operation, status.as_u16()));
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: StoreOperation,
        request: RequestBuilder,
    ) -> Result<T, FetchError> {
        self.send(operation, request)
            .await?
            .json::<T>()
            .await
            .map_err(|err| {
                warn!(?operation, "failed to decode user store response: {err}");
                FetchError::transport(operation, err.to_string())
            })
    }
}

#[async_trait]
impl UserStore for UserStoreClient {
    async fn list(&self) -> Result<Vec<UserRecord>, FetchError> {
        debug!(url = %self.base_url, "listing users");
        let users: Vec<UserRecord> = self
            .send_json(StoreOperation::Fetch, self.http.get(&self.base_url))
            .await?;
        debug!(count = users.len(), "listed users");
        Ok(users)
    }

    async fn create(&self, draft: &UserDraft) -> Result<UserRecord, FetchError> {
        debug!(url = %self.base_url, "creating user");
        self.send_json(
            StoreOperation::Save,
            self.http.post(&self.base_url).json(&draft.new_user_body()),
        )
        .await
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<UserRecord, FetchError> {
        let url = self.item_url(id);
        debug!(%url, "updating user");
        self.send_json(
            StoreOperation::Save,
            self.http.put(url).json(&draft.update_body(id)),
        )
        .await
    }

    async fn delete(&self, id: UserId) -> Result<(), FetchError> {
        let url = self.item_url(id);
        debug!(%url, "deleting user");
        self.send(StoreOperation::Delete, self.http.delete(url))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
