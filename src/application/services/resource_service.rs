use crate::error::AppError;
use crate::model::http::HttpClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Facade over one resource family of the API (`content`, `tags`, ...)
///
/// Every path is relative to the service's own segment, so
/// `tags.get("42")` requests `{base_url}/tags/42`.
#[derive(Debug)]
pub struct ResourceService {
    name: &'static str,
    http_client: Arc<HttpClient>,
}

impl ResourceService {
    /// Creates a facade for the `name` segment
    pub fn new(name: &'static str, http_client: Arc<HttpClient>) -> Self {
        Self { name, http_client }
    }

    /// Path segment of this service
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Transport shared with the other sub-services
    #[must_use]
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    /// Path of `sub_path` under this service's segment
    #[must_use]
    pub fn path(&self, sub_path: &str) -> String {
        let sub_path = sub_path.trim_start_matches('/');
        if sub_path.is_empty() {
            self.name.to_string()
        } else {
            format!("{}/{}", self.name, sub_path)
        }
    }

    /// GET the service root
    pub async fn list<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        self.get("").await
    }

    /// GET a path under this service
    pub async fn get<T: DeserializeOwned>(&self, sub_path: &str) -> Result<T, AppError> {
        let path = self.path(sub_path);
        debug!("{}: GET {}", self.name, path);
        self.http_client.get(&path).await
    }

    /// POST a JSON body to a path under this service
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        sub_path: &str,
        body: B,
    ) -> Result<T, AppError> {
        let path = self.path(sub_path);
        debug!("{}: POST {}", self.name, path);
        self.http_client.post(&path, body).await
    }

    /// PUT a JSON body to a path under this service
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        sub_path: &str,
        body: B,
    ) -> Result<T, AppError> {
        let path = self.path(sub_path);
        debug!("{}: PUT {}", self.name, path);
        self.http_client.put(&path, body).await
    }

    /// DELETE a path under this service
    pub async fn delete<T: DeserializeOwned>(&self, sub_path: &str) -> Result<T, AppError> {
        let path = self.path(sub_path);
        debug!("{}: DELETE {}", self.name, path);
        self.http_client.delete(&path).await
    }
}
