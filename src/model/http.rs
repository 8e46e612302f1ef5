/******************************************************************************
   Author: Taggy Contributors
   Date: 18/10/26
******************************************************************************/

use crate::auth::TokenProvider;
use crate::client::ClientOptions;
use crate::constants::{API_KEY_HEADER, USER_AGENT};
use crate::error::AppError;
use reqwest::Client as HttpInternalClient;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Shared HTTP transport used by every sub-service of the client
///
/// Handles:
/// - joining paths onto the configured base URL
/// - the optional API key header
/// - asking the token provider for a bearer token on every request
/// - mapping non-success statuses to [`AppError`]
pub struct HttpClient {
    http_client: HttpInternalClient,
    base_url: String,
    api_key: Option<String>,
    debug: bool,
    token_provider: Option<Arc<dyn TokenProvider>>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("debug", &self.debug)
            .field("token_provider", &self.token_provider.is_some())
            .finish()
    }
}

impl HttpClient {
    /// Builds the transport. The token provider is stored, not called.
    ///
    /// # Errors
    /// Returns [`AppError::Network`] if the underlying reqwest client cannot
    /// be built.
    pub fn new(options: &ClientOptions) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            api_key: options.api_key.clone(),
            debug: options.debug,
            token_provider: options.token_provider.clone(),
        })
    }

    /// Base URL every relative path is joined onto
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API key sent with every request, if any
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Whether request logging is enabled
    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Token provider consulted on every request
    #[must_use]
    pub fn token_provider(&self) -> Option<&Arc<dyn TokenProvider>> {
        self.token_provider.as_ref()
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<()>).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PUT request
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::DELETE, path, None::<()>).await
    }

    /// Makes a request and decodes the JSON response
    ///
    /// Errors are returned as produced; nothing is retried.
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, AppError> {
        let response = self.request_internal(method, path, &body).await?;
        self.parse_response(response).await
    }

    /// Resolves `path` against the base URL
    ///
    /// Absolute URLs are accepted only below the base URL, so the API key and
    /// bearer token never leave the configured host.
    ///
    /// # Errors
    /// [`AppError::InvalidInput`] for an absolute URL outside the base URL.
    pub fn url(&self, path: &str) -> Result<String, AppError> {
        if !(path.starts_with("http://") || path.starts_with("https://")) {
            let path = path.trim_start_matches('/');
            return Ok(format!("{}/{}", self.base_url, path));
        }
        match path.strip_prefix(self.base_url.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('?') => {
                Ok(path.to_string())
            }
            _ => {
                warn!("Refusing request outside {}: {}", self.base_url, path);
                Err(AppError::InvalidInput(format!(
                    "absolute URL outside base URL: {path}"
                )))
            }
        }
    }

    async fn request_internal<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &Option<B>,
    ) -> Result<Response, AppError> {
        let url = self.url(path)?;

        if self.debug {
            info!("[taggy] {} {}", method, url);
        } else {
            debug!("{} {}", method, url);
        }

        let mut request = self
            .http_client
            .request(method, &url)
            .header(ACCEPT, "application/json");

        if let Some(api_key) = &self.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        if let Some(provider) = &self.token_provider {
            let token = provider.get_token().await?;
            if !token.is_empty() {
                request = request.header(AUTHORIZATION, format!("Bearer {token}"));
            }
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();

        if self.debug {
            info!("[taggy] response status: {}", status);
        } else {
            debug!("Response status: {}", status);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request to {} failed with status {}: {}", url, status, body);
            return Err(AppError::from_status(status));
        }

        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
