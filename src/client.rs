/******************************************************************************
   Author: Taggy Contributors
   Date: 18/10/26
******************************************************************************/

//! Taggy API client
//!
//! One [`TaggyClient`] owns one HTTP transport and fourteen sub-services
//! sharing it. The sub-services are created at construction and never
//! replaced, so handing out `Arc` clones of them is equivalent to handing out
//! the client itself.
//!
//! # Example
//! ```ignore
//! use taggy::client::{ClientOptions, TaggyClient};
//!
//! let client = TaggyClient::new(ClientOptions::new("https://api.taggy.com/api/v1"))?;
//! let me = client.auth().get_current_user().await?;
//! ```

use crate::application::config::Config;
use crate::application::services::{AuthService, ResourceService};
use crate::auth::TokenProvider;
use crate::error::AppError;
use crate::model::http::HttpClient;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Names of the sub-services, in the order the client exposes them
pub const SERVICE_NAMES: [&str; 14] = [
    "auth",
    "content",
    "tags",
    "archive",
    "collections",
    "files",
    "likes",
    "media",
    "search",
    "sharing",
    "extension",
    "ai",
    "comments",
    "system",
];

/// Constructor input of [`TaggyClient`]
#[derive(Clone)]
pub struct ClientOptions {
    /// Base URL of the REST API
    pub base_url: String,
    /// Optional API key sent with every request
    pub api_key: Option<String>,
    /// Log every request and response status at info level
    pub debug: bool,
    /// Bearer token source; `None` sends unauthenticated requests
    pub token_provider: Option<Arc<dyn TokenProvider>>,
}

impl ClientOptions {
    /// Options with only a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            debug: false,
            token_provider: None,
        }
    }

    /// Options built from a resolved configuration and a selected provider
    pub fn from_config(config: &Config, token_provider: Option<Arc<dyn TokenProvider>>) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            debug: config.debug,
            token_provider,
        }
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("debug", &self.debug)
            .field("token_provider", &self.token_provider.is_some())
            .finish()
    }
}

/// Client for the Taggy API
pub struct TaggyClient {
    http_client: Arc<HttpClient>,
    auth: Arc<AuthService>,
    content: Arc<ResourceService>,
    tags: Arc<ResourceService>,
    archive: Arc<ResourceService>,
    collections: Arc<ResourceService>,
    files: Arc<ResourceService>,
    likes: Arc<ResourceService>,
    media: Arc<ResourceService>,
    search: Arc<ResourceService>,
    sharing: Arc<ResourceService>,
    extension: Arc<ResourceService>,
    ai: Arc<ResourceService>,
    comments: Arc<ResourceService>,
    system: Arc<ResourceService>,
}

impl TaggyClient {
    /// Creates the client. No request is made and the token provider is not
    /// called until a sub-service is used.
    ///
    /// # Errors
    /// Returns [`AppError::Network`] if the HTTP client cannot be built.
    pub fn new(options: ClientOptions) -> Result<Self, AppError> {
        debug!("Creating Taggy client for {}", options.base_url);
        let http_client = Arc::new(HttpClient::new(&options)?);
        let resource = |name: &'static str| Arc::new(ResourceService::new(name, http_client.clone()));

        Ok(Self {
            auth: Arc::new(AuthService::new(http_client.clone())),
            content: resource("content"),
            tags: resource("tags"),
            archive: resource("archive"),
            collections: resource("collections"),
            files: resource("files"),
            likes: resource("likes"),
            media: resource("media"),
            search: resource("search"),
            sharing: resource("sharing"),
            extension: resource("extension"),
            ai: resource("ai"),
            comments: resource("comments"),
            system: resource("system"),
            http_client,
        })
    }

    /// Shared HTTP transport
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    /// Authentication and current user
    pub fn auth(&self) -> &Arc<AuthService> {
        &self.auth
    }

    /// Content items
    pub fn content(&self) -> &Arc<ResourceService> {
        &self.content
    }

    /// Tags
    pub fn tags(&self) -> &Arc<ResourceService> {
        &self.tags
    }

    /// Archived content
    pub fn archive(&self) -> &Arc<ResourceService> {
        &self.archive
    }

    /// Collections
    pub fn collections(&self) -> &Arc<ResourceService> {
        &self.collections
    }

    /// File uploads
    pub fn files(&self) -> &Arc<ResourceService> {
        &self.files
    }

    /// Likes
    pub fn likes(&self) -> &Arc<ResourceService> {
        &self.likes
    }

    /// Media
    pub fn media(&self) -> &Arc<ResourceService> {
        &self.media
    }

    /// Search
    pub fn search(&self) -> &Arc<ResourceService> {
        &self.search
    }

    /// Sharing
    pub fn sharing(&self) -> &Arc<ResourceService> {
        &self.sharing
    }

    /// Browser extension endpoints
    pub fn extension(&self) -> &Arc<ResourceService> {
        &self.extension
    }

    /// AI features
    pub fn ai(&self) -> &Arc<ResourceService> {
        &self.ai
    }

    /// Comments
    pub fn comments(&self) -> &Arc<ResourceService> {
        &self.comments
    }

    /// System status
    pub fn system(&self) -> &Arc<ResourceService> {
        &self.system
    }

    /// Resource sub-service by name; `auth` is reached through [`Self::auth`]
    #[must_use]
    pub fn service(&self, name: &str) -> Option<&Arc<ResourceService>> {
        match name {
            "content" => Some(&self.content),
            "tags" => Some(&self.tags),
            "archive" => Some(&self.archive),
            "collections" => Some(&self.collections),
            "files" => Some(&self.files),
            "likes" => Some(&self.likes),
            "media" => Some(&self.media),
            "search" => Some(&self.search),
            "sharing" => Some(&self.sharing),
            "extension" => Some(&self.extension),
            "ai" => Some(&self.ai),
            "comments" => Some(&self.comments),
            "system" => Some(&self.system),
            _ => None,
        }
    }
}

impl fmt::Debug for TaggyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggyClient")
            .field("http_client", &self.http_client)
            .finish_non_exhaustive()
    }
}
