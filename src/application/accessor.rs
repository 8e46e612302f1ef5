/******************************************************************************
   Author: Taggy Contributors
   Date: 18/10/26
******************************************************************************/

//! Accessors used by application components
//!
//! ```ignore
//! let taggy = use_taggy(&app)?;
//! let tags: serde_json::Value = taggy.tags.list().await?;
//! let me = taggy.get_current_user().await?;
//! assert!(taggy.is_authenticated.get());
//! ```

use crate::application::app::App;
use crate::application::services::{AuthService, ResourceService};
use crate::application::state::{AuthState, StateCell};
use crate::client::TaggyClient;
use crate::constants::{AUTH_STATE_KEY, REGISTRY_KEY};
use crate::error::AppError;
use crate::model::user::UserRecord;
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, warn};

/// The published client and its sub-services
#[derive(Debug, Clone)]
pub struct TaggyServices {
    /// Client instance
    pub client: Arc<TaggyClient>,
    /// Auth sub-service
    pub auth: Arc<AuthService>,
    /// Content sub-service
    pub content: Arc<ResourceService>,
    /// Tags sub-service
    pub tags: Arc<ResourceService>,
    /// Archive sub-service
    pub archive: Arc<ResourceService>,
    /// Collections sub-service
    pub collections: Arc<ResourceService>,
    /// Files sub-service
    pub files: Arc<ResourceService>,
    /// Likes sub-service
    pub likes: Arc<ResourceService>,
    /// Media sub-service
    pub media: Arc<ResourceService>,
    /// Search sub-service
    pub search: Arc<ResourceService>,
    /// Sharing sub-service
    pub sharing: Arc<ResourceService>,
    /// Extension sub-service
    pub extension: Arc<ResourceService>,
    /// AI sub-service
    pub ai: Arc<ResourceService>,
    /// Comments sub-service
    pub comments: Arc<ResourceService>,
    /// System sub-service
    pub system: Arc<ResourceService>,
}

impl TaggyServices {
    /// Reads every sub-service off `client`
    pub fn from_client(client: Arc<TaggyClient>) -> Self {
        Self {
            auth: client.auth().clone(),
            content: client.content().clone(),
            tags: client.tags().clone(),
            archive: client.archive().clone(),
            collections: client.collections().clone(),
            files: client.files().clone(),
            likes: client.likes().clone(),
            media: client.media().clone(),
            search: client.search().clone(),
            sharing: client.sharing().clone(),
            extension: client.extension().clone(),
            ai: client.ai().clone(),
            comments: client.comments().clone(),
            system: client.system().clone(),
            client,
        }
    }
}

/// Services plus the shared authentication state
#[derive(Debug, Clone)]
pub struct Taggy {
    services: TaggyServices,
    auth_state: Arc<AuthState>,
    /// Whether the last current-user fetch succeeded
    pub is_authenticated: Arc<StateCell<bool>>,
    /// User returned by the last successful fetch
    pub user: Arc<StateCell<Option<UserRecord>>>,
}

impl Taggy {
    /// Builds the accessor from a client and the app's auth state
    pub fn new(client: Arc<TaggyClient>, auth_state: Arc<AuthState>) -> Self {
        Self {
            services: TaggyServices::from_client(client),
            is_authenticated: auth_state.is_authenticated.clone(),
            user: auth_state.user.clone(),
            auth_state,
        }
    }

    /// Stateless view
    #[must_use]
    pub fn services(&self) -> &TaggyServices {
        &self.services
    }

    /// Fetches the current user and records the outcome in the shared state
    ///
    /// On success the state becomes authenticated with the returned user. On
    /// failure it is reset and the error is returned as received. Concurrent
    /// calls are not serialized; the last one to finish decides the state.
    ///
    /// # Errors
    /// The error of the underlying auth call, unchanged.
    pub async fn get_current_user(&self) -> Result<UserRecord, AppError> {
        match self.services.auth.get_current_user().await {
            Ok(user) => {
                self.auth_state.set_authenticated(user.clone());
                debug!("Current user stored");
                Ok(user)
            }
            Err(e) => {
                warn!("Failed to get current user: {e}");
                self.auth_state.reset();
                Err(e)
            }
        }
    }
}

impl Deref for Taggy {
    type Target = TaggyServices;

    fn deref(&self) -> &Self::Target {
        &self.services
    }
}

/// Accessor with services and authentication state
///
/// # Errors
/// [`AppError::RegistryKeyNotFound`] when called before the app booted.
pub fn use_taggy(app: &App) -> Result<Taggy, AppError> {
    let client = app.inject::<TaggyClient>(REGISTRY_KEY)?;
    let auth_state = app.inject::<AuthState>(AUTH_STATE_KEY)?;
    Ok(Taggy::new(client, auth_state))
}

/// Accessor with services only
///
/// # Errors
/// [`AppError::RegistryKeyNotFound`] when called before the app booted.
pub fn use_taggy_services(app: &App) -> Result<TaggyServices, AppError> {
    let client = app.inject::<TaggyClient>(REGISTRY_KEY)?;
    Ok(TaggyServices::from_client(client))
}
