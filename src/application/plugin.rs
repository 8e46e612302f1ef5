use crate::application::app::{App, Plugin};
use crate::application::config::Config;
use crate::application::state::AuthState;
use crate::auth::{StorageTokenProvider, TokenProvider, TokenStore};
use crate::client::{ClientOptions, TaggyClient};
use crate::constants::{AUTH_STATE_KEY, REGISTRY_KEY};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{debug, info};

/// Picks the token provider handed to the client
///
/// 1. the user supplied `get_token`, unchanged
/// 2. otherwise a provider reading local storage, when the app has one
/// 3. otherwise none
pub fn select_token_provider(
    config: &Config,
    local_storage: Option<&Arc<dyn TokenStore>>,
) -> Option<Arc<dyn TokenProvider>> {
    if let Some(get_token) = config.get_token() {
        debug!("Using custom token provider");
        return Some(get_token.clone());
    }
    match local_storage {
        Some(store) => {
            debug!("Using local storage token provider");
            let provider: Arc<dyn TokenProvider> =
                Arc::new(StorageTokenProvider::new(store.clone()));
            Some(provider)
        }
        None => {
            debug!("No token provider available");
            None
        }
    }
}

/// Bootstrap plugin constructing the client and publishing it
#[derive(Debug, Default, Clone, Copy)]
pub struct TaggyPlugin;

impl TaggyPlugin {
    /// Creates the plugin
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resolved configuration from the app's public runtime configuration
    #[must_use]
    pub fn config(app: &App) -> Config {
        let options = app
            .runtime_config()
            .public
            .taggy
            .clone()
            .unwrap_or_default();
        Config::resolve(options)
    }
}

impl Plugin for TaggyPlugin {
    fn name(&self) -> &str {
        "taggy"
    }

    fn setup(&self, app: &App) -> Result<(), AppError> {
        let config = Self::config(app);
        let token_provider = select_token_provider(&config, app.local_storage());

        let client = TaggyClient::new(ClientOptions::from_config(&config, token_provider))?;
        app.provide(REGISTRY_KEY, Arc::new(client))?;
        app.provide(AUTH_STATE_KEY, Arc::new(AuthState::new()))?;

        info!("Taggy client provided for {}", config.base_url);
        Ok(())
    }
}
