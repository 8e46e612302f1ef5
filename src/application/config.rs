use crate::auth::TokenProvider;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_DEBUG};
use crate::utils::config::{get_env_flag, get_env_or_none};
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Authentication options
#[derive(Clone, Default)]
pub struct AuthOptions {
    /// Custom token source; takes precedence over the local storage fallback
    pub get_token: Option<Arc<dyn TokenProvider>>,
}

impl AuthOptions {
    /// Options carrying `get_token`
    pub fn with_get_token(get_token: Arc<dyn TokenProvider>) -> Self {
        Self {
            get_token: Some(get_token),
        }
    }

    /// Field-wise merge where `self` wins
    #[must_use]
    pub fn merge_over(self, lower: AuthOptions) -> AuthOptions {
        AuthOptions {
            get_token: self.get_token.or(lower.get_token),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Options supplied by the application when installing the module
///
/// Every field is optional; omitted fields fall back to the defaults when the
/// options are resolved into a [`Config`].
pub struct ModuleOptions {
    /// Base URL of the Taggy API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// API key for the Taggy API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Enable request logging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    /// Authentication options
    #[serde(skip)]
    pub auth: Option<AuthOptions>,
}

impl ModuleOptions {
    /// Empty options: every field takes its default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the debug flag
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Sets a custom token provider
    #[must_use]
    pub fn with_get_token(mut self, get_token: Arc<dyn TokenProvider>) -> Self {
        self.auth = Some(AuthOptions::with_get_token(get_token));
        self
    }

    /// Reads options from the environment (and `.env`):
    /// `TAGGY_BASE_URL`, `TAGGY_API_KEY`, `TAGGY_DEBUG`.
    ///
    /// Unset variables stay `None` so they do not shadow other layers.
    #[must_use]
    pub fn from_env() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Self {
            base_url: get_env_or_none("TAGGY_BASE_URL"),
            api_key: get_env_or_none("TAGGY_API_KEY"),
            debug: get_env_flag("TAGGY_DEBUG"),
            auth: None,
        }
    }

    /// Deep merge where fields set on `self` win over `lower`
    #[must_use]
    pub fn merge_over(self, lower: ModuleOptions) -> ModuleOptions {
        let auth = match (self.auth, lower.auth) {
            (Some(upper), Some(lower)) => Some(upper.merge_over(lower)),
            (upper, lower) => upper.or(lower),
        };
        ModuleOptions {
            base_url: self.base_url.or(lower.base_url),
            api_key: self.api_key.or(lower.api_key),
            debug: self.debug.or(lower.debug),
            auth,
        }
    }

    /// True when no field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base_url.is_none() && self.api_key.is_none() && self.debug.is_none() && self.auth.is_none()
    }
}

impl fmt::Debug for ModuleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleOptions")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("debug", &self.debug)
            .field("auth", &self.auth.is_some())
            .finish()
    }
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
/// Resolved module configuration
///
/// Built once per application and shared read-only afterwards.
pub struct Config {
    /// Base URL of the Taggy API
    pub base_url: String,
    /// API key for the Taggy API
    pub api_key: Option<String>,
    /// Enable request logging
    pub debug: bool,
    /// Authentication options
    #[serde(skip)]
    pub auth: Option<AuthOptions>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            debug: DEFAULT_DEBUG,
            auth: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("debug", &self.debug)
            .field("get_token", &self.get_token().is_some())
            .finish()
    }
}

impl Config {
    /// Resolves `options` over the defaults. Supplied values win; nothing is
    /// validated here.
    #[must_use]
    pub fn resolve(options: ModuleOptions) -> Self {
        let defaults = Config::default();
        Self {
            base_url: options.base_url.unwrap_or(defaults.base_url),
            api_key: options.api_key.or(defaults.api_key),
            debug: options.debug.unwrap_or(defaults.debug),
            auth: options.auth.or(defaults.auth),
        }
    }

    /// User supplied token provider, if any
    #[must_use]
    pub fn get_token(&self) -> Option<&Arc<dyn TokenProvider>> {
        self.auth.as_ref().and_then(|auth| auth.get_token.as_ref())
    }
}
