/******************************************************************************
   Author: Taggy Contributors
   Date: 18/10/26
******************************************************************************/

//! Host application the module is installed into
//!
//! Lifecycle:
//! 1. build time: modules run their setup against `&mut App`, adding imports,
//!    plugins and public runtime configuration
//! 2. [`App::boot`]: plugins run once, in registration order, and publish
//!    their instances into the [`Registry`]
//! 3. run time: components read from the registry through accessors

use crate::application::config::ModuleOptions;
use crate::application::registry::Registry;
use crate::auth::TokenStore;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

/// Bootstrap plugin run by [`App::boot`]
pub trait Plugin: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Runs once when the application boots
    ///
    /// # Errors
    /// Any error aborts the boot.
    fn setup(&self, app: &App) -> Result<(), AppError>;
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Public part of the runtime configuration, visible to server and client
pub struct PublicRuntimeConfig {
    /// Entry owned by the taggy module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taggy: Option<ModuleOptions>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Runtime configuration of the host application
pub struct RuntimeConfig {
    /// Public runtime configuration
    #[serde(default)]
    pub public: PublicRuntimeConfig,
}

impl RuntimeConfig {
    /// Runtime configuration populated from the environment
    #[must_use]
    pub fn from_env() -> Self {
        let taggy = ModuleOptions::from_env();
        Self {
            public: PublicRuntimeConfig {
                taggy: (!taggy.is_empty()).then_some(taggy),
            },
        }
    }
}

/// `major.minor.patch` version of the host framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HostVersion {
    /// Major version
    pub major: u64,
    /// Minor version
    pub minor: u64,
    /// Patch version
    pub patch: u64,
}

impl HostVersion {
    /// Creates a version
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for HostVersion {
    fn default() -> Self {
        Self::new(4, 0, 0)
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for HostVersion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidInput(format!("invalid host version: {s}"));
        let mut parts = s.trim().trim_start_matches('v').splitn(3, '.');
        let mut next = || -> Result<u64, AppError> {
            match parts.next() {
                None => Ok(0),
                Some(part) => {
                    let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
                    digits.parse().map_err(|_| invalid())
                }
            }
        };
        let major = next()?;
        let minor = next()?;
        let patch = next()?;
        Ok(Self::new(major, minor, patch))
    }
}

/// One running application instance
pub struct App {
    version: HostVersion,
    runtime_config: RuntimeConfig,
    registry: Registry,
    local_storage: Option<Arc<dyn TokenStore>>,
    imports: Vec<String>,
    plugins: Vec<Arc<dyn Plugin>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Application on the default host version, with empty runtime
    /// configuration and no local storage
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: HostVersion::default(),
            runtime_config: RuntimeConfig::default(),
            registry: Registry::new(),
            local_storage: None,
            imports: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Sets the host framework version
    #[must_use]
    pub fn with_version(mut self, version: HostVersion) -> Self {
        self.version = version;
        self
    }

    /// Sets the initial runtime configuration
    #[must_use]
    pub fn with_runtime_config(mut self, runtime_config: RuntimeConfig) -> Self {
        self.runtime_config = runtime_config;
        self
    }

    /// Makes local storage available to plugins
    #[must_use]
    pub fn with_local_storage(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.local_storage = Some(store);
        self
    }

    /// Host framework version
    #[must_use]
    pub fn version(&self) -> HostVersion {
        self.version
    }

    /// Runtime configuration
    #[must_use]
    pub fn runtime_config(&self) -> &RuntimeConfig {
        &self.runtime_config
    }

    /// Mutable runtime configuration, for module setup
    pub fn runtime_config_mut(&mut self) -> &mut RuntimeConfig {
        &mut self.runtime_config
    }

    /// Shared registry
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Local storage, when the application runs where one exists
    #[must_use]
    pub fn local_storage(&self) -> Option<&Arc<dyn TokenStore>> {
        self.local_storage.as_ref()
    }

    /// Registers an auto-imported name
    pub fn add_import(&mut self, name: &str) {
        if !self.imports.iter().any(|i| i == name) {
            debug!("Registering import {}", name);
            self.imports.push(name.to_string());
        }
    }

    /// Auto-imported names, in registration order
    #[must_use]
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// Registers a bootstrap plugin
    pub fn add_plugin(&mut self, plugin: Arc<dyn Plugin>) {
        debug!("Registering plugin {}", plugin.name());
        self.plugins.push(plugin);
    }

    /// Names of the registered plugins, in registration order
    #[must_use]
    pub fn plugin_names(&self) -> Vec<String> {
        self.plugins.iter().map(|p| p.name().to_string()).collect()
    }

    /// Runs every plugin once, in registration order
    ///
    /// # Errors
    /// The first plugin error; later plugins are not run.
    pub fn boot(&self) -> Result<(), AppError> {
        info!("Booting application with {} plugin(s)", self.plugins.len());
        for plugin in &self.plugins {
            debug!("Running plugin {}", plugin.name());
            plugin.setup(self)?;
        }
        Ok(())
    }

    /// Publishes `value` in the registry under `key`
    ///
    /// # Errors
    /// See [`Registry::provide`].
    pub fn provide<T: Any + Send + Sync>(&self, key: &str, value: Arc<T>) -> Result<(), AppError> {
        self.registry.provide(key, value)
    }

    /// Reads the value published under `key`
    ///
    /// # Errors
    /// See [`Registry::get`].
    pub fn inject<T: Any + Send + Sync>(&self, key: &str) -> Result<Arc<T>, AppError> {
        self.registry.get(key)
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("version", &self.version)
            .field("runtime_config", &self.runtime_config)
            .field("registry", &self.registry)
            .field("local_storage", &self.local_storage.is_some())
            .field("imports", &self.imports)
            .field("plugins", &self.plugin_names())
            .finish()
    }
}
