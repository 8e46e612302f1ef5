/******************************************************************************
   Author: Taggy Contributors
   Date: 18/10/26
******************************************************************************/

//! # Taggy Prelude
//!
//! ```rust
//! use taggy::prelude::*;
//!
//! let config = Config::resolve(ModuleOptions::new().with_debug(true));
//! assert!(config.debug);
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::application::config::{AuthOptions, Config, ModuleOptions};

pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// HOST APPLICATION
// ============================================================================

pub use crate::application::app::{App, HostVersion, Plugin, PublicRuntimeConfig, RuntimeConfig};
pub use crate::application::module::{ModuleMeta, TaggyModule};
pub use crate::application::plugin::{TaggyPlugin, select_token_provider};
pub use crate::application::registry::Registry;

// ============================================================================
// ACCESSORS AND STATE
// ============================================================================

pub use crate::application::accessor::{Taggy, TaggyServices, use_taggy, use_taggy_services};
pub use crate::application::state::{AuthState, StateCell};

// ============================================================================
// CLIENT
// ============================================================================

pub use crate::application::services::{AuthService, ResourceService};
pub use crate::client::{ClientOptions, SERVICE_NAMES, TaggyClient};
pub use crate::model::http::HttpClient;
pub use crate::model::user::{UserRecord, user_field};

// ============================================================================
// AUTHENTICATION
// ============================================================================

pub use crate::auth::{
    FileTokenStore, FnTokenProvider, MemoryTokenStore, StorageTokenProvider, TokenProvider,
    TokenStore, token_fn,
};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;

pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
