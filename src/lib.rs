//! # Taggy
//!
//! Integration of the Taggy API client into a host application.
//!
//! The crate does three things:
//! - resolves the module options over the defaults ([`application::config`])
//! - constructs one [`client::TaggyClient`] per application when it boots and
//!   publishes it in the application's registry ([`application::plugin`])
//! - gives components access to that client, its fourteen sub-services and
//!   the shared authentication state ([`application::accessor`])
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taggy::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let mut app = App::new();
//! TaggyModule::setup(
//!     ModuleOptions::new().with_get_token(token_fn(|| async { Ok("token".to_string()) })),
//!     &mut app,
//! )?;
//! app.boot()?;
//!
//! let taggy = use_taggy(&app)?;
//! let user = taggy.get_current_user().await?;
//! assert!(taggy.is_authenticated.get());
//! # let _ = user;
//! # Ok(())
//! # }
//! ```

/// Module wiring: configuration, host application, plugin and accessors
pub mod application;
/// Token providers and local token storage
pub mod auth;
/// Taggy API client
pub mod client;
/// Global constants
pub mod constants;
/// Error type
pub mod error;
/// Transport and data models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Logging and environment helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
