/// Accessors used by application components
pub mod accessor;
/// Host application, plugins and runtime configuration
pub mod app;
/// Module options and resolved configuration
pub mod config;
/// Module setup
pub mod module;
/// Client provisioning plugin
pub mod plugin;
/// Application-wide registry
pub mod registry;
/// Sub-services of the client
pub mod services;
/// Shared reactive state
pub mod state;
