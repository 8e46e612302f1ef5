/// Default base URL of the Taggy REST API
pub const DEFAULT_BASE_URL: &str = "https://api.taggy.com/api/v1";
/// Debug logging is off unless requested
pub const DEFAULT_DEBUG: bool = false;
/// Registry key under which the client is published
pub const REGISTRY_KEY: &str = "taggy";
/// Registry key under which the shared authentication state is published
pub const AUTH_STATE_KEY: &str = "taggy:auth";
/// Key of the public runtime configuration entry owned by this module
pub const CONFIG_KEY: &str = "taggy";
/// Name of the module as reported to the host application
pub const MODULE_NAME: &str = "taggy";
/// Local storage key holding the session token written by the login flow
pub const TOKEN_STORAGE_KEY: &str = "hanko_token";
/// Host framework major versions this module can be installed into
pub const SUPPORTED_HOST_MAJORS: [u64; 2] = [3, 4];
/// Name under which the accessor is registered as an auto-import
pub const ACCESSOR_IMPORT: &str = "use_taggy";
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("taggy-rs/", env!("CARGO_PKG_VERSION"));
/// Path of the current-user endpoint, relative to the base URL
pub const CURRENT_USER_PATH: &str = "auth/me";
/// Header carrying the optional API key
pub const API_KEY_HEADER: &str = "X-API-Key";
