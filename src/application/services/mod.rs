/// Module containing the auth sub-service
pub mod auth_service;
/// Module containing the generic resource sub-service
pub mod resource_service;

pub use auth_service::*;
pub use resource_service::*;
