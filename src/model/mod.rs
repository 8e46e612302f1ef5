/// HTTP transport shared by the sub-services
pub mod http;
/// User records returned by the auth service
pub mod user;
