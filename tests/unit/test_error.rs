use reqwest::StatusCode;
use taggy::error::AppError;

#[test]
fn test_app_error_display_unauthorized() {
    assert_eq!(AppError::Unauthorized.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_not_found() {
    assert_eq!(AppError::NotFound.to_string(), "not found");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_GATEWAY);
    assert!(error.to_string().contains("502"));
}

#[test]
fn test_app_error_display_registry() {
    assert_eq!(
        AppError::RegistryKeyNotFound("taggy".to_string()).to_string(),
        "registry key not found: taggy"
    );
    assert_eq!(
        AppError::RegistryKeyTaken("taggy".to_string()).to_string(),
        "registry key already provided: taggy"
    );
}

#[test]
fn test_from_status() {
    assert!(matches!(
        AppError::from_status(StatusCode::UNAUTHORIZED),
        AppError::Unauthorized
    ));
    assert!(matches!(
        AppError::from_status(StatusCode::NOT_FOUND),
        AppError::NotFound
    ));
    assert!(matches!(
        AppError::from_status(StatusCode::TOO_MANY_REQUESTS),
        AppError::RateLimitExceeded
    ));
    assert!(matches!(
        AppError::from_status(StatusCode::INTERNAL_SERVER_ERROR),
        AppError::Unexpected(StatusCode::INTERNAL_SERVER_ERROR)
    ));
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(matches!(app_error, AppError::Json(_)));
}

#[test]
fn test_app_error_from_io() {
    let app_error: AppError = std::io::Error::other("test").into();
    assert!(matches!(app_error, AppError::Io(_)));
    assert!(std::error::Error::source(&app_error).is_some());
}
