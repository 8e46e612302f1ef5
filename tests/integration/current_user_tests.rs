use crate::common::{ANN, boot_app};
use serde_json::json;
use taggy::prelude::*;

fn ann() -> UserRecord {
    serde_json::from_value(json!({"id": "u1", "name": "Ann"})).unwrap()
}

#[tokio::test]
async fn test_get_current_user_success_updates_state() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/auth/me")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ANN)
        .create_async()
        .await;

    let app = boot_app(&server, ModuleOptions::new());
    let taggy = use_taggy(&app).unwrap();

    let user = taggy.get_current_user().await.unwrap();

    assert_eq!(user, ann());
    assert!(taggy.is_authenticated.get());
    assert_eq!(taggy.user.get(), Some(ann()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_state_is_shared_between_accessor_calls() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/auth/me")
        .with_status(200)
        .with_body(ANN)
        .create_async()
        .await;

    let app = boot_app(&server, ModuleOptions::new());
    use_taggy(&app).unwrap().get_current_user().await.unwrap();

    let other = use_taggy(&app).unwrap();
    assert!(other.is_authenticated.get());
    assert_eq!(user_field(&other.user.get().unwrap(), "name"), Some("Ann"));
}

#[tokio::test]
async fn test_get_current_user_failure_resets_state_and_returns_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/auth/me")
        .with_status(401)
        .with_body(r#"{"error": "invalid token"}"#)
        .create_async()
        .await;

    let app = boot_app(&server, ModuleOptions::new());
    let taggy = use_taggy(&app).unwrap();
    taggy.is_authenticated.set(true);
    taggy.user.set(Some(ann()));

    let err = taggy.get_current_user().await.unwrap_err();

    assert!(matches!(err, AppError::Unauthorized));
    assert!(!taggy.is_authenticated.get());
    assert!(taggy.user.get().is_none());
}

#[tokio::test]
async fn test_failure_error_is_the_underlying_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/auth/me")
        .with_status(503)
        .expect(2)
        .create_async()
        .await;

    let app = boot_app(&server, ModuleOptions::new());
    let taggy = use_taggy(&app).unwrap();

    let direct = taggy.auth.get_current_user().await.unwrap_err();
    let through_accessor = taggy.get_current_user().await.unwrap_err();

    assert!(matches!(
        through_accessor,
        AppError::Unexpected(status) if status.as_u16() == 503
    ));
    assert_eq!(direct.to_string(), through_accessor.to_string());
}

#[tokio::test]
async fn test_token_provider_error_passes_through() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/auth/me")
        .expect(0)
        .create_async()
        .await;

    let failing = token_fn(|| async { Err(AppError::TokenProvider("session expired".to_string())) });
    let app = boot_app(&server, ModuleOptions::new().with_get_token(failing));
    let taggy = use_taggy(&app).unwrap();
    taggy.is_authenticated.set(true);

    let err = taggy.get_current_user().await.unwrap_err();

    assert!(matches!(err, AppError::TokenProvider(msg) if msg == "session expired"));
    assert!(!taggy.is_authenticated.get());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_calls_each_write_state() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/auth/me")
        .with_status(200)
        .with_body(ANN)
        .expect(2)
        .create_async()
        .await;

    let app = boot_app(&server, ModuleOptions::new());
    let first = use_taggy(&app).unwrap();
    let second = use_taggy(&app).unwrap();

    let (a, b) = tokio::join!(first.get_current_user(), second.get_current_user());

    assert_eq!(a.unwrap(), b.unwrap());
    assert!(first.is_authenticated.get());
    assert_eq!(second.user.get(), Some(ann()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_subscribers_are_notified() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/auth/me")
        .with_status(200)
        .with_body(ANN)
        .create_async()
        .await;

    let app = boot_app(&server, ModuleOptions::new());
    let taggy = use_taggy(&app).unwrap();
    let mut authenticated = taggy.is_authenticated.subscribe();
    let mut user = taggy.user.subscribe();

    taggy.get_current_user().await.unwrap();

    assert!(authenticated.has_changed().unwrap());
    assert!(*authenticated.borrow_and_update());
    assert!(user.has_changed().unwrap());
    assert_eq!(*user.borrow_and_update(), Some(ann()));
}

#[tokio::test]
async fn test_published_auth_state_follows_get_current_user() {
    let mut server = mockito::Server::new_async().await;
    let ok = server
        .mock("GET", "/api/v1/auth/me")
        .with_status(200)
        .with_body(ANN)
        .create_async()
        .await;

    let app = boot_app(&server, ModuleOptions::new());
    let auth_state = app.inject::<AuthState>(AUTH_STATE_KEY).unwrap();
    let taggy = use_taggy(&app).unwrap();

    taggy.get_current_user().await.unwrap();
    assert!(auth_state.is_authenticated.get());
    assert_eq!(auth_state.user.get(), Some(ann()));

    ok.remove_async().await;
    let _denied = server
        .mock("GET", "/api/v1/auth/me")
        .with_status(401)
        .create_async()
        .await;

    taggy.get_current_user().await.unwrap_err();
    assert!(!auth_state.is_authenticated.get());
    assert!(auth_state.user.get().is_none());
}
