use std::sync::Arc;
use taggy::auth::{
    FileTokenStore, MemoryTokenStore, StorageTokenProvider, TokenProvider, TokenStore, token_fn,
};
use taggy::constants::TOKEN_STORAGE_KEY;
use taggy::error::AppError;

fn temp_store_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("taggy-{}-{}.json", name, std::process::id()))
}

#[test]
fn test_file_store_reads_key() {
    let path = temp_store_path("read");
    std::fs::write(&path, r#"{"hanko_token": "tok_file", "other": "x"}"#).unwrap();
    let store = FileTokenStore::new(&path);
    assert_eq!(
        store.get_item(TOKEN_STORAGE_KEY).unwrap().as_deref(),
        Some("tok_file")
    );
    assert_eq!(store.get_item("missing").unwrap(), None);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_file_store_invalid_json() {
    let path = temp_store_path("invalid");
    std::fs::write(&path, "not json").unwrap();
    let store = FileTokenStore::new(&path);
    assert!(matches!(
        store.get_item(TOKEN_STORAGE_KEY).unwrap_err(),
        AppError::Json(_)
    ));
    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn test_storage_provider_swallows_read_errors() {
    let path = temp_store_path("provider-invalid");
    std::fs::write(&path, "not json").unwrap();
    let provider = StorageTokenProvider::new(Arc::new(FileTokenStore::new(&path)));
    assert_eq!(provider.get_token().await.unwrap(), "");
    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn test_storage_provider_custom_key() {
    let store = Arc::new(MemoryTokenStore::new());
    store.set_item("session", "tok_session");
    store.set_item(TOKEN_STORAGE_KEY, "tok_hanko");
    let provider = StorageTokenProvider::with_key(store, "session");
    assert_eq!(provider.key(), "session");
    assert_eq!(provider.get_token().await.unwrap(), "tok_session");
}

#[test]
fn test_token_fn_blocking() {
    let provider = token_fn(|| async { Ok("blocking".to_string()) });
    let token = tokio_test::block_on(provider.get_token()).unwrap();
    assert_eq!(token, "blocking");
}
