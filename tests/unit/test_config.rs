use assert_json_diff::assert_json_eq;
use serde_json::json;
use std::sync::Arc;
use taggy::application::config::{AuthOptions, Config, ModuleOptions};
use taggy::auth::token_fn;
use taggy::constants::DEFAULT_BASE_URL;

#[test]
fn test_resolve_is_right_biased_and_total() {
    for mask in 0..8_u8 {
        let mut options = ModuleOptions::new();
        if mask & 1 != 0 {
            options = options.with_base_url("https://custom.example.com/api");
        }
        if mask & 2 != 0 {
            options = options.with_api_key("key_123");
        }
        if mask & 4 != 0 {
            options = options.with_debug(true);
        }

        let config = Config::resolve(options);

        if mask & 1 != 0 {
            assert_eq!(config.base_url, "https://custom.example.com/api");
        } else {
            assert_eq!(config.base_url, DEFAULT_BASE_URL);
        }
        if mask & 2 != 0 {
            assert_eq!(config.api_key.as_deref(), Some("key_123"));
        } else {
            assert_eq!(config.api_key, None);
        }
        assert_eq!(config.debug, mask & 4 != 0);
        assert!(config.auth.is_none());
    }
}

#[test]
fn test_resolve_keeps_explicit_false_debug() {
    let config = Config::resolve(ModuleOptions::new().with_debug(false));
    assert!(!config.debug);
}

#[test]
fn test_resolve_passes_get_token_through() {
    let custom = token_fn(|| async { Ok("custom_token_example".to_string()) });
    let config = Config::resolve(ModuleOptions::new().with_get_token(custom.clone()));
    assert!(Arc::ptr_eq(config.get_token().unwrap(), &custom));
}

#[test]
fn test_resolve_auth_without_get_token() {
    let options = ModuleOptions {
        auth: Some(AuthOptions::default()),
        ..ModuleOptions::default()
    };
    let config = Config::resolve(options);
    assert!(config.auth.is_some());
    assert!(config.get_token().is_none());
}

#[test]
fn test_config_serialization() {
    let config = Config::resolve(ModuleOptions::new().with_api_key("key_123"));
    let value = serde_json::to_value(&config).unwrap();
    assert_json_eq!(
        value,
        json!({
            "baseUrl": "https://api.taggy.com/api/v1",
            "apiKey": "key_123",
            "debug": false
        })
    );
}

#[test]
fn test_module_options_serialization_skips_unset() {
    let options = ModuleOptions::new().with_debug(true);
    let value = serde_json::to_value(&options).unwrap();
    assert_json_eq!(value, json!({ "debug": true }));
}

#[test]
fn test_module_options_deserialization() {
    let options: ModuleOptions =
        serde_json::from_str(r#"{"baseUrl": "https://staging.example.com", "debug": true}"#)
            .unwrap();
    assert_eq!(options.base_url.as_deref(), Some("https://staging.example.com"));
    assert_eq!(options.api_key, None);
    assert_eq!(options.debug, Some(true));
    assert!(options.auth.is_none());
}

#[test]
fn test_config_debug_masks_api_key() {
    let options = ModuleOptions::new().with_api_key("sk_live_SECRET");
    let options_debug = format!("{options:?}");
    assert!(!options_debug.contains("sk_live_SECRET"));
    assert!(options_debug.contains("***"));

    let config = Config::resolve(options);
    let config_debug = format!("{config:?}");
    assert!(!config_debug.contains("sk_live_SECRET"));
    assert!(config_debug.contains(DEFAULT_BASE_URL));
}

#[test]
fn test_merge_over_upper_wins_field_by_field() {
    let upper = ModuleOptions::new().with_base_url("https://upper.example.com");
    let lower = ModuleOptions::new()
        .with_base_url("https://lower.example.com")
        .with_api_key("lower_key")
        .with_debug(true);
    let merged = upper.merge_over(lower);
    assert_eq!(merged.base_url.as_deref(), Some("https://upper.example.com"));
    assert_eq!(merged.api_key.as_deref(), Some("lower_key"));
    assert_eq!(merged.debug, Some(true));
}
