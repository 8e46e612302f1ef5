use std::sync::Arc;
use taggy::application::app::{App, HostVersion, PublicRuntimeConfig, RuntimeConfig};
use taggy::application::config::ModuleOptions;
use taggy::application::module::TaggyModule;
use taggy::application::plugin::TaggyPlugin;
use taggy::auth::token_fn;
use taggy::constants::{ACCESSOR_IMPORT, CONFIG_KEY, DEFAULT_BASE_URL, MODULE_NAME};
use taggy::error::AppError;

fn app_with_runtime(options: ModuleOptions) -> App {
    App::new().with_runtime_config(RuntimeConfig {
        public: PublicRuntimeConfig {
            taggy: Some(options),
        },
    })
}

#[test]
fn test_module_meta() {
    assert_eq!(TaggyModule::META.name, MODULE_NAME);
    assert_eq!(TaggyModule::META.config_key, CONFIG_KEY);
    assert_eq!(TaggyModule::META.compatibility, &[3, 4]);
}

#[test]
fn test_setup_accepts_supported_hosts() {
    for version in ["3.0.0", "3.16.2", "4.1.0"] {
        let mut app = App::new().with_version(version.parse::<HostVersion>().unwrap());
        TaggyModule::setup(ModuleOptions::new(), &mut app).unwrap();
        assert_eq!(app.imports(), [ACCESSOR_IMPORT.to_string()]);
    }
}

#[test]
fn test_setup_rejects_unsupported_host() {
    let mut app = App::new().with_version(HostVersion::new(5, 0, 0));
    let err = TaggyModule::setup(ModuleOptions::new(), &mut app).unwrap_err();
    assert!(matches!(err, AppError::IncompatibleHost(msg) if msg.contains("5.0.0")));
}

#[test]
fn test_runtime_config_wins_over_module_options() {
    let mut app = app_with_runtime(ModuleOptions::new().with_base_url("https://runtime.example.com"));
    TaggyModule::setup(
        ModuleOptions::new()
            .with_base_url("https://options.example.com")
            .with_api_key("options_key"),
        &mut app,
    )
    .unwrap();

    let config = TaggyPlugin::config(&app);
    assert_eq!(config.base_url, "https://runtime.example.com");
    assert_eq!(config.api_key.as_deref(), Some("options_key"));
    assert!(!config.debug);
}

#[test]
fn test_module_options_win_over_defaults() {
    let mut app = App::new();
    TaggyModule::setup(ModuleOptions::new().with_debug(true), &mut app).unwrap();
    let config = TaggyPlugin::config(&app);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert!(config.debug);
}

#[test]
fn test_setup_keeps_get_token_identity() {
    let custom = token_fn(|| async { Ok("custom".to_string()) });
    let mut app = App::new();
    TaggyModule::setup(ModuleOptions::new().with_get_token(custom.clone()), &mut app).unwrap();
    let config = TaggyPlugin::config(&app);
    assert!(Arc::ptr_eq(config.get_token().unwrap(), &custom));
}

#[test]
fn test_plugin_config_without_setup_uses_defaults() {
    let app = App::new();
    let config = TaggyPlugin::config(&app);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api_key, None);
}

#[test]
fn test_app_debug_masks_api_key() {
    let mut app = App::new();
    TaggyModule::setup(ModuleOptions::new().with_api_key("sk_live_SECRET"), &mut app).unwrap();
    app.boot().unwrap();

    let rendered = format!("{app:?}");
    assert!(!rendered.contains("sk_live_SECRET"));
    assert!(rendered.contains("***"));
}
