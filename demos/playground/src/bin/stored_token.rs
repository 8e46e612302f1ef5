use std::env;
use std::sync::Arc;
use taggy::prelude::*;
use tracing::info;

/// Boots the module with the local-storage token fallback
///
/// The storage file is a flat JSON object, e.g. `{"hanko_token": "..."}`.
///
/// Run with: TAGGY_STORAGE=storage.json cargo run --bin stored_token
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let path = env::var("TAGGY_STORAGE").unwrap_or_else(|_| "storage.json".to_string());
    info!("Reading local storage from {}", path);

    let mut app = App::new()
        .with_runtime_config(RuntimeConfig::from_env())
        .with_local_storage(Arc::new(FileTokenStore::new(&path)));
    TaggyModule::setup(ModuleOptions::new(), &mut app)?;
    app.boot()?;

    let taggy = use_taggy(&app)?;
    let status: serde_json::Value = taggy.system.get("status").await?;
    info!("System status: {}", status);

    match taggy.get_current_user().await {
        Ok(user) => info!("Current user id: {:?}", user_field(&user, "id")),
        Err(e) => info!("Not logged in: {e}"),
    }

    Ok(())
}
