use taggy::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    info!("Starting playground");

    let mut app = App::new().with_runtime_config(RuntimeConfig::from_env());

    // Custom getToken; a real application would read its session here
    let get_token = token_fn(|| async {
        info!("Using custom getToken function");
        Ok("custom_token_example".to_string())
    });
    TaggyModule::setup(ModuleOptions::new().with_get_token(get_token), &mut app)?;
    app.boot()?;
    info!("Application booted with plugins {:?}", app.plugin_names());

    let taggy = use_taggy(&app)?;
    match taggy.get_current_user().await {
        Ok(user) => info!("Logged in as {}", serde_json::Value::Object(user)),
        Err(e) => info!("Not logged in: {e}"),
    }
    info!("isAuthenticated = {}", taggy.is_authenticated.get());

    Ok(())
}
