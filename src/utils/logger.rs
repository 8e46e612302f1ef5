use crate::utils::config::get_env_or_default;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber.
///
/// The level is read from `LOGLEVEL` (`TRACE`, `DEBUG`, `INFO`, `WARN`,
/// `ERROR`) and defaults to `INFO`. Safe to call more than once; only the
/// first call has an effect, and an already installed subscriber is left in
/// place.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_level(&get_env_or_default("LOGLEVEL", "INFO".to_string()));
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Log level set to: {level}");
        }
    });
}

fn parse_level(log_level: &str) -> Level {
    match log_level.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}
