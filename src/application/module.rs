use crate::application::app::App;
use crate::application::config::ModuleOptions;
use crate::application::plugin::TaggyPlugin;
use crate::constants::{
    ACCESSOR_IMPORT, CONFIG_KEY, DEFAULT_BASE_URL, DEFAULT_DEBUG, MODULE_NAME,
    SUPPORTED_HOST_MAJORS,
};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

/// Static description of the module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleMeta {
    /// Module name
    pub name: &'static str,
    /// Key of the module's entry in the configuration
    pub config_key: &'static str,
    /// Supported host major versions
    pub compatibility: &'static [u64],
}

/// Installs the Taggy client into a host application
#[derive(Debug, Default, Clone, Copy)]
pub struct TaggyModule;

impl TaggyModule {
    /// Module metadata
    pub const META: ModuleMeta = ModuleMeta {
        name: MODULE_NAME,
        config_key: CONFIG_KEY,
        compatibility: &SUPPORTED_HOST_MAJORS,
    };

    /// Module defaults applied under the user options
    #[must_use]
    pub fn defaults() -> ModuleOptions {
        ModuleOptions::new()
            .with_base_url(DEFAULT_BASE_URL)
            .with_debug(DEFAULT_DEBUG)
    }

    /// Build-time setup
    ///
    /// Registers the `use_taggy` import and the client plugin, then writes the
    /// options into `public.taggy` of the runtime configuration. Values
    /// already present there take precedence over `options`.
    ///
    /// # Errors
    /// [`AppError::IncompatibleHost`] when the host major version is not
    /// supported; nothing is registered in that case.
    pub fn setup(options: ModuleOptions, app: &mut App) -> Result<(), AppError> {
        let version = app.version();
        if !Self::META.compatibility.contains(&version.major) {
            warn!("{} does not support host version {}", Self::META.name, version);
            return Err(AppError::IncompatibleHost(format!(
                "{} requires host major version {:?}, found {}",
                Self::META.name,
                Self::META.compatibility,
                version
            )));
        }

        app.add_import(ACCESSOR_IMPORT);
        app.add_plugin(Arc::new(TaggyPlugin::new()));

        let options = options.merge_over(Self::defaults());
        let runtime = &mut app.runtime_config_mut().public;
        let existing = runtime.taggy.take().unwrap_or_default();
        runtime.taggy = Some(existing.merge_over(options));

        info!("{} module installed", Self::META.name);
        Ok(())
    }
}
