pub mod onboard;
pub mod replay;
pub mod saved;
pub mod shape;

use anyhow::Result;
use nostalgia_application::FlowSettings;
use nostalgia_core::config::AppConfig;
use nostalgia_core::install_mode::InstallMode;
use nostalgia_core::locale::Catalog;
use nostalgia_infrastructure::{NostalgiaPaths, StorageBackends};
use tracing::debug;

/// Everything a subcommand needs, resolved once at startup.
pub struct AppContext {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub backends: StorageBackends,
}

impl AppContext {
    pub fn new(config: AppConfig, paths: NostalgiaPaths) -> Result<Self> {
        let environment = std::env::var("LANG").ok();
        let catalog = Catalog::detect(config.locale.as_deref(), environment.as_deref());
        let install_mode = InstallMode::detect(config.display_mode);
        let backends = StorageBackends::open(install_mode, &paths)?;
        debug!(locale = catalog.tag(), ?install_mode, "context ready");

        Ok(Self {
            config,
            catalog,
            backends,
        })
    }

    pub fn settings(&self) -> FlowSettings {
        FlowSettings::from_config(&self.config, self.catalog.clone())
    }
}
