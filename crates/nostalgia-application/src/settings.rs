//! Settings shared by the onboarding flow and the replay controller.

use nostalgia_core::config::{AppConfig, Timings};
use nostalgia_core::locale::Catalog;
use nostalgia_core::shape::ShapeGenerator;

#[derive(Debug, Clone)]
pub struct FlowSettings {
    pub generator: ShapeGenerator,
    pub catalog: Catalog,
    pub timings: Timings,
}

impl FlowSettings {
    pub fn from_config(config: &AppConfig, catalog: Catalog) -> Self {
        Self {
            generator: ShapeGenerator::new(config.ball_size),
            catalog,
            timings: config.timings,
        }
    }

    /// Default generator and catalog with zero delays.
    pub fn immediate() -> Self {
        Self {
            generator: ShapeGenerator::default(),
            catalog: Catalog::default(),
            timings: Timings::immediate(),
        }
    }
}
