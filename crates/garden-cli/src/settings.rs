use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use garden_core::{ClusterTable, ClusterZone, GardenConfig, LayoutGenerator};
use serde::Deserialize;

/// Environment variable consulted when `--config` is not given.
pub const CONFIG_ENV: &str = "GARDEN_CONFIG";

/// Contents of the TOML config file. Every section is optional.
///
/// ```toml
/// [garden]
/// width = 100.0
/// min_spacing = 15.0
///
/// [garden.lifecycle]
/// bud_max_days = 7
///
/// [[zones]]
/// emotion = "happy"
/// center = { x = 25.0, y = 20.0 }
/// radius = 20.0
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub garden: GardenConfig,
    /// Replaces the built-in cluster table when present.
    pub zones: Option<Vec<ClusterZone>>,
}

impl Settings {
    /// Load from `path`, else from `$GARDEN_CONFIG`, else built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
        let Some(path) = path else {
            tracing::debug!("no config file, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::info!("loaded config from {}", path.display());
        Ok(settings)
    }

    pub fn cluster_table(&self) -> Result<ClusterTable> {
        match &self.zones {
            Some(zones) => ClusterTable::new(zones.clone()).context("invalid [[zones]] table"),
            None => Ok(ClusterTable::default()),
        }
    }

    pub fn generator(&self) -> Result<LayoutGenerator> {
        LayoutGenerator::new(self.garden.clone(), self.cluster_table()?)
            .context("invalid [garden] config")
    }
}
