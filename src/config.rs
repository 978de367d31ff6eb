use rentdesk_render_core::{DEFAULT_DATE_FORMAT, DEFAULT_TIMESTAMP_FORMAT};
use rentdesk_types::{Orientation, PageSize};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variables override file values: `RENTDESK__OUTPUT_DIR=out`.
pub const ENV_PREFIX: &str = "RENTDESK";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Where finished exports are written.
    pub output_dir: PathBuf,
    /// Directory backing the key-value store (templates, cart).
    pub storage_dir: PathBuf,
    /// Root for site-rooted asset paths such as branding logos.
    pub asset_dir: PathBuf,
    /// Pre-rendered element snapshots, `<element_id>.png`.
    pub capture_dir: PathBuf,
    pub date_format: String,
    pub timestamp_format: String,
    pub page_size: PageSize,
    pub orientation: Orientation,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("exports"),
            storage_dir: PathBuf::from(".rentdesk"),
            asset_dir: PathBuf::from("public"),
            capture_dir: PathBuf::from("captures"),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
        }
    }
}

impl ExportConfig {
    /// Loads defaults, then the optional TOML file, then `RENTDESK__*` variables.
    pub fn load(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        );

        let config: ExportConfig = builder.build()?.try_deserialize()?;
        log::debug!("Loaded export configuration: {:?}", config);
        Ok(config)
    }
}
