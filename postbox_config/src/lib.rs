use std::path::Path;

use anyhow::Context;
use config::{Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Environment variable holding a colon separated list of additional config
/// files.
pub const CONFIG_PATHS_ENV: &str = "POSTBOX_CONFIG";

/// Load the embedded defaults, then the files listed in `POSTBOX_CONFIG`, then
/// `POSTBOX__*` environment variables.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var(CONFIG_PATHS_ENV).unwrap_or_default();
    let paths = paths.split(':').filter(|path| !path.is_empty()).collect::<Vec<_>>();
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    paths
        .iter()
        .try_fold(builder, |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(Environment::with_prefix("POSTBOX").prefix_separator("__").separator("__"))
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub form: FormConfig,
}

#[derive(Debug, Deserialize)]
pub struct FormConfig {
    pub title: String,
    pub submit_label: String,
}
