use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

const APP: (&str, &str, &str) = ("com", "ZenSpend", "zenspend");

/// Runtime configuration for one CLI invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    /// `--data-dir` / `ZENSPEND_DATA_DIR` wins; otherwise the platform data dir.
    pub fn resolve(data_dir: Option<&Path>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_data_dir()?,
        };
        Ok(Self { data_dir })
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().to_path_buf())
}
