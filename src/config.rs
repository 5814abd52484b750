//! Runtime settings, read once from the environment at startup.

use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use log::info;

pub const DEFAULT_PORT: u16 = 5000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_DATASET: &str = "bias_data.json";
const DEFAULT_STATIC_DIR: &str = "build";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub dataset_path: PathBuf,
    pub static_dir: PathBuf,
    /// Decided once here; the router never looks at the filesystem again.
    pub serve_static_bundle: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| {
            get(key).unwrap_or_else(|| {
                info!("{key} not set, using default: {default}");
                default.to_string()
            })
        };

        let port_raw = or_default("PORT", &DEFAULT_PORT.to_string());
        let port = port_raw
            .trim()
            .parse()
            .with_context(|| format!("PORT must be a number, got {port_raw:?}"))?;

        let static_dir = PathBuf::from(or_default("STATIC_DIR", DEFAULT_STATIC_DIR));
        let serve_static_bundle = static_dir.is_dir();

        Ok(Self {
            bind_addr: or_default("BIND_ADDR", DEFAULT_BIND_ADDR),
            port,
            dataset_path: PathBuf::from(or_default("DATASET_PATH", DEFAULT_DATASET)),
            static_dir,
            serve_static_bundle,
        })
    }

    pub fn bundle_dir(&self) -> Option<PathBuf> {
        self.serve_static_bundle.then(|| self.static_dir.clone())
    }
}
