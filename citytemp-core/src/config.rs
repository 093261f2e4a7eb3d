use std::{fs, path::PathBuf, time::Duration};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::export::DEFAULT_OUTPUT_DIR;

/// Cities covered by the dashboard out of the box, in fetch order.
pub const DEFAULT_CITIES: [&str; 15] = [
    "New Delhi",
    "Kolkata",
    "Mumbai",
    "Chennai",
    "Bangalore",
    "Hyderabad",
    "Pune",
    "Gurgaon",
    "Lucknow",
    "Guwahati",
    "Bhubaneswar",
    "Ahmedabad",
    "Jaipur",
    "Dehradun",
    "Shimla",
];

const DEFAULT_REQUEST_DELAY_SECS: u64 = 1;

/// Top-level configuration stored on disk.
///
/// Every field has a default, so a partial TOML file (or none at all)
/// works.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Cities fetched on each run, in order.
    #[serde(default = "default_cities")]
    pub cities: Vec<String>,

    /// Directory export files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Seconds to wait between consecutive requests.
    #[serde(default = "default_request_delay_secs")]
    pub request_delay_secs: u64,
}

fn default_cities() -> Vec<String> {
    DEFAULT_CITIES.iter().map(|c| (*c).to_string()).collect()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_request_delay_secs() -> u64 {
    DEFAULT_REQUEST_DELAY_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cities: default_cities(),
            output_dir: default_output_dir(),
            request_delay_secs: default_request_delay_secs(),
        }
    }
}

impl Config {
    pub fn request_delay(&self) -> Duration {
        Duration::from_secs(self.request_delay_secs)
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, use the built-in city list.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "citytemp", "citytemp")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
