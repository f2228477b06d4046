use crate::error::{config_error, BookingResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the appointment snapshot file
pub const DEFAULT_SNAPSHOT_PATH: &str = "data/appointments.json";

/// Default location of the optional TOML configuration file
pub const CONFIG_FILE: &str = "config/cita.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// JSON file holding the existing appointments
    pub snapshot_path: PathBuf,
    /// JSON file holding the service list, if any
    pub services_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            services_path: None,
        }
    }
}

/// Values that may appear in the configuration file
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    snapshot_path: Option<PathBuf>,
    services_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the config file and environment
    pub fn load() -> BookingResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = Self::from_file(Path::new(CONFIG_FILE))?;

        // Environment wins over the file
        if let Ok(path) = env::var("CITA_SNAPSHOT") {
            config.snapshot_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("CITA_SERVICES") {
            config.services_path = Some(PathBuf::from(path));
        }

        if config.snapshot_path.as_os_str().is_empty() {
            return Err(config_error("snapshot_path must not be empty"));
        }

        Ok(config)
    }

    /// Read the TOML file, falling back to defaults when it does not exist
    pub fn from_file(path: &Path) -> BookingResult<Self> {
        let mut config = Self::default();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(config),
            Err(e) => return Err(e.into()),
        };

        let file: FileConfig = toml::from_str(&content)?;
        if let Some(snapshot_path) = file.snapshot_path {
            config.snapshot_path = snapshot_path;
        }
        config.services_path = file.services_path;

        Ok(config)
    }
}
