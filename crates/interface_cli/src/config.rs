//! CLI configuration

use std::path::PathBuf;

use serde::Deserialize;

/// Console configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Directory holding the CSV data files
    pub data_dir: String,
    /// Log level
    pub log_level: String,
    /// Whether to load persisted data on startup
    pub load_data: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            log_level: "info".to_string(),
            load_data: false,
        }
    }
}

impl CliConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("MEDITRACK").try_parsing(true))
            .set_default("data_dir", "data")?
            .set_default("log_level", "info")?
            .set_default("load_data", false)?
            .build()?
            .try_deserialize()
    }

    pub fn doctors_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("doctors.csv")
    }

    pub fn patients_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("patients.csv")
    }

    pub fn appointments_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("appointments.csv")
    }

    pub fn bills_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("bills.csv")
    }
}
