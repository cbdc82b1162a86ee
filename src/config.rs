use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::DEFAULT_MAX_FILE_SIZE_BYTES;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    pub max_file_size_bytes: u64,
    pub last_output_dir: Option<PathBuf>,
    pub remote_endpoint: Option<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            last_output_dir: None,
            remote_endpoint: None,
        }
    }
}

impl ConverterConfig {
    pub fn load() -> Self {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("docshift").join("config.json");

            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = serde_json::from_str::<ConverterConfig>(&content) {
                        return config;
                    }
                }
            }
        }

        Self::default()
    }

    pub fn save(&self) {
        if let Some(config_dir) = dirs::config_dir() {
            let app_config_dir = config_dir.join("docshift");

            if let Ok(()) = std::fs::create_dir_all(&app_config_dir) {
                let config_path = app_config_dir.join("config.json");

                if let Ok(content) = serde_json::to_string_pretty(self) {
                    let _ = std::fs::write(&config_path, content);
                }
            }
        }
    }

    pub fn update_output_dir(&mut self, path: Option<PathBuf>) {
        self.last_output_dir = path;
        self.save();
    }
}
