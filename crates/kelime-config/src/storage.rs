use std::env;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    ".kelime".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the per-key JSON files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = env::var("KELIME_DATA_DIR").unwrap_or_else(|_| default_data_dir());

        Self { data_dir }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}
