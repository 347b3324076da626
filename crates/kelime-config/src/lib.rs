use serde::{Deserialize, Serialize};

use self::storage::StorageConfig;
use self::translator::TranslatorConfig;

pub mod storage;
pub mod translator;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub storage: StorageConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            translator: TranslatorConfig::new(),
            storage: StorageConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            translator: TranslatorConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}
