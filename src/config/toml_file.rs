use crate::config::BotConfig;
use crate::utils::error::{BotError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional endpoint overlay loaded from a TOML file. Only the fields
/// present in the file override the CLI/default values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsFile {
    pub endpoints: EndpointsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsSection {
    pub indexer_base: Option<String>,
    pub rpc_base: Option<String>,
    pub tx_base: Option<String>,
    pub validators_base: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl EndpointsFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BotError::InvalidConfigValue {
            field: "config_file".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    pub fn apply(self, config: &mut BotConfig) {
        let endpoints = self.endpoints;
        if let Some(base) = endpoints.indexer_base {
            config.indexer_base = base;
        }
        if let Some(base) = endpoints.rpc_base {
            config.rpc_base = base;
        }
        if let Some(base) = endpoints.tx_base {
            config.tx_base = base;
        }
        if let Some(base) = endpoints.validators_base {
            config.validators_base = base;
        }
        if let Some(secs) = endpoints.request_timeout_secs {
            config.request_timeout_secs = secs;
        }
    }
}
