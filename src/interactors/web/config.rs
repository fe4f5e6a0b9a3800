use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use serde::Deserialize;

use crate::constants::{DEFAULT_BASE_PATH, DEFAULT_POOL_MAX_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS,
                       DEFAULT_RESOURCE};

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_owned()
}

fn default_resource() -> String {
    DEFAULT_RESOURCE.to_owned()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_pool_max_size() -> usize {
    DEFAULT_POOL_MAX_SIZE
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    // all API paths are under this, eg. "/interactors/static"
    #[serde(default = "default_base_path")]
    pub base_path: String,
    // the resource used by every endpoint; clients can't choose one
    #[serde(default = "default_resource")]
    pub default_resource: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    // only used with a PostgreSQL database
    #[serde(default = "default_pool_max_size")]
    pub pool_max_size: usize,
}

impl Default for ServerConfig {
    fn default() -> ServerConfig {
        ServerConfig {
            base_path: default_base_path(),
            default_resource: default_resource(),
            request_timeout_secs: default_request_timeout_secs(),
            pool_max_size: default_pool_max_size(),
        }
    }
}

impl ServerConfig {
    pub fn read(config_file_name: &str) -> anyhow::Result<ServerConfig> {
        let file = File::open(config_file_name)
            .with_context(|| format!("failed to read {}", config_file_name))?;
        let reader = BufReader::new(file);

        serde_json::from_reader(reader)
            .with_context(|| format!("failed to parse {}", config_file_name))
    }

    pub fn from_json(json: &str) -> anyhow::Result<ServerConfig> {
        Ok(serde_json::from_str(json)?)
    }

    // the base path without a trailing slash, "" for the root
    pub fn normalised_base_path(&self) -> String {
        let trimmed = self.base_path.trim_end_matches('/');

        if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_owned()
        } else {
            format!("/{}", trimmed)
        }
    }
}
