use bitcoin_header_checkpoints::CheckpointConfig;
use bitcoincore_rpc_async as rpc;
use rpc::Client;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// The different authentication methods for the client.
#[derive(Serialize, Deserialize)]
#[serde(remote = "rpc::Auth")]
pub enum Auth {
    None,
    UserPass(String, String),
    CookieFile(PathBuf),
}

#[derive(Serialize, Deserialize, Clone)]
pub struct BitcoinConfig {
    pub url: String,
    #[serde(with = "Auth")]
    pub auth: rpc::Auth,
}

impl BitcoinConfig {
    pub async fn get_new_client(&self) -> rpc::Result<Arc<Client>> {
        Ok(Arc::new(
            Client::new(self.url.clone(), self.auth.clone()).await?,
        ))
    }
}

pub(crate) const fn default_monitor_frequency_secs() -> u64 {
    30
}

#[derive(Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub checkpoints: CheckpointConfig,
    /// Node to watch; without one only the table summary is printed
    #[serde(default)]
    pub bitcoin: Option<BitcoinConfig>,
    #[serde(default = "default_monitor_frequency_secs")]
    pub monitor_frequency_secs: u64,
}

impl Config {
    pub fn monitor_frequency(&self) -> Duration {
        Duration::from_secs(self.monitor_frequency_secs.max(1))
    }
}

pub(crate) fn get_config() -> Result<Arc<Config>, Box<dyn Error>> {
    let config = std::env::var("CHECKPOINT_CONFIG_JSON").map(|s| serde_json::from_str(&s))??;
    Ok(Arc::new(config))
}
