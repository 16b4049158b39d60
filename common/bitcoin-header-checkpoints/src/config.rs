use crate::policy::Checkpoints;
use crate::table::ChainMode;
use serde::{Deserialize, Serialize};

pub(crate) const fn default_enforce() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub struct CheckpointConfig {
    /// When false every block passes `check_block` and no checkpoint is
    /// reported
    #[serde(default = "default_enforce")]
    pub enforce: bool,
    #[serde(default)]
    pub testnet: bool,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        CheckpointConfig {
            enforce: default_enforce(),
            testnet: false,
        }
    }
}

impl CheckpointConfig {
    pub fn mode(&self) -> ChainMode {
        ChainMode::from_testnet(self.testnet)
    }

    pub fn checkpoints(&self) -> Checkpoints {
        Checkpoints::new(self.mode(), self.enforce)
    }
}
