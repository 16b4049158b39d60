use crate::data;
use sapio_bitcoin::BlockHash;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// A single trusted (height, hash) pair.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct CheckpointEntry {
    pub height: u32,
    pub hash: BlockHash,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CheckpointError {
    /// The literal hash at `height` is not 64 hex characters
    BadHash { height: u32, reason: String },
    /// Heights must be listed strictly ascending, without repeats
    UnorderedHeight { previous: u32, height: u32 },
}

impl std::fmt::Display for CheckpointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckpointError::BadHash { height, reason } => {
                write!(f, "bad checkpoint hash at height {}: {}", height, reason)
            }
            CheckpointError::UnorderedHeight { previous, height } => write!(
                f,
                "checkpoint height {} does not follow height {}",
                height, previous
            ),
        }
    }
}

impl std::error::Error for CheckpointError {}

/// An immutable, height ordered set of checkpoints along with the chain
/// statistics recorded at the last one.
///
/// The statistics feed the verification progress heuristic:
///
/// - `last_checkpoint_time`: UNIX timestamp of the last checkpoint block
/// - `transactions_at_last_checkpoint`: total number of transactions between
///   genesis and the last checkpoint, inclusive
/// - `transactions_per_day`: estimated number of transactions per day after
///   the last checkpoint. This is a calibration value, not a measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointTable {
    checkpoints: BTreeMap<u32, BlockHash>,
    last_checkpoint_time: i64,
    transactions_at_last_checkpoint: u64,
    transactions_per_day: f64,
}

impl CheckpointTable {
    /// Builds a table from a literal list of `(height, hex)` pairs.
    ///
    /// An empty hex string stands for the all zero hash.
    pub fn from_literal(
        entries: &[(u32, &str)],
        last_checkpoint_time: i64,
        transactions_at_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Result<Self, CheckpointError> {
        let mut checkpoints = BTreeMap::new();
        let mut previous: Option<u32> = None;
        for &(height, hex) in entries {
            if let Some(previous) = previous {
                if height <= previous {
                    return Err(CheckpointError::UnorderedHeight { previous, height });
                }
            }
            let hash = if hex.is_empty() {
                BlockHash::default()
            } else {
                BlockHash::from_str(hex).map_err(|e| CheckpointError::BadHash {
                    height,
                    reason: e.to_string(),
                })?
            };
            checkpoints.insert(height, hash);
            previous = Some(height);
        }
        Ok(CheckpointTable {
            checkpoints,
            last_checkpoint_time,
            transactions_at_last_checkpoint,
            transactions_per_day,
        })
    }

    pub fn get(&self, height: u32) -> Option<&BlockHash> {
        self.checkpoints.get(&height)
    }

    pub fn contains_height(&self, height: u32) -> bool {
        self.checkpoints.contains_key(&height)
    }

    /// The checkpoint with the greatest height, if any.
    pub fn last(&self) -> Option<CheckpointEntry> {
        self.checkpoints
            .iter()
            .next_back()
            .map(|(&height, &hash)| CheckpointEntry { height, hash })
    }

    /// All checkpoints, lowest height first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = CheckpointEntry> + '_ {
        self.checkpoints
            .iter()
            .map(|(&height, &hash)| CheckpointEntry { height, hash })
    }

    /// Checkpoints at or below `height`, lowest height first.
    pub fn entries_up_to(
        &self,
        height: u32,
    ) -> impl DoubleEndedIterator<Item = CheckpointEntry> + '_ {
        self.checkpoints
            .range(..=height)
            .map(|(&height, &hash)| CheckpointEntry { height, hash })
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    pub fn last_checkpoint_time(&self) -> i64 {
        self.last_checkpoint_time
    }

    pub fn transactions_at_last_checkpoint(&self) -> u64 {
        self.transactions_at_last_checkpoint
    }

    pub fn transactions_per_day(&self) -> f64 {
        self.transactions_per_day
    }
}

/// Which of the two compiled-in tables is in force.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChainMode {
    #[default]
    Main,
    Test,
}

impl ChainMode {
    pub fn from_testnet(testnet: bool) -> Self {
        if testnet {
            ChainMode::Test
        } else {
            ChainMode::Main
        }
    }
}

lazy_static::lazy_static! {
    static ref MAIN_CHECKPOINTS: CheckpointTable = CheckpointTable::from_literal(
        data::MAIN_CHECKPOINTS,
        data::MAIN_LAST_CHECKPOINT_TIME,
        data::MAIN_TRANSACTIONS_LAST_CHECKPOINT,
        data::MAIN_TRANSACTIONS_PER_DAY,
    )
    .expect("compiled-in main checkpoints must be well formed");
    static ref TEST_CHECKPOINTS: CheckpointTable = CheckpointTable::from_literal(
        data::TEST_CHECKPOINTS,
        data::TEST_LAST_CHECKPOINT_TIME,
        data::TEST_TRANSACTIONS_LAST_CHECKPOINT,
        data::TEST_TRANSACTIONS_PER_DAY,
    )
    .expect("compiled-in test checkpoints must be well formed");
}

/// Returns the compiled-in table for `mode`.
pub fn active_table(mode: ChainMode) -> &'static CheckpointTable {
    match mode {
        ChainMode::Main => &MAIN_CHECKPOINTS,
        ChainMode::Test => &TEST_CHECKPOINTS,
    }
}
