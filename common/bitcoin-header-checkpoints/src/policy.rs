use crate::progress::{self, BlockSummary};
use crate::table::{active_table, ChainMode, CheckpointTable};
use sapio_bitcoin::BlockHash;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Read-only view of the blocks a node has already indexed, keyed by hash.
pub trait KnownBlocks<T> {
    fn lookup(&self, hash: &BlockHash) -> Option<&T>;
}

impl<T> KnownBlocks<T> for HashMap<BlockHash, T> {
    fn lookup(&self, hash: &BlockHash) -> Option<&T> {
        self.get(hash)
    }
}

impl<T> KnownBlocks<T> for BTreeMap<BlockHash, T> {
    fn lookup(&self, hash: &BlockHash) -> Option<&T> {
        self.get(hash)
    }
}

/// Returns false only when `height` is checkpointed and `hash` differs from
/// the checkpoint. A false result means the block, and every chain built on
/// it, must be refused.
pub fn check_block(
    table: &CheckpointTable,
    height: u32,
    hash: &BlockHash,
    enforce: bool,
) -> bool {
    if !enforce {
        return true;
    }
    match table.get(height) {
        None => true,
        Some(expected) if expected == hash => true,
        Some(expected) => {
            warn!(height, %hash, %expected, "Block Conflicts With Checkpoint");
            false
        }
    }
}

/// Height of the last checkpoint, or 0 if there is none or enforcement is off.
///
/// Only a hint for progress displays, the chain may be longer or shorter.
pub fn total_blocks_estimate(table: &CheckpointTable, enforce: bool) -> u32 {
    if !enforce {
        return 0;
    }
    table.last().map(|e| e.height).unwrap_or(0)
}

/// Finds the highest checkpoint whose block is present in `known_blocks`.
pub fn last_checkpoint_in_index<'a, T, K>(
    table: &CheckpointTable,
    known_blocks: &'a K,
    enforce: bool,
) -> Option<&'a T>
where
    K: KnownBlocks<T> + ?Sized,
{
    if !enforce {
        return None;
    }
    table
        .entries()
        .rev()
        .find_map(|entry| known_blocks.lookup(&entry.hash))
}

/// The checkpoint policy in force for this process.
///
/// Created once at startup from configuration and handed to whatever needs
/// it; never changes afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Checkpoints {
    table: &'static CheckpointTable,
    enforce: bool,
}

impl Checkpoints {
    pub fn new(mode: ChainMode, enforce: bool) -> Self {
        Checkpoints {
            table: active_table(mode),
            enforce,
        }
    }

    pub fn table(&self) -> &'static CheckpointTable {
        self.table
    }

    pub fn enforced(&self) -> bool {
        self.enforce
    }

    pub fn check_block(&self, height: u32, hash: &BlockHash) -> bool {
        check_block(self.table, height, hash, self.enforce)
    }

    pub fn total_blocks_estimate(&self) -> u32 {
        total_blocks_estimate(self.table, self.enforce)
    }

    pub fn last_checkpoint_in_index<'a, T, K>(&self, known_blocks: &'a K) -> Option<&'a T>
    where
        K: KnownBlocks<T> + ?Sized,
    {
        last_checkpoint_in_index(self.table, known_blocks, self.enforce)
    }

    pub fn estimate_progress(&self, block: Option<&BlockSummary>) -> f64 {
        progress::estimate_progress(self.table, block)
    }
}

impl Default for Checkpoints {
    fn default() -> Self {
        Checkpoints::new(ChainMode::Main, true)
    }
}
