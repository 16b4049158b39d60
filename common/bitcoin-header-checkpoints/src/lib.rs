//! Compiled-in block checkpoints: rejecting chains that disagree with known
//! history, finding the reorganization floor in a block index, and guessing
//! initial sync progress.

mod config;
mod data;
mod monitor;
mod policy;
mod progress;
mod rpc;
mod table;
pub mod util;

pub use config::CheckpointConfig;
pub use monitor::{ChainSource, CheckpointConflict, CheckpointMonitor, SyncStatus};
pub use policy::{
    check_block, last_checkpoint_in_index, total_blocks_estimate, Checkpoints, KnownBlocks,
};
pub use progress::{
    estimate_progress, estimate_progress_at, BlockSummary, SECONDS_PER_DAY,
    SIGCHECK_VERIFICATION_FACTOR,
};
pub use table::{active_table, ChainMode, CheckpointEntry, CheckpointError, CheckpointTable};
