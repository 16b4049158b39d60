use crate::table::CheckpointTable;
use crate::util::now_secs;
use serde::{Deserialize, Serialize};

/// How many times slower we expect transactions after the last checkpoint to
/// verify, since before it signature checks are skipped. This number is a
/// compromise and can't be accurate for every system: reindexing from a fast
/// disk with a slow CPU can be up to 20, while downloading over a slow network
/// with a fast multicore CPU won't be much higher than 1.
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

pub const SECONDS_PER_DAY: f64 = 86400.0;

/// The fields of a block index record the estimator reads.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct BlockSummary {
    pub height: u32,
    /// transactions in this block and all of its ancestors
    pub chain_tx: u64,
    /// UNIX timestamp from the block header
    pub time: i64,
}

/// Guess how far verification has got at `block`, in `[0.0, 1.0]`.
pub fn estimate_progress(table: &CheckpointTable, block: Option<&BlockSummary>) -> f64 {
    estimate_progress_at(table, block, now_secs())
}

/// Same as [`estimate_progress`] with the current time supplied by the caller.
///
/// Work is 1.0 per transaction up to the last checkpoint and
/// [`SIGCHECK_VERIFICATION_FACTOR`] per transaction after it. Transactions
/// not yet seen are extrapolated from `transactions_per_day`.
pub fn estimate_progress_at(
    table: &CheckpointTable,
    block: Option<&BlockSummary>,
    now: i64,
) -> f64 {
    let block = match block {
        Some(b) => b,
        None => return 0.0,
    };
    let tx_checkpoint = table.transactions_at_last_checkpoint() as f64;
    let chain_tx = block.chain_tx as f64;
    let per_day = table.transactions_per_day();

    let before_checkpoint = block.chain_tx <= table.transactions_at_last_checkpoint();
    let (work_before, work_after) = if before_checkpoint {
        let cheap_before = chain_tx;
        let cheap_after = tx_checkpoint - chain_tx;
        let expensive_after = days_between(table.last_checkpoint_time(), now) * per_day;
        (
            cheap_before,
            cheap_after + expensive_after * SIGCHECK_VERIFICATION_FACTOR,
        )
    } else {
        let cheap_before = tx_checkpoint;
        let expensive_before = chain_tx - tx_checkpoint;
        let expensive_after = days_between(block.time, now) * per_day;
        (
            cheap_before + expensive_before * SIGCHECK_VERIFICATION_FACTOR,
            expensive_after * SIGCHECK_VERIFICATION_FACTOR,
        )
    };

    let total = work_before + work_after;
    if total <= 0.0 {
        return 0.0;
    }
    (work_before / total).clamp(0.0, 1.0)
}

/// Days elapsed from `from` to `to`, never negative.
fn days_between(from: i64, to: i64) -> f64 {
    (to.saturating_sub(from) as f64 / SECONDS_PER_DAY).max(0.0)
}
