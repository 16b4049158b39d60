use bitcoin_header_checkpoints::{CheckpointEntry, Checkpoints, SyncStatus};
use serde::Serialize;
use tracing::{error, info};

/// Printable view of the checkpoint policy in force.
#[derive(Serialize, Debug)]
pub struct TableSummary {
    pub enforced: bool,
    pub total_blocks_estimate: u32,
    pub last_checkpoint_time: i64,
    pub transactions_at_last_checkpoint: u64,
    pub transactions_per_day: f64,
    pub checkpoints: Vec<CheckpointEntry>,
}

impl TableSummary {
    pub fn new(checkpoints: &Checkpoints) -> Self {
        let table = checkpoints.table();
        TableSummary {
            enforced: checkpoints.enforced(),
            total_blocks_estimate: checkpoints.total_blocks_estimate(),
            last_checkpoint_time: table.last_checkpoint_time(),
            transactions_at_last_checkpoint: table.transactions_at_last_checkpoint(),
            transactions_per_day: table.transactions_per_day(),
            checkpoints: table.entries().collect(),
        }
    }
}

pub(crate) fn report_status(status: &SyncStatus) {
    if status.is_conflicting() {
        error!(
            tip = %status.tip,
            height = status.block.height,
            conflicts = ?status.conflicts,
            "Node Chain Conflicts With Checkpoints"
        );
    } else {
        info!(
            tip = %status.tip,
            height = status.block.height,
            progress = %format!("{:.2}%", status.progress * 100.0),
            last_verified_checkpoint = ?status.last_verified_checkpoint,
            "Sync Status"
        );
    }
}
