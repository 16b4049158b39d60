use crate::policy::Checkpoints;
use crate::progress::BlockSummary;
use crate::util::{AbstractResult, INFER_UNIT};
use sapio_bitcoin::BlockHash;
use serde::{Deserialize, Serialize};
use std::{
    future::Future,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{sync::RwLock, task::JoinHandle};
use tracing::{debug, warn};

/// A node whose best chain we can inspect.
pub trait ChainSource: Send + Sync + 'static {
    fn best_block_hash(&self) -> impl Future<Output = AbstractResult<BlockHash>> + Send;
    fn block_summary(
        &self,
        hash: &BlockHash,
    ) -> impl Future<Output = AbstractResult<BlockSummary>> + Send;
    /// Hash of the best chain's block at `height`, which must not exceed the tip
    fn block_hash_at(
        &self,
        height: u32,
    ) -> impl Future<Output = AbstractResult<BlockHash>> + Send;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct CheckpointConflict {
    pub height: u32,
    pub expected: BlockHash,
    pub found: BlockHash,
}

/// What the node's best chain looked like at the last refresh.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SyncStatus {
    pub tip: BlockHash,
    pub block: BlockSummary,
    pub progress: f64,
    pub total_blocks_estimate: u32,
    /// Highest checkpoint the node's chain agrees with
    pub last_verified_checkpoint: Option<u32>,
    pub conflicts: Vec<CheckpointConflict>,
}

impl SyncStatus {
    pub fn is_conflicting(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

pub struct CheckpointMonitor<S> {
    cache: Arc<RwLock<SyncStatus>>,
    source: Arc<S>,
    checkpoints: Checkpoints,
    frequency: Duration,
    pub(crate) quit: Arc<AtomicBool>,
    pub(crate) running: Arc<AtomicBool>,
}

impl<S> Clone for CheckpointMonitor<S> {
    fn clone(&self) -> Self {
        CheckpointMonitor {
            cache: self.cache.clone(),
            source: self.source.clone(),
            checkpoints: self.checkpoints,
            frequency: self.frequency,
            quit: self.quit.clone(),
            running: self.running.clone(),
        }
    }
}

impl<S: ChainSource> CheckpointMonitor<S> {
    // Creates a new CheckpointMonitor.
    // Default initialized if the source cannot be reached.
    pub async fn new(
        source: Arc<S>,
        checkpoints: Checkpoints,
        frequency: Option<Duration>,
        quit: Arc<AtomicBool>,
    ) -> Self {
        let new = fresh(&*source, checkpoints, None)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "Initial Sync Status Unavailable");
                None
            })
            .unwrap_or_default();
        CheckpointMonitor {
            cache: Arc::new(RwLock::new(new)),
            source,
            checkpoints,
            frequency: frequency.unwrap_or(Duration::from_secs(30)),
            quit,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn run_monitor_service(&self) -> Option<JoinHandle<AbstractResult<()>>> {
        debug!("Checkpoint Monitor Starting...");
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            == Ok(false)
        {
            let mut this = self.clone();
            Some(tokio::spawn(async move {
                while !this.quit.load(Ordering::Relaxed) {
                    tokio::time::sleep(this.frequency).await;
                    debug!("Attempting Sync Status Refresh");
                    this.refresh_cache().await;
                }
                this.running.store(false, Ordering::Relaxed);
                INFER_UNIT
            }))
        } else {
            tracing::error!("Checkpoint Monitor Already Started...");
            None
        }
    }

    pub async fn read_cache(&self) -> SyncStatus {
        self.cache.read().await.clone()
    }

    async fn write_cache(&self, s: SyncStatus) {
        let mut w = self.cache.write().await;
        *w = s;
    }

    pub(crate) async fn refresh_cache(&mut self) {
        let value_in_cache = self.read_cache().await.tip;
        match fresh(&*self.source, self.checkpoints, Some(value_in_cache)).await {
            Ok(Some(s)) => self.write_cache(s).await,
            Ok(None) => (),
            Err(e) => debug!(error = %e, "Sync Status Refresh Failed"),
        };
    }
}

async fn fresh<S: ChainSource>(
    source: &S,
    checkpoints: Checkpoints,
    skip_if: Option<BlockHash>,
) -> AbstractResult<Option<SyncStatus>> {
    loop {
        let tip = source.best_block_hash().await?;
        if Some(tip) == skip_if {
            break Ok(None);
        }
        let block = source.block_summary(&tip).await?;
        let mut conflicts = vec![];
        let mut last_verified_checkpoint = None;
        if checkpoints.enforced() {
            // genesis is fixed by the chain parameters and never goes through
            // block acceptance, so it is not compared here
            for entry in checkpoints
                .table()
                .entries_up_to(block.height)
                .filter(|e| e.height > 0)
            {
                let found = source.block_hash_at(entry.height).await?;
                if checkpoints.check_block(entry.height, &found) {
                    last_verified_checkpoint = Some(entry.height);
                } else {
                    conflicts.push(CheckpointConflict {
                        height: entry.height,
                        expected: entry.hash,
                        found,
                    });
                }
            }
        }
        let tip_check = source.best_block_hash().await?;
        if tip_check != tip {
            debug!("New Block Found During Refresh");
            continue;
        }
        break Ok(Some(SyncStatus {
            tip,
            block,
            progress: checkpoints.estimate_progress(Some(&block)),
            total_blocks_estimate: checkpoints.total_blocks_estimate(),
            last_verified_checkpoint,
            conflicts,
        }));
    }
}
