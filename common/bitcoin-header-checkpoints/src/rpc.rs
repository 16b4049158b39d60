use crate::monitor::ChainSource;
use crate::progress::BlockSummary;
use crate::util::AbstractResult;
use bitcoincore_rpc_async as rpc;
use rpc::{Client, RpcApi};
use sapio_bitcoin::BlockHash;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct ChainTxStats {
    txcount: u64,
}

impl ChainSource for Client {
    async fn best_block_hash(&self) -> AbstractResult<BlockHash> {
        Ok(self.get_best_block_hash().await?)
    }

    async fn block_summary(&self, hash: &BlockHash) -> AbstractResult<BlockSummary> {
        let info = self.get_block_header_info(hash).await?;
        // getchaintxstats rejects the genesis block
        let chain_tx = if info.height == 0 {
            info.n_tx as u64
        } else {
            let stats: ChainTxStats = self
                .call(
                    "getchaintxstats",
                    &[Value::Null, serde_json::to_value(hash)?],
                )
                .await?;
            stats.txcount
        };
        Ok(BlockSummary {
            height: info.height as u32,
            chain_tx,
            time: info.time as i64,
        })
    }

    async fn block_hash_at(&self, height: u32) -> AbstractResult<BlockHash> {
        Ok(self.get_block_hash(height as u64).await?)
    }
}
