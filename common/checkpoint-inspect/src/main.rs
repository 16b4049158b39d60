// Copyright Judica, Inc 2022
//
// This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at https://mozilla.org/MPL/2.0/.

use bitcoin_header_checkpoints::util::AbstractResult;
use bitcoin_header_checkpoints::{CheckpointMonitor, Checkpoints};
use configuration::BitcoinConfig;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;
use summary::TableSummary;
use tracing::info;

mod configuration;
mod summary;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt::init();
    let args: Vec<String> = std::env::args().collect();
    let config = match configuration::get_config() {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!("Trying to read config from file {}", e);
            if args.len() != 2 {
                Err("Expected only 2 args, file name of config")?;
            }
            let config: Arc<configuration::Config> = Arc::new(serde_json::from_slice(
                &tokio::fs::read(&args[1]).await?[..],
            )?);
            config
        }
    };
    let checkpoints = config.checkpoints.checkpoints();
    tracing::debug!(
        mode = ?config.checkpoints.mode(),
        enforced = checkpoints.enforced(),
        "Config Loaded"
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&TableSummary::new(&checkpoints))?
    );
    match &config.bitcoin {
        Some(bitcoin) => run_monitor(bitcoin, checkpoints, config.monitor_frequency()).await,
        None => Ok(()),
    }
}

async fn run_monitor(
    bitcoin: &BitcoinConfig,
    checkpoints: Checkpoints,
    frequency: Duration,
) -> AbstractResult<()> {
    let bitcoin_client = bitcoin.get_new_client().await?;
    tracing::debug!("Bitcoin Client Loaded");
    let quit = Arc::new(AtomicBool::new(false));
    let monitor =
        CheckpointMonitor::new(bitcoin_client, checkpoints, Some(frequency), quit.clone()).await;
    let service = monitor
        .run_monitor_service()
        .ok_or("Checkpoint monitor already started")?;
    tracing::debug!("Checkpoint Monitor Started");
    let mut report = tokio::time::interval(frequency);
    loop {
        tokio::select! {
            _ = report.tick() => summary::report_status(&monitor.read_cache().await),
            r = tokio::signal::ctrl_c() => {
                r?;
                break;
            }
        }
    }
    info!(event = "SHUTDOWN", "Beginning Shutdown");
    quit.store(true, Ordering::Relaxed);
    service.await??;
    Ok(())
}
