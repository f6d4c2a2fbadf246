// src/pipeline.rs
use anyhow::{Context, Result};
use std::{fs, path::PathBuf, time::Instant};
use tracing::{info, warn};

use crate::{
    config::Config,
    discover::discover_zips,
    process::{derive_tables, load_campaign_zip, raw_table::UnifiedTable},
    write::write_table,
};

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No archive yielded a table; nothing was written.
    NoData { archives_found: usize },
    Written(RunSummary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub archives_found: usize,
    pub archives_loaded: usize,
    pub rows: usize,
    /// client, campaign and economics files, in that order.
    pub outputs: Vec<PathBuf>,
}

/// Load every archive under `config.input_dir`, split the rows into the client,
/// campaign and economics tables and write them to `config.output_dir`.
#[tracing::instrument(level = "info", skip(config), fields(input = %config.input_dir.display(), output = %config.output_dir.display()))]
pub fn run(config: &Config) -> Result<RunOutcome> {
    let start = Instant::now();

    // ─── 1) discover archives ────────────────────────────────────────
    let zips = discover_zips(&config.input_dir)?;
    info!("{} archives found", zips.len());

    // ─── 2) load each archive, one at a time ─────────────────────────
    let mut tables = Vec::with_capacity(zips.len());
    for zip_path in &zips {
        if let Some(table) = load_campaign_zip(zip_path)? {
            tables.push(table);
        }
    }
    if tables.is_empty() {
        warn!("no data found; nothing written");
        return Ok(RunOutcome::NoData {
            archives_found: zips.len(),
        });
    }
    let archives_loaded = tables.len();

    // ─── 3) concatenate & derive ─────────────────────────────────────
    let unified = UnifiedTable::concat(tables);
    info!(rows = unified.len(), "unified table built");
    let derived = derive_tables(&unified)?;

    // ─── 4) persist ──────────────────────────────────────────────────
    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating output directory {:?}", config.output_dir))?;
    let outputs = vec![
        write_table(&config.output_dir, &derived.client)?,
        write_table(&config.output_dir, &derived.campaign)?,
        write_table(&config.output_dir, &derived.economics)?,
    ];

    info!(elapsed = ?start.elapsed(), "all done");
    Ok(RunOutcome::Written(RunSummary {
        archives_found: zips.len(),
        archives_loaded,
        rows: unified.len(),
        outputs,
    }))
}
