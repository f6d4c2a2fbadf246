// src/process/mod.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{fs::File, path::Path};
use tracing::{debug, info, warn};
use zip::ZipArchive;

pub mod campaign;
pub mod client;
pub mod date_parser;
pub mod economics;
pub mod raw_table;
pub mod utils;

use campaign::{build_campaign_table, CampaignRecord};
use client::{build_client_table, ClientRecord};
use economics::{build_economics_table, EconomicsRecord};
use raw_table::{ColumnIndex, RawTable, UnifiedTable};

/// Open `zip_path`, pick its first `.csv` entry and parse it straight out of the archive.
///
/// Returns `Ok(None)` when the archive has nothing usable in it: no `.csv` entry,
/// a CSV without a header row, or a file that is not a ZIP at all.
/// A CSV that lacks a required column, or has a ragged record, is an error.
#[tracing::instrument(level = "info", skip(zip_path), fields(path = %zip_path.as_ref().display()))]
pub fn load_campaign_zip<P: AsRef<Path>>(zip_path: P) -> Result<Option<RawTable>> {
    let zip_path = zip_path.as_ref();

    // 1) Open the ZIP
    let file = File::open(zip_path)
        .with_context(|| format!("Failed to open ZIP file: {:?}", zip_path))?;
    let mut archive = match ZipArchive::new(file) {
        Ok(a) => a,
        Err(e) => {
            warn!(error = %e, "not a readable ZIP archive, skipping");
            return Ok(None);
        }
    };

    // 2) Find the first CSV entry, in archive order
    let mut csv_entry: Option<(usize, String)> = None;
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .with_context(|| format!("Failed to access ZIP entry #{} in {:?}", i, zip_path))?;
        if entry.is_file() && entry.name().to_lowercase().ends_with(".csv") {
            csv_entry = Some((i, entry.name().to_string()));
            break;
        }
    }
    let Some((index, entry_name)) = csv_entry else {
        debug!("no CSV entry, skipping");
        return Ok(None);
    };

    // 3) Stream the entry through the CSV reader; nothing touches disk
    let entry = archive
        .by_index(index)
        .with_context(|| format!("Failed to open {} in {:?}", entry_name, zip_path))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(entry);

    let headers = rdr
        .headers()
        .with_context(|| format!("CSV header error in {} ({:?})", entry_name, zip_path))?
        .clone();
    if headers.is_empty() {
        warn!(entry = %entry_name, "CSV has no header row, skipping");
        return Ok(None);
    }

    let columns = ColumnIndex::resolve(&headers)
        .with_context(|| format!("in {} ({:?})", entry_name, zip_path))?;
    if !columns.dropped.is_empty() {
        debug!(dropped = ?columns.dropped, "dropping index columns");
    }

    let mut records = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let row = result.with_context(|| {
            format!(
                "CSV parse error in {} ({:?}) at record {}",
                entry_name, zip_path, idx
            )
        })?;
        records.push(columns.record(&row));
    }

    info!(entry = %entry_name, rows = records.len(), "loaded");
    Ok(Some(RawTable {
        archive: zip_path.to_path_buf(),
        entry: entry_name,
        records,
    }))
}

/// The three projections of the unified table.
#[derive(Debug)]
pub struct DerivedTables {
    pub client: Vec<ClientRecord>,
    pub campaign: Vec<CampaignRecord>,
    pub economics: Vec<EconomicsRecord>,
}

/// Run every projection. Nothing is written here, so a failure leaves no partial output.
pub fn derive_tables(table: &UnifiedTable) -> Result<DerivedTables> {
    Ok(DerivedTables {
        client: build_client_table(table),
        campaign: build_campaign_table(table).context("building campaign table")?,
        economics: build_economics_table(table),
    })
}
