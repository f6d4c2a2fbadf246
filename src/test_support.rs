use anyhow::Result;
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// Header of the bank-marketing CSVs, leading pandas index column included.
pub const HEADER: &str = ",client_id,age,job,marital,education,credit_default,mortgage,month,day,contact_duration,number_contacts,previous_campaign_contacts,previous_outcome,cons_price_idx,euribor_three_months,campaign_outcome";

pub fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,campaign_cleaner=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Write `<dir>/<name>` as a ZIP holding `entries` in the given order.
pub fn write_zip(dir: &Path, name: &str, entries: &[(&str, &str)]) -> Result<PathBuf> {
    let path = dir.join(name);
    let mut zip = ZipWriter::new(File::create(&path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (entry, content) in entries {
        zip.start_file(*entry, options)?;
        zip.write_all(content.as_bytes())?;
    }
    zip.finish()?;
    Ok(path)
}

/// A CSV body with `HEADER` and the given data lines.
pub fn csv(rows: &[&str]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}
