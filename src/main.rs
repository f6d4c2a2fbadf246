use anyhow::Result;
use campaign_cleaner::{run, Config, RunOutcome};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Split zipped bank-campaign CSVs into client, campaign and economics tables.
#[derive(Parser, Debug)]
#[command(name = "campaign_cleaner", version, about, long_about = None)]
struct Args {
    /// Directory holding the `*.zip` archives
    #[arg(long, default_value = "files/input")]
    input_dir: PathBuf,

    /// Directory the three CSV files are written to
    #[arg(long, default_value = "files/output")]
    output_dir: PathBuf,

    /// Log filter, e.g. "debug" (defaults to RUST_LOG, then "info")
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // ─── 1) init logging ─────────────────────────────────────────────
    let env = match &args.log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    // ─── 2) run ──────────────────────────────────────────────────────
    let config = Config::new(args.input_dir, args.output_dir);
    match run(&config)? {
        RunOutcome::NoData { archives_found } => {
            println!(
                "No data found in {} ({} archives checked); nothing written.",
                config.input_dir.display(),
                archives_found
            );
        }
        RunOutcome::Written(summary) => {
            println!(
                "Loaded {} rows from {} of {} archives",
                summary.rows, summary.archives_loaded, summary.archives_found
            );
            for path in &summary.outputs {
                println!("  wrote {}", path.display());
            }
        }
    }

    Ok(())
}
