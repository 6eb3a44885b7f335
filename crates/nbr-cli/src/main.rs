//! nbr — legacy-inventory vs. asset-record reconciliation for bridges.
//!
//! This file is intentionally thin: it sets up tracing, parses the CLI, and
//! dispatches to the command modules. Findings (any FAIL or ERROR in a
//! report) map to exit code 1; operational errors exit 2 via anyhow.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod export;
mod input;

use config::AuditConfig;
use export::Format;

#[derive(Parser)]
#[command(name = "nbr")]
#[command(about = "Bridge inventory reconciliation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the standard checklist (id, kind, fields, title)
    Checks {
        /// Emit the checklist as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Reconcile one bridge and export the report
    Audit {
        /// Historic record: legacy flat-file CSV or a JSON object
        #[arg(long)]
        historic: PathBuf,

        /// Modern record: JSON object from the asset system
        #[arg(long)]
        modern: PathBuf,

        /// Structure file number selecting the flat-file row
        #[arg(long)]
        sfn: Option<String>,

        /// YAML config with code-table paths
        #[arg(long)]
        config: Option<PathBuf>,

        /// County FIPS table (fips,name CSV); overrides config
        #[arg(long = "county-fips")]
        county_fips: Option<PathBuf>,

        /// Place-code table CSV; overrides config
        #[arg(long = "place-codes")]
        place_codes: Option<PathBuf>,

        /// Report file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Report format: csv | json
        #[arg(long)]
        format: Option<String>,
    },

    /// Reconcile every bridge in a manifest, one report file each
    Batch {
        /// JSON manifest: [{sfn, historic, modern}, ...]
        #[arg(long)]
        manifest: PathBuf,

        /// Directory for per-bridge report files
        #[arg(long = "out-dir")]
        out_dir: PathBuf,

        /// YAML config with code-table paths
        #[arg(long)]
        config: Option<PathBuf>,

        /// County FIPS table (fips,name CSV); overrides config
        #[arg(long = "county-fips")]
        county_fips: Option<PathBuf>,

        /// Place-code table CSV; overrides config
        #[arg(long = "place-codes")]
        place_codes: Option<PathBuf>,

        /// Report format: csv | json
        #[arg(long)]
        format: Option<String>,
    },
}

fn main() -> ExitCode {
    init_tracing();

    match dispatch() {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the run produced findings.
fn dispatch() -> Result<bool> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Checks { json } => {
            commands::checks::run(json)?;
            Ok(false)
        }

        Commands::Audit {
            historic,
            modern,
            sfn,
            config,
            county_fips,
            place_codes,
            out,
            format,
        } => {
            let config = load_config(config.as_deref())?;
            let format = resolve_format(format.as_deref(), &config)?;
            commands::audit::run(commands::audit::AuditArgs {
                historic: &historic,
                modern: &modern,
                sfn: sfn.as_deref(),
                config,
                county_fips: county_fips.as_deref(),
                place_codes: place_codes.as_deref(),
                out: out.as_deref(),
                format,
            })
        }

        Commands::Batch {
            manifest,
            out_dir,
            config,
            county_fips,
            place_codes,
            format,
        } => {
            let config = load_config(config.as_deref())?;
            let format = resolve_format(format.as_deref(), &config)?;
            commands::batch::run(commands::batch::BatchArgs {
                manifest: &manifest,
                out_dir: &out_dir,
                config,
                county_fips: county_fips.as_deref(),
                place_codes: place_codes.as_deref(),
                format,
            })
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<AuditConfig> {
    match path {
        Some(p) => AuditConfig::load(p),
        None => Ok(AuditConfig::default()),
    }
}

/// `--format` flag beats the config default; CSV when neither is set.
fn resolve_format(flag: Option<&str>, config: &AuditConfig) -> Result<Format> {
    let chosen = flag.or(config.format.as_deref()).unwrap_or("csv");
    chosen.parse().context("resolve report format")
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
