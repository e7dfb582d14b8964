//! CLI for the TFD tax-form scraper.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tfd_core::config::{self, FetchBackend, TfdConfig};
use tfd_core::logging;

use commands::{run_download, run_info};

/// Top-level CLI for the TFD tax-form scraper.
#[derive(Debug, Parser)]
#[command(name = "tfd")]
#[command(version)]
#[command(about = "TFD: tax-form index scraper and bulk PDF downloader", long_about = None)]
pub struct Cli {
    /// Emit informational progress messages (the default).
    #[arg(long, global = true, overrides_with = "no_logging")]
    pub logging: bool,

    /// Silence informational messages; warnings still reach stderr.
    #[arg(long, global = true, overrides_with = "logging")]
    pub no_logging: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Collect metadata for the named forms into a JSON report.
    Info {
        /// Form names exactly as the index lists them, e.g. "Form W-2".
        #[arg(required = true, value_name = "FORM")]
        forms: Vec<String>,

        /// Report file to write.
        #[arg(short, long, default_value = "output.json", value_name = "FILE")]
        output: PathBuf,

        /// Fetch detail pages through the concurrent engine.
        #[arg(long)]
        concurrent: bool,
    },

    /// Download one form's PDFs for an inclusive year range.
    Download {
        /// Form name exactly as the index lists it.
        #[arg(value_name = "FORM")]
        form: String,

        /// First year to fetch.
        #[arg(value_name = "MIN_YEAR")]
        min_year: u32,

        /// Last year to fetch (inclusive).
        #[arg(value_name = "MAX_YEAR")]
        max_year: u32,

        /// Directory the per-form folder is created under.
        #[arg(long, default_value = ".", value_name = "DIR")]
        dest: PathBuf,

        /// Fetch PDFs through the concurrent engine.
        #[arg(long)]
        concurrent: bool,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        logging::init_logging(cli.logging_enabled());
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Info {
                forms,
                output,
                concurrent,
            } => run_info(&cfg, &forms, &output, backend(&cfg, concurrent)),
            CliCommand::Download {
                form,
                min_year,
                max_year,
                dest,
                concurrent,
            } => run_download(
                &cfg,
                &form,
                min_year,
                max_year,
                &dest,
                backend(&cfg, concurrent),
            ),
        }
    }

    /// Logging defaults on; the later of the two flags wins.
    fn logging_enabled(&self) -> bool {
        !self.no_logging
    }
}

/// `--concurrent` wins; otherwise the config file decides; else sequential.
fn backend(cfg: &TfdConfig, concurrent: bool) -> FetchBackend {
    if concurrent {
        FetchBackend::Concurrent
    } else {
        cfg.fetch_backend.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
