//! `tfd info <FORM>...` – collect form metadata into a JSON report.

use anyhow::Result;
use std::path::Path;
use tfd_core::config::{FetchBackend, TfdConfig};
use tfd_core::output;
use tfd_core::pipeline::info::collect_form_info;
use tfd_core::pipeline::PipelineOptions;

pub fn run_info(
    cfg: &TfdConfig,
    forms: &[String],
    output_path: &Path,
    backend: FetchBackend,
) -> Result<()> {
    let options = PipelineOptions::from_config(cfg, backend);
    let report = collect_form_info(forms, &options)?;
    output::write_report(&report, output_path)?;
    println!(
        "Wrote metadata for {} form(s) to {}",
        report.len(),
        output_path.display()
    );
    Ok(())
}
