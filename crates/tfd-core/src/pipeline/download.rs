//! PDF-download pipeline: one form, a year range, PDFs on disk.

use std::path::{Path, PathBuf};

use scraper::Html;

use crate::error::{Result, TfdError};
use crate::extract;
use crate::fetch;
use crate::model::DownloadTarget;
use crate::output;
use crate::pipeline::{self, PipelineOptions};
use crate::site;

/// What one download run produced.
#[derive(Debug, Default)]
pub struct DownloadSummary {
    /// Paths of the PDFs written, in year order.
    pub written: Vec<PathBuf>,
    /// Years that produced no file, with the reason.
    pub failed: Vec<(u32, TfdError)>,
}

/// Downloads the PDFs of `form` for every year in `min_year..=max_year`.
///
/// The destination directory must not exist yet; that is checked before
/// any network traffic. Years without a listed revision or whose transfer
/// fails are recorded in the summary and do not abort the remaining years.
pub fn download_form_pdfs(
    form: &str,
    min_year: u32,
    max_year: u32,
    dest: &Path,
    options: &PipelineOptions,
) -> Result<DownloadSummary> {
    let dir = output::form_dir(dest, form);
    if dir.exists() {
        return Err(TfdError::DestinationExists { path: dir });
    }

    let index = pipeline::crawl_index(options)?;
    let detail_url = index.detail_url(form)?.to_string();
    let detail_page = fetch::fetch_text(&detail_url, &options.fetch)?;
    let detail = extract::form_detail(&Html::parse_document(&detail_page))?;

    let mut summary = DownloadSummary::default();
    let mut targets = Vec::new();
    for year in min_year..=max_year {
        match detail.pdf_href_for_year(year) {
            Some(href) => match site::resolve_href(&detail_url, href) {
                Ok(pdf_url) => targets.push(DownloadTarget {
                    form: form.to_string(),
                    year,
                    pdf_url,
                }),
                Err(err) => {
                    tracing::warn!("skipping {}: {}", year, err);
                    summary.failed.push((year, err));
                }
            },
            None => {
                let err = TfdError::RevisionNotFound {
                    form: form.to_string(),
                    year,
                };
                tracing::warn!("{}", err);
                summary.failed.push((year, err));
            }
        }
    }
    if targets.is_empty() {
        return Ok(summary);
    }

    output::create_form_dir(&dir)?;
    tracing::info!("downloading {} PDFs into {}", targets.len(), dir.display());

    let urls: Vec<String> = targets.iter().map(|t| t.pdf_url.clone()).collect();
    let results = fetch::fetch_many(&urls, options.backend, &options.fetch)?;
    for (target, result) in targets.iter().zip(results) {
        match result.and_then(|body| output::write_pdf(&dir, target.year, &body)) {
            Ok(path) => {
                tracing::info!("wrote {}", path.display());
                summary.written.push(path);
            }
            Err(err) => {
                tracing::warn!("{} {}: {}", target.form, target.year, err);
                summary.failed.push((target.year, err));
            }
        }
    }
    Ok(summary)
}
