//! Form-info pipeline: queried form names to a metadata report.

use scraper::Html;

use crate::error::Result;
use crate::extract;
use crate::fetch;
use crate::model::FormMetadata;
use crate::output::FormInfoReport;
use crate::pipeline::{self, PipelineOptions};
use crate::site;

/// Collects metadata for each queried form name.
///
/// Names missing from the index and detail pages that fail to fetch or
/// parse are skipped with a warning; the report keeps the surviving
/// entries in query order. Duplicate queries collapse to their first
/// occurrence.
pub fn collect_form_info(queries: &[String], options: &PipelineOptions) -> Result<FormInfoReport> {
    let index = pipeline::crawl_index(options)?;

    let mut names: Vec<&str> = Vec::new();
    for query in queries {
        if !names.contains(&query.as_str()) {
            names.push(query);
        }
    }

    let mut resolved: Vec<(&str, String)> = Vec::new();
    for name in names {
        match index.detail_url(name) {
            Ok(url) => resolved.push((name, url.to_string())),
            Err(err) => tracing::warn!("skipping {:?}: {}", name, err),
        }
    }

    let urls: Vec<String> = resolved.iter().map(|(_, url)| url.clone()).collect();
    let results = fetch::fetch_many(&urls, options.backend, &options.fetch)?;

    let mut report = FormInfoReport::new();
    for ((name, url), result) in resolved.into_iter().zip(results) {
        match form_metadata(name, &url, result) {
            Ok(meta) => {
                tracing::debug!("collected metadata for {:?}", name);
                report.push(meta);
            }
            Err(err) => tracing::warn!("skipping {:?}: {}", name, err),
        }
    }
    Ok(report)
}

fn form_metadata(name: &str, page_url: &str, body: Result<Vec<u8>>) -> Result<FormMetadata> {
    let body = body?;
    let text = String::from_utf8_lossy(&body);
    let detail = extract::form_detail(&Html::parse_document(&text))?;
    Ok(FormMetadata {
        name: name.to_string(),
        title: detail.title,
        revision: detail.revision,
        pdf_url: site::resolve_href(page_url, &detail.pdf_href)?,
    })
}
