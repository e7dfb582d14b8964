//! Pipeline orchestration.
//!
//! Both pipelines start from the same index crawl: bootstrap fetch for the
//! session token, first page for the total entry count, then the remaining
//! pages through whichever fetch backend the run selected.

pub mod download;
pub mod info;

use scraper::Html;

use crate::config::{FetchBackend, TfdConfig};
use crate::error::Result;
use crate::extract;
use crate::fetch::{self, FetchOptions};
use crate::index::FormIndex;
use crate::site;

/// Everything one pipeline run needs to know.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Index URL (picklist entry point).
    pub index_url: String,
    /// Rows requested per index page.
    pub results_per_page: usize,
    /// Fetch engine for the fan-out phases.
    pub backend: FetchBackend,
    /// Transfer knobs.
    pub fetch: FetchOptions,
}

impl PipelineOptions {
    /// Options from config, with the run's backend choice applied.
    pub fn from_config(cfg: &TfdConfig, backend: FetchBackend) -> Self {
        Self {
            index_url: cfg
                .index_url
                .clone()
                .unwrap_or_else(|| site::DEFAULT_INDEX_URL.to_string()),
            results_per_page: cfg.results_per_page.max(1),
            backend,
            fetch: FetchOptions::from_config(cfg),
        }
    }
}

/// Crawls every index page and assembles the form index.
///
/// Any fetch or parse failure here is fatal: with an incomplete index,
/// "not crawled" would be indistinguishable from "not found".
pub fn crawl_index(options: &PipelineOptions) -> Result<FormIndex> {
    let bootstrap = fetch::fetch_text(&options.index_url, &options.fetch)?;
    let session = extract::session_id(&Html::parse_document(&bootstrap))?;
    tracing::debug!("scraped session token {}", session);

    let first_url = site::page_url(&options.index_url, &session, 0, options.results_per_page)?;
    let first_page = fetch::fetch_text(&first_url, &options.fetch)?;

    let mut index = FormIndex::new();
    let doc = Html::parse_document(&first_page);
    let total = extract::total_results(&doc)?;
    collect_rows(&doc, &first_url, &mut index)?;
    drop(doc);
    tracing::info!("index lists {} entries", total);

    let mut page_urls = Vec::new();
    let mut first_row = options.results_per_page;
    while first_row < total {
        page_urls.push(site::page_url(
            &options.index_url,
            &session,
            first_row,
            options.results_per_page,
        )?);
        first_row += options.results_per_page;
    }

    if !page_urls.is_empty() {
        tracing::debug!("fetching {} more index pages", page_urls.len());
        let results = fetch::fetch_many(&page_urls, options.backend, &options.fetch)?;
        for (url, result) in page_urls.iter().zip(results) {
            let body = result?;
            let text = String::from_utf8_lossy(&body);
            collect_rows(&Html::parse_document(&text), url, &mut index)?;
        }
    }

    tracing::debug!("index crawl collected {} rows", index.len());
    Ok(index)
}

/// Resolves and records every form row of one index page.
fn collect_rows(doc: &Html, page_url: &str, index: &mut FormIndex) -> Result<()> {
    for row in extract::form_rows(doc) {
        let detail_url = site::resolve_href(page_url, &row.detail_href)?;
        index.push(row.name, detail_url);
    }
    Ok(())
}
