//! `tfd download <FORM> <MIN_YEAR> <MAX_YEAR>` – fetch a form's yearly PDFs.

use anyhow::{bail, Result};
use std::path::Path;
use tfd_core::config::{FetchBackend, TfdConfig};
use tfd_core::pipeline::download::download_form_pdfs;
use tfd_core::pipeline::PipelineOptions;

pub fn run_download(
    cfg: &TfdConfig,
    form: &str,
    min_year: u32,
    max_year: u32,
    dest: &Path,
    backend: FetchBackend,
) -> Result<()> {
    if min_year > max_year {
        bail!("year range {min_year}..{max_year} is empty (MIN_YEAR must not exceed MAX_YEAR)");
    }

    let options = PipelineOptions::from_config(cfg, backend);
    let summary = download_form_pdfs(form, min_year, max_year, dest, &options)?;

    // Per-year failures were already warned about by the pipeline; a run
    // that produced nothing at all is an error.
    if summary.written.is_empty() {
        bail!("no PDFs written for \"{form}\" in {min_year}..={max_year}");
    }
    let requested = max_year - min_year + 1;
    println!(
        "Downloaded {} of {} year(s) for {}",
        summary.written.len(),
        requested,
        form
    );
    Ok(())
}

// Shared fixtures of the core crate's integration tests: the local site
// server and the picklist page builders.
#[cfg(test)]
#[allow(dead_code)]
#[path = "../../../../tfd-core/tests/common/mod.rs"]
mod fixtures;

#[cfg(test)]
mod tests {
    use super::fixtures::pages;
    use super::fixtures::site_server::{self, Route};
    use super::*;
    use std::collections::HashMap;

    fn cfg_for(server: &site_server::SiteServer) -> TfdConfig {
        TfdConfig {
            results_per_page: 10,
            index_url: Some(server.url("/picklist.html")),
            ..TfdConfig::default()
        }
    }

    /// One form whose detail page only lists a 2022 revision.
    fn w2_site() -> HashMap<String, Route> {
        let mut routes = HashMap::new();
        routes.insert(
            "/picklist.html".to_string(),
            Route::ok(pages::bootstrap_page("S1")),
        );
        routes.insert(
            "/picklist.html;jsessionid=S1?indexOfFirstRow=0&sortColumn=sortOrder\
             &resultsPerPage=10&isDescending=false"
                .to_string(),
            Route::ok(pages::index_page(1, 1, 1, &[("Form W-2", "/detail/w2.html")])),
        );
        routes.insert(
            "/detail/w2.html".to_string(),
            Route::ok(pages::detail_page(
                "Wage and Tax Statement",
                "Dec 2023",
                "/pub/fw2.pdf",
                &[(2022, "/pub/fw2--2022.pdf")],
            )),
        );
        routes.insert(
            "/pub/fw2--2022.pdf".to_string(),
            Route::ok(&b"%PDF-1.4 w2 2022"[..]),
        );
        routes
    }

    #[test]
    fn min_year_above_max_year_is_rejected_before_any_work() {
        let server = site_server::start(w2_site());
        let dest = tempfile::tempdir().unwrap();

        let err = run_download(
            &cfg_for(&server),
            "Form W-2",
            2023,
            2020,
            dest.path(),
            FetchBackend::Sequential,
        )
        .unwrap_err();

        assert!(err.to_string().contains("MIN_YEAR must not exceed MAX_YEAR"));
        assert_eq!(server.hits(), 0, "the range check must beat the network");
    }

    #[test]
    fn run_that_writes_nothing_is_an_error() {
        let server = site_server::start(w2_site());
        let dest = tempfile::tempdir().unwrap();

        // No listed revision covers 1990..=1992, so every year fails and
        // zero files are written.
        let err = run_download(
            &cfg_for(&server),
            "Form W-2",
            1990,
            1992,
            dest.path(),
            FetchBackend::Sequential,
        )
        .unwrap_err();

        assert!(err.to_string().contains("no PDFs written"));
        assert!(!dest.path().join("Form W-2").exists());
    }

    #[test]
    fn run_with_a_written_file_succeeds() {
        let server = site_server::start(w2_site());
        let dest = tempfile::tempdir().unwrap();

        run_download(
            &cfg_for(&server),
            "Form W-2",
            2022,
            2022,
            dest.path(),
            FetchBackend::Sequential,
        )
        .unwrap();

        assert!(dest.path().join("Form W-2").join("2022.pdf").exists());
    }
}
