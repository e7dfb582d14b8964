//! Extraction from a form's detail page.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::{element_text, selector};
use crate::error::{Result, TfdError};

static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| selector("h1.form-title"));
static REVISION_SEL: LazyLock<Selector> = LazyLock::new(|| selector("span.form-rev"));
static PDF_SEL: LazyLock<Selector> = LazyLock::new(|| selector("a.form-pdf"));
static REVISION_ROW_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector("table.revisions-dataTable tr"));
static CELL_SEL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| selector("a"));

/// Everything the detail page says about one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDetail {
    /// Long title, e.g. "Wage and Tax Statement".
    pub title: String,
    /// Current revision label, e.g. "Rev. 2023".
    pub revision: String,
    /// Link to the current PDF, as written in the markup.
    pub pdf_href: String,
    /// Prior revisions, one per listed year.
    pub revisions: Vec<RevisionRow>,
}

/// One row of the prior-revisions table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRow {
    pub year: u32,
    /// Link to that year's PDF, as written in the markup.
    pub pdf_href: String,
}

impl FormDetail {
    /// Link for a specific year's revision, if the page lists one.
    pub fn pdf_href_for_year(&self, year: u32) -> Option<&str> {
        self.revisions
            .iter()
            .find(|r| r.year == year)
            .map(|r| r.pdf_href.as_str())
    }
}

/// Extracts the metadata block and the revisions table from a detail page.
///
/// Title, revision label, and the current PDF link must all be present; a
/// missing or empty revisions table just means no prior years are listed.
pub fn form_detail(doc: &Html) -> Result<FormDetail> {
    let title = doc
        .select(&TITLE_SEL)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| TfdError::parse("detail page has no form title"))?;
    let revision = doc
        .select(&REVISION_SEL)
        .next()
        .map(element_text)
        .filter(|r| !r.is_empty())
        .ok_or_else(|| TfdError::parse("detail page has no revision label"))?;
    let pdf_href = doc
        .select(&PDF_SEL)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
        .ok_or_else(|| TfdError::parse("detail page has no pdf link"))?;

    Ok(FormDetail {
        title,
        revision,
        pdf_href,
        revisions: revision_rows(doc),
    })
}

/// Collects well-shaped rows of the prior-revisions table.
///
/// A usable row has exactly two cells: a year (thousands commas tolerated,
/// the upstream renderer sometimes writes "2,023") and a link. Anything
/// else is skipped.
fn revision_rows(doc: &Html) -> Vec<RevisionRow> {
    let mut rows = Vec::new();
    for row in doc.select(&REVISION_ROW_SEL) {
        let cells: Vec<_> = row.select(&CELL_SEL).collect();
        if cells.len() != 2 {
            continue;
        }
        let year_text = element_text(cells[0]).replace(',', "");
        let Ok(year) = year_text.parse::<u32>() else {
            continue;
        };
        let Some(href) = cells[1]
            .select(&ANCHOR_SEL)
            .next()
            .and_then(|a| a.value().attr("href"))
        else {
            continue;
        };
        rows.push(RevisionRow {
            year,
            pdf_href: href.to_string(),
        });
    }
    rows
}
