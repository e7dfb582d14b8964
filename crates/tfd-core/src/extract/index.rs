//! Extraction from the paginated forms index.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use super::{element_text, selector};
use crate::error::{Result, TfdError};

static SESSION_SCRIPT_SEL: LazyLock<Selector> = LazyLock::new(|| selector("head script[src]"));
static SHOW_BY_SEL: LazyLock<Selector> = LazyLock::new(|| selector("th.ShowByColumn"));
static ROW_SEL: LazyLock<Selector> = LazyLock::new(|| selector("table.picklist-dataTable tr"));
static CELL_SEL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| selector("a"));

/// Decimal number, possibly with thousands commas ("2,733").
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:,\d+)*").expect("static regex"));

/// One form entry on an index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    /// Display text of the form link, e.g. "Form W-2".
    pub name: String,
    /// Link to the form's detail page, as written in the markup.
    pub detail_href: String,
}

/// Pulls the session token from the bootstrap page.
///
/// The server embeds it in the `src` of the first head script; the token is
/// whatever follows the last `=`.
pub fn session_id(doc: &Html) -> Result<String> {
    let script = doc
        .select(&SESSION_SCRIPT_SEL)
        .next()
        .ok_or_else(|| TfdError::parse("no script with src in page head"))?;
    let src = script
        .value()
        .attr("src")
        .ok_or_else(|| TfdError::parse("session script lost its src attribute"))?;
    let token = match src.rfind('=') {
        Some(i) => &src[i + 1..],
        None => src,
    };
    if token.is_empty() {
        return Err(TfdError::parse(format!("empty session token in {src:?}")));
    }
    Ok(token.to_string())
}

/// Reads the total entry count from the "Results: x - y of z" banner.
///
/// The banner cell must contain exactly three numbers: first row shown, last
/// row shown, and the total. Thousands commas are accepted.
pub fn total_results(doc: &Html) -> Result<usize> {
    let cell = doc
        .select(&SHOW_BY_SEL)
        .next()
        .ok_or_else(|| TfdError::parse("no result count banner on index page"))?;
    let text = element_text(cell);
    let numbers: Vec<&str> = NUMBER_RE.find_iter(&text).map(|m| m.as_str()).collect();
    if numbers.len() != 3 {
        return Err(TfdError::parse(format!(
            "result count banner had {} numbers, expected 3: {text:?}",
            numbers.len()
        )));
    }
    numbers[2]
        .replace(',', "")
        .parse()
        .map_err(|_| TfdError::parse(format!("unreadable total in banner: {text:?}")))
}

/// Collects the form entries of one index page.
///
/// An entry is a data-table row with exactly three cells whose first cell
/// carries a link; anything else (header rows, spacers) is skipped.
pub fn form_rows(doc: &Html) -> Vec<IndexRow> {
    let mut rows = Vec::new();
    for row in doc.select(&ROW_SEL) {
        let cells: Vec<_> = row.select(&CELL_SEL).collect();
        if cells.len() != 3 {
            continue;
        }
        let Some(anchor) = cells[0].select(&ANCHOR_SEL).next() else {
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let name = element_text(anchor);
        if name.is_empty() {
            continue;
        }
        rows.push(IndexRow {
            name,
            detail_href: href.to_string(),
        });
    }
    rows
}
