//! Pure HTML extraction: fetched page text in, structured fields out.
//!
//! The selectors here encode the upstream site's markup. A structural change
//! upstream breaks these extractors, not the pipelines around them. No I/O
//! happens in this module.

mod detail;
mod index;

pub use detail::{form_detail, FormDetail, RevisionRow};
pub use index::{form_rows, session_id, total_results, IndexRow};

use scraper::{ElementRef, Selector};

/// Parses a selector literal. Only called with known-good patterns.
fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Concatenated, trimmed text of an element.
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
