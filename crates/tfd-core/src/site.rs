//! URL construction for the forms site.
//!
//! The index is paginated and session-scoped: the server hands out an opaque
//! token on the first visit, and every later page request must carry it back
//! as a `;jsessionid` path parameter ahead of the pagination query.

use url::Url;

use crate::error::{Result, TfdError};

/// Prior-year forms picklist used when the config has no override.
pub const DEFAULT_INDEX_URL: &str =
    "https://apps.irs.gov/app/picklist/list/priorFormPublication.html";

/// Builds the URL of one index page: session token plus pagination query.
///
/// `first_row` is the zero-based offset of the first row on the page. The
/// query parameter order is fixed; the upstream router is picky about it.
pub fn page_url(
    index_url: &str,
    session_id: &str,
    first_row: usize,
    results_per_page: usize,
) -> Result<String> {
    let mut url = parse_url(index_url)?;
    let path = format!("{};jsessionid={}", url.path(), session_id);
    url.set_path(&path);
    url.query_pairs_mut()
        .append_pair("indexOfFirstRow", &first_row.to_string())
        .append_pair("sortColumn", "sortOrder")
        .append_pair("resultsPerPage", &results_per_page.to_string())
        .append_pair("isDescending", "false");
    Ok(url.to_string())
}

/// Resolves an extracted `href` against the URL of the page it came from.
pub fn resolve_href(page_url: &str, href: &str) -> Result<String> {
    let base = parse_url(page_url)?;
    let resolved = base
        .join(href)
        .map_err(|e| TfdError::parse(format!("href {href:?} on {page_url}: {e}")))?;
    Ok(resolved.to_string())
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| TfdError::parse(format!("url {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_inserts_session_before_query() {
        let url = page_url("http://127.0.0.1:9999/picklist", "A1B2C3", 0, 200).unwrap();
        assert_eq!(
            url,
            "http://127.0.0.1:9999/picklist;jsessionid=A1B2C3\
             ?indexOfFirstRow=0&sortColumn=sortOrder&resultsPerPage=200&isDescending=false"
        );
    }

    #[test]
    fn page_url_offsets_first_row() {
        let url = page_url(DEFAULT_INDEX_URL, "T", 400, 200).unwrap();
        assert!(url.contains("indexOfFirstRow=400"));
        assert!(url.contains("resultsPerPage=200"));
        assert!(url.contains(";jsessionid=T?"));
    }

    #[test]
    fn page_url_rejects_garbage_base() {
        assert!(page_url("not a url", "T", 0, 200).is_err());
    }

    #[test]
    fn resolve_relative_href() {
        let resolved =
            resolve_href("http://host.test/app/picklist/list/index.html", "../detail/w2.html")
                .unwrap();
        assert_eq!(resolved, "http://host.test/app/picklist/detail/w2.html");
    }

    #[test]
    fn resolve_absolute_href_passes_through() {
        let resolved =
            resolve_href("http://host.test/index.html", "http://cdn.test/pub/f1040.pdf").unwrap();
        assert_eq!(resolved, "http://cdn.test/pub/f1040.pdf");
    }

    #[test]
    fn resolve_root_relative_href() {
        let resolved = resolve_href("http://host.test/a/b/c.html", "/pub/f1040.pdf").unwrap();
        assert_eq!(resolved, "http://host.test/pub/f1040.pdf");
    }
}
