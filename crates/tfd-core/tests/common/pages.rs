//! HTML fixtures shaped like the live picklist and form detail pages.

/// Landing page whose head script carries the session token.
pub fn bootstrap_page(session: &str) -> String {
    format!(
        r#"<html><head>
<script src="/app/js/picklist.js;jsessionid={session}"></script>
</head><body><p>Prior Year Products</p></body></html>"#
    )
}

/// One index page: the result banner plus a picklist row per (name, href).
pub fn index_page(first: usize, last: usize, total: usize, rows: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, href) in rows {
        body.push_str(&format!(
            "<tr><td><a href=\"{href}\">{name}</a></td><td>Some Title</td><td>2023</td></tr>\n"
        ));
    }
    format!(
        r#"<html><body>
<table><tr><th class="ShowByColumn">Results: {first} - {last} of {total} files</th></tr></table>
<table class="picklist-dataTable">
<tr><th>Product Number</th><th>Title</th><th>Revision Date</th></tr>
{body}</table>
</body></html>"#
    )
}

/// A form detail page with a prior-revisions row per (year, href).
pub fn detail_page(title: &str, revision: &str, pdf_href: &str, years: &[(u32, &str)]) -> String {
    let mut rows = String::new();
    for (year, href) in years {
        rows.push_str(&format!(
            "<tr><td>{year}</td><td><a href=\"{href}\">pdf</a></td></tr>\n"
        ));
    }
    format!(
        r#"<html><body>
<h1 class="form-title">{title}</h1>
<span class="form-rev">{revision}</span>
<a class="form-pdf" href="{pdf_href}">Download current</a>
<table class="revisions-dataTable">
<tr><th>Year</th><th>File</th></tr>
{rows}</table>
</body></html>"#
    )
}
