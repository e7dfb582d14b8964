//! Value types shared by the pipelines.

use serde::Serialize;

/// Metadata collected from one form's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormMetadata {
    /// Requested display name. Becomes the report key, so it is skipped in
    /// the serialized value.
    #[serde(skip)]
    pub name: String,
    /// Long title, e.g. "Wage and Tax Statement".
    pub title: String,
    /// Current revision label.
    pub revision: String,
    /// Absolute URL of the current PDF.
    pub pdf_url: String,
}

/// One year's PDF to retrieve in the download pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub form: String,
    pub year: u32,
    /// Absolute URL of that year's PDF.
    pub pdf_url: String,
}
