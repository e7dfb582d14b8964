//! Error taxonomy for the scrape and download pipelines.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for fallible core operations.
pub type Result<T> = std::result::Result<T, TfdError>;

/// Error produced by fetching, extraction, or persistence.
///
/// Per-form and per-year failures are isolated by the pipelines where the
/// policy allows partial completion; everything else propagates to the CLI.
#[derive(Debug, Error)]
pub enum TfdError {
    /// Transport-level failure (DNS, connect, timeout, TLS).
    #[error("fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("HTTP {code} for {url}")]
    Status { url: String, code: u32 },

    /// Page did not have the structure the extractor expects.
    #[error("malformed page: {context}")]
    Parse { context: String },

    /// Requested form name is absent from the crawled index.
    #[error("form \"{name}\" not found in the index (is it spelled correctly?)")]
    FormNotFound { name: String },

    /// Requested year has no revision row on the form's detail page.
    #[error("no {year} revision listed for \"{form}\"")]
    RevisionNotFound { form: String, year: u32 },

    /// Download destination for the form already exists on disk.
    #[error("destination {} already exists, refusing to overwrite", path.display())]
    DestinationExists { path: PathBuf },

    /// Filesystem failure while creating directories or writing output.
    #[error("writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The concurrent fetch engine itself broke, as opposed to one transfer
    /// failing. Aborts the whole batch.
    #[error("fetch engine ({op}): {source}")]
    Engine {
        op: &'static str,
        #[source]
        source: curl::MultiError,
    },
}

impl TfdError {
    /// Builds a `Parse` error from anything displayable.
    pub fn parse(context: impl Into<String>) -> Self {
        TfdError::Parse {
            context: context.into(),
        }
    }
}
