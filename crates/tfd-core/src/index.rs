//! The aggregated forms index.

use crate::error::{Result, TfdError};

/// Every form entry discovered by one index crawl, in page order.
///
/// Lookups are case-sensitive exact matches on the display text. The first
/// occurrence wins when the site lists a name more than once.
#[derive(Debug, Default)]
pub struct FormIndex {
    entries: Vec<(String, String)>,
}

impl FormIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one entry with its already-resolved detail URL.
    pub fn push(&mut self, name: String, detail_url: String) {
        self.entries.push((name, detail_url));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Detail URL for `name`, or `FormNotFound`.
    pub fn detail_url(&self, name: &str) -> Result<&str> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, url)| url.as_str())
            .ok_or_else(|| TfdError::FormNotFound {
                name: name.to_string(),
            })
    }
}
