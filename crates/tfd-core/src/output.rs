//! Output writing: the JSON report and the per-year PDF files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, TfdError};
use crate::model::FormMetadata;

/// Aggregate form-info result: one entry per resolved query, in the order
/// the queries were given. Serializes as a JSON object keyed by form name,
/// so both fetch backends write byte-identical reports.
#[derive(Debug, Default)]
pub struct FormInfoReport {
    entries: Vec<FormMetadata>,
}

impl FormInfoReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, meta: FormMetadata) {
        self.entries.push(meta);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FormMetadata] {
        &self.entries
    }

    /// Pretty-printed JSON, two-space indent.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for FormInfoReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for meta in &self.entries {
            map.serialize_entry(&meta.name, meta)?;
        }
        map.end()
    }
}

/// Writes the report to `path`.
pub fn write_report(report: &FormInfoReport, path: &Path) -> Result<()> {
    let io_err = |source: std::io::Error| TfdError::Io {
        path: path.to_path_buf(),
        source,
    };
    let json = report.to_json().map_err(|e| io_err(e.into()))?;
    fs::write(path, json).map_err(io_err)
}

/// Per-form destination directory under `dest`.
pub fn form_dir(dest: &Path, form: &str) -> PathBuf {
    dest.join(sanitize_form_dir(form))
}

/// Creates the per-form directory tree.
pub fn create_form_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| TfdError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes one year's payload as `<dir>/<year>.pdf` and returns the path.
pub fn write_pdf(dir: &Path, year: u32, body: &[u8]) -> Result<PathBuf> {
    let path = dir.join(format!("{year}.pdf"));
    fs::write(&path, body).map_err(|source| TfdError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Makes a form name safe as a Linux directory name.
///
/// Spaces stay (form names are display text); NUL, path separators, and
/// control characters become `_`, runs of `_` collapse, and leading or
/// trailing dots, spaces, and underscores are trimmed. Capped at NAME_MAX.
pub fn sanitize_form_dir(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let replacement = if c == '\0' || c == '/' || c == '\\' || c.is_control() {
            '_'
        } else {
            c
        };

        if replacement == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(replacement);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '.' || c == '_');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
