//! Source-document enumeration.
//!
//! Walks the content root and returns every file with the content extension
//! as a [`SourceDoc`], pairing the on-disk path with the output URI it maps
//! to. The URI is the path below the root with forward slashes, so the
//! directory structure of the content tree mirrors directly into the output
//! tree.
//!
//! Enumeration is deliberately pure: no file contents are read here. The
//! snapshot store resolves each document separately, which keeps this stage
//! trivially testable and keeps caching I/O out of the walk.

use crate::types::SourceDoc;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

/// Extension that marks a file as a content document.
pub const CONTENT_EXTENSION: &str = "html";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Enumerate all content documents below `root` in lexical order.
///
/// Files whose extension is not [`CONTENT_EXTENSION`] (case-insensitive) are
/// skipped. The returned order is deterministic, which fixes the discovery
/// order used by the grouping indices.
pub fn scan(root: &Path) -> Result<Vec<SourceDoc>, ScanError> {
    let mut docs = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_content = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case(CONTENT_EXTENSION))
            .unwrap_or(false);
        if !is_content {
            continue;
        }

        // Walkdir yields paths under root, so the prefix always strips.
        let rel = path.strip_prefix(root).unwrap();
        let uri = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        docs.push(SourceDoc {
            path: path.to_path_buf(),
            uri,
        });
    }

    Ok(docs)
}
