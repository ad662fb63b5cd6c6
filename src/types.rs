//! Shared types used across all pipeline stages.
//!
//! `Entry` is serialized to JSON as the snapshot record, so its fields must
//! round-trip losslessly through serde_json.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// One published document with its extracted metadata and body.
///
/// Entries are constructed fresh from source files on every run; the only
/// durable state is the snapshot record written by [`crate::store`], keyed
/// by `(uri, content_hash)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Title from the `title` marker; empty when absent.
    pub title: String,
    /// Author from the `author` marker; falls back to the configured default,
    /// so it is never empty.
    pub author: String,
    /// Tags accumulated from `tag` markers. Membership is unique; a tag
    /// repeated across markers collapses to one.
    pub tags: BTreeSet<String>,
    /// Human-readable publish date, fixed at the first-ever parse of this
    /// content version and carried forward across cache reuse.
    pub publish_date: String,
    /// Nanosecond ordering timestamp, assigned once per content version.
    /// Never re-stamped while the content hash stays the same.
    pub sort_key: i64,
    /// First 8 hex characters of SHA-256 over the normalized body. Cache key
    /// and snapshot filename suffix.
    pub content_hash: String,
    /// Relative output path, derived from the source path below the content
    /// root. Unique per source document.
    pub uri: String,
    /// Raw content, metadata markers left inline. The template renders the
    /// body as-is.
    pub body: String,
}

/// A source document discovered by the scan stage: its location on disk and
/// the output URI it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDoc {
    /// Absolute or root-relative path to the source file.
    pub path: PathBuf,
    /// Relative output path (forward slashes), e.g. `2024/hello.html`.
    pub uri: String,
}
