//! Snapshot cache for entry metadata.
//!
//! Re-running the generator against unchanged content must not reorder it:
//! an entry's publish date and sort key are assigned when a content version
//! is first seen and have to survive process restarts. This module persists
//! each parsed [`Entry`] as a JSON snapshot and reuses the recorded metadata
//! on later runs with the same content.
//!
//! ## Cache keys
//!
//! The cache is **content-addressed**: a snapshot lives at
//! `<store root>/<uri>.<content_hash>`, right beside the article page the
//! entry renders to. A changed body (or marker — the hash covers the whole
//! document) produces a different hash and therefore a different snapshot
//! path, so the old record is simply ignored and a fresh one is written.
//! Snapshots are never rewritten; stale ones are left behind for external
//! cleanup.
//!
//! On a hit, the identity and ordering fields (`title`, `author`, `tags`,
//! `publish_date`, `sort_key`, `content_hash`, `uri`) come from the record
//! while the freshly parsed body is kept for rendering.
//!
//! ## Failure
//!
//! Any snapshot I/O failure or a record that fails to deserialize is fatal
//! for the whole run. This is a build-time tool: there is no
//! partial-recovery path.

use crate::extract;
use crate::types::Entry;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed snapshot {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("snapshot encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Whether `resolve` found an existing snapshot or wrote a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// First sighting of this content version; a snapshot was written.
    Created,
    /// A snapshot existed; its metadata was reused.
    Reused,
}

/// Persistent snapshot store rooted at the article output directory.
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Snapshot location for a `(uri, content_hash)` pair.
    pub fn snapshot_path(&self, uri: &str, content_hash: &str) -> PathBuf {
        self.root.join(format!("{uri}.{content_hash}"))
    }

    /// Resolve one source document to an [`Entry`].
    ///
    /// Parses `raw`, then either reuses the metadata of an existing snapshot
    /// for this content version or persists the freshly parsed entry as the
    /// new snapshot. The returned body is always the freshly parsed one.
    pub fn resolve(
        &self,
        uri: &str,
        raw: &str,
        default_author: &str,
        date_format: &str,
    ) -> Result<(Entry, CacheStatus), StoreError> {
        let mut entry = extract::parse(raw, default_author, date_format);
        entry.uri = uri.to_string();

        let path = self.snapshot_path(uri, &entry.content_hash);
        if path.is_file() {
            let content = fs::read_to_string(&path)?;
            let cached: Entry =
                serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
                    path: path.clone(),
                    source,
                })?;
            entry.title = cached.title;
            entry.author = cached.author;
            entry.tags = cached.tags;
            entry.publish_date = cached.publish_date;
            entry.sort_key = cached.sort_key;
            entry.content_hash = cached.content_hash;
            entry.uri = cached.uri;
            Ok((entry, CacheStatus::Reused))
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, serde_json::to_string_pretty(&entry)?)?;
            Ok((entry, CacheStatus::Created))
        }
    }
}
