//! Metadata extraction from raw HTML fragments.
//!
//! Source documents are plain HTML with metadata embedded as comments:
//!
//! ```html
//! <!--title: A Day at the Museum-->
//! <!--author: ada-->
//! <!--tag: travel-->
//! <!--tag: art-->
//! <p>Body starts here...</p>
//! ```
//!
//! The marker pattern is `<!--KEY: VALUE-->`. Values are matched non-greedily
//! and may span multiple lines. Keys are case-sensitive after trimming:
//! `title` and `author` overwrite, `tag` accumulates into the tag set, and
//! anything else is ignored silently. Markers stay inline in the body — the
//! template renders the raw content as-is and browsers treat the markers as
//! ordinary comments.
//!
//! ## Content identity
//!
//! The content hash covers the *whole* normalized document, markers included.
//! Editing a marker therefore counts as new content and re-stamps the entry's
//! publish date and sort key. Line endings are normalized (CRLF → LF) before
//! hashing so the same logical content hashes identically regardless of the
//! source line-ending convention.
//!
//! Parsing never fails: malformed or missing markers leave the corresponding
//! field at its default (empty title, configured default author, empty tags).

use crate::types::Entry;
use chrono::Utc;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// `<!--KEY: VALUE-->`, non-greedy, value may contain newlines.
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--(.+?):(.*?)-->").unwrap());

/// Width of the short content identifier.
pub const HASH_LEN: usize = 8;

/// First [`HASH_LEN`] hex characters of SHA-256 over the CRLF-normalized
/// text. Deterministic; uniqueness is best-effort and collision handling is
/// out of scope.
pub fn content_hash(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n");
    let digest = Sha256::digest(normalized.as_bytes());
    format!("{digest:x}")[..HASH_LEN].to_string()
}

/// Parse a raw content blob into an [`Entry`].
///
/// `sort_key` and `publish_date` are provisional — the snapshot store
/// replaces them with the cached values when this content version has been
/// seen before. `uri` is left empty for the caller to fill in.
pub fn parse(raw: &str, default_author: &str, date_format: &str) -> Entry {
    let mut title = String::new();
    let mut author = String::new();
    let mut tags = BTreeSet::new();

    for caps in MARKER.captures_iter(raw) {
        let value = caps[2].trim();
        match caps[1].trim() {
            "title" => title = value.to_string(),
            "author" => author = value.to_string(),
            "tag" => {
                tags.insert(value.to_string());
            }
            _ => {}
        }
    }

    if author.is_empty() {
        author = default_author.to_string();
    }

    let now = Utc::now();
    Entry {
        title,
        author,
        tags,
        publish_date: now.format(date_format).to_string(),
        // i64 nanoseconds cover dates through 2262
        sort_key: now.timestamp_nanos_opt().unwrap_or(i64::MAX),
        content_hash: content_hash(raw),
        uri: String::new(),
        body: raw.to_string(),
    }
}
