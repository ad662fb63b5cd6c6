//! Pagination renderer.
//!
//! One algorithm serves four invocation contexts: the global chronological
//! index, one listing per tag, one listing per author, and the single-article
//! page for each entry. The caller hands over an entry set, a destination,
//! and a page title; this module sorts, slices, names, and writes.
//!
//! Sorting happens here, at render time, on a local copy — groupings arrive
//! in discovery order and every listing is independently freshness-ordered
//! (newest first, URI as tie-break for determinism).
//!
//! A destination ending in the content suffix (`.html`) names a single file:
//! the call renders exactly one page to that file and flags the payload as
//! an article view. Any other destination is a directory; each page's file
//! name is appended via [`page_file_name`].
//!
//! Output files are overwritten unconditionally. Regeneration is always full
//! per run — only the snapshot store avoids recomputing metadata, never
//! re-rendering.

use crate::naming::page_file_name;
use crate::template::{self, PagePayload};
use crate::types::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared rendering context: everything that stays fixed across the four
/// invocation contexts of one build.
pub struct Renderer<'a> {
    /// Site title for the page header.
    pub site_title: &'a str,
    /// Entries per index page. Values below 1 are treated as 1.
    pub page_size: usize,
    /// Complete tag grouping, handed to the template of every page for the
    /// tag cloud.
    pub tags: &'a BTreeMap<String, Vec<&'a Entry>>,
    /// Tag → directory slug, shared with the build so links and listing
    /// directories agree even when distinct tags sanitize to one slug.
    pub tag_slugs: &'a BTreeMap<String, String>,
    /// Author → directory slug, same assignment discipline as tags.
    pub author_slugs: &'a BTreeMap<String, String>,
}

impl Renderer<'_> {
    /// Paginate `entries` into `dest` under `title`, returning the paths
    /// written. Zero entries write zero files.
    pub fn render(
        &self,
        entries: &[&Entry],
        dest: &Path,
        title: &str,
    ) -> Result<Vec<PathBuf>, RenderError> {
        let mut ordered: Vec<&Entry> = entries.to_vec();
        ordered.sort_by(|a, b| b.sort_key.cmp(&a.sort_key).then_with(|| a.uri.cmp(&b.uri)));

        let article_view = dest
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("html"));
        let page_size = self.page_size.max(1);
        let total_pages = ordered.len().div_ceil(page_size);

        let mut written = Vec::new();
        if total_pages == 0 {
            return Ok(written);
        }

        if article_view {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
        } else {
            fs::create_dir_all(dest)?;
        }

        for (page_index, chunk) in ordered.chunks(page_size).enumerate() {
            let cur_page = page_index + 1;
            let payload = PagePayload {
                site_title: self.site_title,
                title,
                cur_page,
                total_pages,
                prev_link: page_file_name(cur_page as i64 - 1),
                next_link: page_file_name(cur_page as i64 + 1),
                entries: chunk,
                article_view,
                tags: self.tags,
                tag_slugs: self.tag_slugs,
                author_slugs: self.author_slugs,
            };

            // In article view the destination names the one file directly;
            // this call path only ever carries a single entry.
            let path = if article_view {
                dest.to_path_buf()
            } else {
                dest.join(page_file_name(cur_page as i64))
            };

            println!("write: {}", path.display());
            fs::write(&path, template::render_page(&payload).into_string())?;
            written.push(path);
        }

        Ok(written)
    }
}
