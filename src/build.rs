//! Build orchestrator.
//!
//! Runs the whole generation pass, one stage at a time:
//!
//! ```text
//! scan source tree → resolve each document through the snapshot store
//!     → build tag/author indices → render four listing contexts → done
//! ```
//!
//! The stages themselves are pure or narrowly I/O-bound; this module owns
//! the sequencing, the output directory skeleton, and static asset copying.
//! The pass is single-threaded and runs to completion or aborts on the
//! first I/O failure — there is no partial-output guarantee.
//!
//! Output layout:
//!
//! ```text
//! public/
//! ├── index.html, index2.html, ...   # global chronological index
//! ├── style.css, logo.png            # copied assets
//! ├── tag/<slug>/index.html, ...     # one paginated listing per tag
//! ├── author/<slug>/index.html, ...  # one paginated listing per author
//! └── blog/<uri>                     # one article page per entry,
//!     └── <uri>.<hash>               # snapshot records beside the articles
//! ```

use crate::config::SiteConfig;
use crate::index;
use crate::naming;
use crate::render::{RenderError, Renderer};
use crate::scan::{self, ScanError};
use crate::store::{CacheStatus, SnapshotStore, StoreError};
use crate::types::Entry;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Counters reported after a successful pass.
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub entries: usize,
    pub created: usize,
    pub reused: usize,
    pub pages_written: usize,
}

/// Built-in stylesheet, written when the content root ships no `style.css`.
const DEFAULT_STYLESHEET: &str = include_str!("../static/style.css");

/// Run a full generation pass from `source` into `output`.
pub fn build(source: &Path, output: &Path, config: &SiteConfig) -> Result<BuildSummary, BuildError> {
    fs::create_dir_all(output.join("blog"))?;
    fs::create_dir_all(output.join("tag"))?;
    fs::create_dir_all(output.join("author"))?;

    copy_assets(source, output, &config.assets)?;

    let store = SnapshotStore::new(output.join("blog"));
    let docs = scan::scan(source)?;

    let mut summary = BuildSummary::default();
    let mut entries: Vec<Entry> = Vec::with_capacity(docs.len());
    for doc in &docs {
        let raw = fs::read_to_string(&doc.path)?;
        let (entry, status) =
            store.resolve(&doc.uri, &raw, &config.default_author, &config.date_format)?;
        match status {
            CacheStatus::Created => {
                summary.created += 1;
                println!("new content: {}", doc.path.display());
            }
            CacheStatus::Reused => {
                summary.reused += 1;
                println!("unmodified content: {}, pass", doc.path.display());
            }
        }
        entries.push(entry);
    }
    summary.entries = entries.len();

    let indices = index::build_indices(&entries);
    // One slug assignment per grouping for the whole build; distinct keys
    // that sanitize to the same slug get distinct directories, and the
    // template links through the same maps.
    let tag_slugs = naming::assign_slugs(indices.by_tag.keys().map(String::as_str));
    let author_slugs = naming::assign_slugs(indices.by_author.keys().map(String::as_str));
    let renderer = Renderer {
        site_title: &config.title,
        page_size: config.page_size,
        tags: &indices.by_tag,
        tag_slugs: &tag_slugs,
        author_slugs: &author_slugs,
    };

    for (tag, group) in &indices.by_tag {
        let dest = output.join("tag").join(&tag_slugs[tag]);
        summary.pages_written += renderer.render(group, &dest, &format!("#{tag}"))?.len();
    }

    for (author, group) in &indices.by_author {
        let dest = output.join("author").join(&author_slugs[author]);
        summary.pages_written += renderer.render(group, &dest, &format!("@{author}"))?.len();
    }

    for entry in &entries {
        let dest = output.join("blog").join(&entry.uri);
        summary.pages_written += renderer.render(&[entry], &dest, &entry.title)?.len();
    }

    let all: Vec<&Entry> = entries.iter().collect();
    summary.pages_written += renderer.render(&all, output, &config.title)?.len();

    Ok(summary)
}

/// Copy the configured assets from the content root into the output root.
/// Missing assets are skipped with a notice; a missing `style.css` falls
/// back to the built-in stylesheet so pages stay presentable.
fn copy_assets(source: &Path, output: &Path, assets: &[String]) -> std::io::Result<()> {
    for name in assets {
        let from = source.join(name);
        if from.is_file() {
            fs::copy(&from, output.join(name))?;
        } else if name == "style.css" {
            fs::write(output.join(name), DEFAULT_STYLESHEET)?;
        } else {
            println!("asset missing: {}, skipped", from.display());
        }
    }
    Ok(())
}
