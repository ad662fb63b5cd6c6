//! # paperpress
//!
//! A minimal static blog generator. Your filesystem is the data source:
//! every `.html` fragment below the content root becomes one entry, with
//! title, author, and tags read from comment markers embedded in the
//! fragment itself — no front matter, no database, no markdown toolchain.
//!
//! # Architecture: One Pass, Four Listings
//!
//! A build is a single synchronous pass:
//!
//! ```text
//! 1. Scan     content/  →  source documents      (paths + output URIs)
//! 2. Resolve  document  →  Entry                 (parse, then snapshot cache)
//! 3. Index    entries   →  by-tag / by-author    (one aggregation pass)
//! 4. Render   groupings →  public/               (paginated HTML)
//! ```
//!
//! The same pagination renderer is invoked in four contexts — the global
//! chronological index, one listing per tag, one listing per author, and a
//! single-article page per entry — so pagination correctness lives in
//! exactly one place.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Enumerates source documents below the content root |
//! | [`extract`] | Parses metadata markers and computes the content hash |
//! | [`store`] | Snapshot cache — keeps publish dates and ordering stable across runs |
//! | [`index`] | Builds the by-tag and by-author groupings |
//! | [`naming`] | Page-link naming and grouping-directory slugs |
//! | [`render`] | Splits a listing into pages and writes them |
//! | [`template`] | The shared Maud template and its payload contract |
//! | [`build`] | Orchestrates a full generation pass |
//! | [`serve`] | Read-only preview server over the output tree |
//! | [`config`] | `config.toml` loading and validation |
//! | [`types`] | `Entry` and `SourceDoc`, shared across stages |
//!
//! # Design Decisions
//!
//! ## Content-Addressed Snapshots
//!
//! Entries are re-parsed on every run, but their publish date and sort key
//! must not drift just because the generator ran again. The first time a
//! content version is seen, the parsed entry is persisted as a JSON snapshot
//! keyed by `(uri, content hash)`; later runs with the same hash reuse the
//! recorded metadata. The hash covers the whole document, markers included,
//! so editing a marker re-stamps the entry — a deliberate trade: content
//! identity stays a pure function of the bytes on disk.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than a runtime template file:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: the template consumes a named payload struct, not stringly-typed lookups.
//! - **XSS-safe by default**: interpolation is auto-escaped; entry bodies are
//!   the one explicit exception, since sources are already HTML.
//! - **Zero runtime files**: no template to ship or get out of sync.
//!
//! ## Full Re-render, Cached Identity
//!
//! Every run rewrites every output page — there is no dirty-checking at the
//! render stage. The only thing the cache protects is entry *identity*
//! (dates and ordering). For a blog-sized corpus this keeps the model simple
//! enough to hold in your head: output is always a pure function of the
//! current source tree plus the snapshot records.

pub mod build;
pub mod config;
pub mod extract;
pub mod index;
pub mod naming;
pub mod render;
pub mod scan;
pub mod serve;
pub mod store;
pub mod template;
pub mod types;
