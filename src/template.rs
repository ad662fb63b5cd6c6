//! The shared page template.
//!
//! One template renders every output page: the global index, tag and author
//! indices, and single-article pages. [`PagePayload`] is the entire contract
//! between the renderer and this module — the renderer fills it per page,
//! this module turns it into HTML.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/), so the template
//! is checked at compile time and interpolation is escaped by default. Entry
//! bodies are the one deliberate exception: sources are already HTML
//! fragments and are emitted as-is, metadata markers included (browsers
//! treat them as comments).
//!
//! Prev/next links arrive unvalidated — the payload carries whatever the
//! naming function produced for `cur_page ± 1`. This module is responsible
//! for suppressing links that point past the valid range.

use crate::naming::slugify;
use crate::types::Entry;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::collections::BTreeMap;

/// Everything the template receives for one output page.
pub struct PagePayload<'a> {
    /// Site title, shown in the header of every page.
    pub site_title: &'a str,
    /// Page title: site title for the global index, `#tag` / `@author` for
    /// grouping indices, the entry title for article pages.
    pub title: &'a str,
    /// 1-based number of this page.
    pub cur_page: usize,
    /// Total pages in this listing.
    pub total_pages: usize,
    /// Link target for `cur_page - 1`. Not bounds-checked; suppressed here
    /// when `cur_page` is the first page.
    pub prev_link: String,
    /// Link target for `cur_page + 1`. Not bounds-checked; suppressed here
    /// when `cur_page` is the last page.
    pub next_link: String,
    /// The slice of entries belonging to this page.
    pub entries: &'a [&'a Entry],
    /// True when this is a single-article page rather than a listing.
    pub article_view: bool,
    /// Complete tag → entries grouping, for the tag cloud on every page.
    pub tags: &'a BTreeMap<String, Vec<&'a Entry>>,
    /// Tag → directory slug, assigned once per build. Distinct tags can
    /// sanitize to the same bare slug; links must use the assignment the
    /// listing directories were created under.
    pub tag_slugs: &'a BTreeMap<String, String>,
    /// Author → directory slug, assigned once per build.
    pub author_slugs: &'a BTreeMap<String, String>,
}

/// Render one page to markup.
pub fn render_page(page: &PagePayload) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (document_title(page)) }
                link rel="stylesheet" href="/style.css";
            }
            body {
                header.site-header {
                    a.site-title href="/" { (page.site_title) }
                }
                div.layout {
                    main {
                        @if !page.article_view {
                            h1.page-title { (page.title) }
                        }
                        @for entry in page.entries {
                            (render_entry(entry, page))
                        }
                        (pager(page))
                    }
                    (tag_cloud(page))
                }
            }
        }
    }
}

fn document_title(page: &PagePayload) -> String {
    if page.title.is_empty() {
        page.site_title.to_string()
    } else if page.article_view {
        format!("{} - {}", page.title, page.site_title)
    } else {
        page.title.to_string()
    }
}

/// Directory slug for a grouping key. Keys missing from the map (entries
/// rendered outside a full build) fall back to the bare sanitized form.
fn grouping_slug(slugs: &BTreeMap<String, String>, key: &str) -> String {
    slugs.get(key).cloned().unwrap_or_else(|| slugify(key))
}

/// One entry, as an article card on listings or as the full article view.
fn render_entry(entry: &Entry, page: &PagePayload) -> Markup {
    html! {
        article.entry {
            @if !page.article_view {
                h2.entry-title {
                    a href={ "/blog/" (entry.uri) } {
                        @if entry.title.is_empty() { (entry.uri) } @else { (entry.title) }
                    }
                }
            }
            p.entry-meta {
                span.entry-date { (entry.publish_date) }
                " by "
                a.entry-author href={ "/author/" (grouping_slug(page.author_slugs, &entry.author)) "/" } {
                    (entry.author)
                }
                @for tag in entry.tags.iter().filter(|t| !t.is_empty()) {
                    " "
                    a.entry-tag href={ "/tag/" (grouping_slug(page.tag_slugs, tag)) "/" } { "#" (tag) }
                }
            }
            div.entry-body {
                // Bodies are trusted HTML fragments, rendered unmodified.
                (PreEscaped(entry.body.as_str()))
            }
        }
    }
}

/// Prev/next navigation. Listings are newest-first, so the previous page
/// holds newer entries. Out-of-range links are suppressed here, not in the
/// renderer.
fn pager(page: &PagePayload) -> Markup {
    html! {
        @if !page.article_view && page.total_pages > 1 {
            nav.pager {
                @if page.cur_page > 1 {
                    a.pager-prev href=(page.prev_link) { "« newer" }
                }
                span.pager-count { "page " (page.cur_page) " of " (page.total_pages) }
                @if page.cur_page < page.total_pages {
                    a.pager-next href=(page.next_link) { "older »" }
                }
            }
        }
    }
}

/// Sidebar listing every tag with its entry count.
fn tag_cloud(page: &PagePayload) -> Markup {
    html! {
        @if !page.tags.is_empty() {
            aside.tag-cloud {
                h2 { "Tags" }
                ul {
                    @for (tag, entries) in page.tags {
                        li {
                            a href={ "/tag/" (grouping_slug(page.tag_slugs, tag)) "/" } { (tag) }
                            span.tag-count { " (" (entries.len()) ")" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::sync::LazyLock;

    // Most pages render without slug collisions; an empty assignment falls
    // back to the bare sanitized form.
    static NO_SLUGS: LazyLock<BTreeMap<String, String>> = LazyLock::new(BTreeMap::new);

    fn entry(uri: &str, title: &str, body: &str) -> Entry {
        Entry {
            title: title.to_string(),
            author: "ada".to_string(),
            tags: BTreeSet::from(["rust".to_string()]),
            publish_date: "Mon, 02 Jan 2006 15:04:05".to_string(),
            sort_key: 1,
            content_hash: "00000000".to_string(),
            uri: uri.to_string(),
            body: body.to_string(),
        }
    }

    fn payload<'a>(
        entries: &'a [&'a Entry],
        tags: &'a BTreeMap<String, Vec<&'a Entry>>,
        cur_page: usize,
        total_pages: usize,
        article_view: bool,
    ) -> PagePayload<'a> {
        PagePayload {
            site_title: "Blog",
            title: "Listing",
            cur_page,
            total_pages,
            prev_link: crate::naming::page_file_name(cur_page as i64 - 1),
            next_link: crate::naming::page_file_name(cur_page as i64 + 1),
            entries,
            article_view,
            tags,
            tag_slugs: &NO_SLUGS,
            author_slugs: &NO_SLUGS,
        }
    }

    // =========================================================================
    // Listing layout
    // =========================================================================

    #[test]
    fn listing_links_entries_and_shows_meta() {
        let e = entry("2024/a.html", "Hello", "<p>hi</p>");
        let refs = [&e];
        let tags = BTreeMap::new();
        let html = render_page(&payload(&refs, &tags, 1, 1, false)).into_string();

        assert!(html.contains(r#"href="/blog/2024/a.html""#));
        assert!(html.contains("Hello"));
        assert!(html.contains("Mon, 02 Jan 2006 15:04:05"));
        assert!(html.contains(r#"href="/author/ada/""#));
        assert!(html.contains(r#"href="/tag/rust/""#));
    }

    #[test]
    fn untitled_entry_falls_back_to_uri() {
        let e = entry("no-title.html", "", "<p>x</p>");
        let refs = [&e];
        let tags = BTreeMap::new();
        let html = render_page(&payload(&refs, &tags, 1, 1, false)).into_string();
        assert!(html.contains("no-title.html"));
    }

    #[test]
    fn body_rendered_raw_with_markers_inline() {
        let e = entry("a.html", "T", "<!--tag: rust--><em>styled</em>");
        let refs = [&e];
        let tags = BTreeMap::new();
        let html = render_page(&payload(&refs, &tags, 1, 1, false)).into_string();
        assert!(html.contains("<em>styled</em>"));
        assert!(html.contains("<!--tag: rust-->"));
    }

    #[test]
    fn titles_are_escaped() {
        let e = entry("a.html", "<script>alert('x')</script>", "<p>x</p>");
        let refs = [&e];
        let tags = BTreeMap::new();
        let html = render_page(&payload(&refs, &tags, 1, 1, false)).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    // =========================================================================
    // Pager suppression
    // =========================================================================

    #[test]
    fn first_page_suppresses_prev() {
        let e = entry("a.html", "T", "x");
        let refs = [&e];
        let tags = BTreeMap::new();
        let html = render_page(&payload(&refs, &tags, 1, 3, false)).into_string();
        assert!(!html.contains("pager-prev"));
        assert!(html.contains("pager-next"));
        assert!(html.contains(r#"href="index2.html""#));
    }

    #[test]
    fn middle_page_links_both_directions() {
        let e = entry("a.html", "T", "x");
        let refs = [&e];
        let tags = BTreeMap::new();
        let html = render_page(&payload(&refs, &tags, 2, 3, false)).into_string();
        // Page 2's prev is the bare index, its next the suffixed name.
        assert!(html.contains(r#"href="index.html""#));
        assert!(html.contains(r#"href="index3.html""#));
        assert!(html.contains("page 2 of 3"));
    }

    #[test]
    fn last_page_suppresses_next() {
        let e = entry("a.html", "T", "x");
        let refs = [&e];
        let tags = BTreeMap::new();
        let html = render_page(&payload(&refs, &tags, 3, 3, false)).into_string();
        assert!(html.contains("pager-prev"));
        assert!(!html.contains("pager-next"));
    }

    #[test]
    fn single_page_listing_has_no_pager() {
        let e = entry("a.html", "T", "x");
        let refs = [&e];
        let tags = BTreeMap::new();
        let html = render_page(&payload(&refs, &tags, 1, 1, false)).into_string();
        assert!(!html.contains("pager"));
    }

    // =========================================================================
    // Article view
    // =========================================================================

    #[test]
    fn article_view_drops_listing_chrome() {
        let e = entry("a.html", "Solo", "<p>body</p>");
        let refs = [&e];
        let tags = BTreeMap::new();
        let mut page = payload(&refs, &tags, 1, 1, true);
        page.title = "Solo";
        let html = render_page(&page).into_string();
        assert!(!html.contains("page-title"));
        assert!(!html.contains("entry-title"));
        assert!(!html.contains("pager"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("<title>Solo - Blog</title>"));
    }

    // =========================================================================
    // Tag cloud
    // =========================================================================

    #[test]
    fn tag_cloud_lists_all_tags_with_counts() {
        let a = entry("a.html", "A", "x");
        let b = entry("b.html", "B", "x");
        let mut tags: BTreeMap<String, Vec<&Entry>> = BTreeMap::new();
        tags.insert("rust".to_string(), vec![&a, &b]);
        tags.insert("blog".to_string(), vec![&a]);

        let refs = [&a];
        let html = render_page(&payload(&refs, &tags, 1, 1, false)).into_string();
        assert!(html.contains("tag-cloud"));
        assert!(html.contains("rust"));
        assert!(html.contains("(2)"));
        assert!(html.contains("blog"));
        assert!(html.contains("(1)"));
    }

    #[test]
    fn tag_cloud_present_on_article_pages_too() {
        let a = entry("a.html", "A", "x");
        let mut tags: BTreeMap<String, Vec<&Entry>> = BTreeMap::new();
        tags.insert("rust".to_string(), vec![&a]);

        let refs = [&a];
        let html = render_page(&payload(&refs, &tags, 1, 1, true)).into_string();
        assert!(html.contains("tag-cloud"));
    }

    #[test]
    fn colliding_tags_link_to_their_assigned_directories() {
        let mut e = entry("a.html", "T", "x");
        e.tags = BTreeSet::from(["c#".to_string(), "c++".to_string()]);
        let refs = [&e];
        let mut tags: BTreeMap<String, Vec<&Entry>> = BTreeMap::new();
        tags.insert("c#".to_string(), vec![&e]);
        tags.insert("c++".to_string(), vec![&e]);
        let slugs = crate::naming::assign_slugs(tags.keys().map(String::as_str));
        assert_ne!(slugs["c#"], slugs["c++"]);

        let mut page = payload(&refs, &tags, 1, 1, false);
        page.tag_slugs = &slugs;
        let html = render_page(&page).into_string();

        assert!(html.contains(&format!(r#"href="/tag/{}/""#, slugs["c#"])));
        assert!(html.contains(&format!(r#"href="/tag/{}/""#, slugs["c++"])));
    }

    #[test]
    fn no_tags_no_cloud() {
        let a = entry("a.html", "A", "x");
        let tags = BTreeMap::new();
        let refs = [&a];
        let html = render_page(&payload(&refs, &tags, 1, 1, false)).into_string();
        assert!(!html.contains("tag-cloud"));
    }
}
