//! Naming conventions for output files and grouping directories.
//!
//! ## Page-link naming
//!
//! Index pages of a listing share one naming function: page 1 gets the bare
//! `index.html`, page N > 1 gets `indexN.html`. The asymmetry is deliberate —
//! it keeps the canonical first-page URL clean (`/tag/rust/` instead of
//! `/tag/rust/index1.html`). Prev/next links are produced by the same
//! function with no bounds checking; the template suppresses links that fall
//! outside the valid range.
//!
//! ## Grouping slugs
//!
//! Tag and author values come straight out of markers and can contain
//! anything, but they become directory names under `tag/` and `author/`.
//! [`slugify`] maps them to URL-safe names: non-alphanumeric characters
//! become dashes, runs collapse, long names truncate at a dash boundary.
//! A value with no safe characters at all falls back to a short
//! content-derived name so it still gets a stable page.
//!
//! Sanitization is lossy, so distinct keys can land on the same slug
//! (`c++` and `c#` both sanitize to `c`). [`assign_slugs`] resolves a whole
//! key set at once and suffixes later claimants, so every key keeps its own
//! directory.

use crate::extract::content_hash;
use std::collections::{BTreeMap, BTreeSet};

/// File name for the page at 1-based `index`. Tolerates zero and negative
/// values (both map to the bare name) because prev links are generated
/// without bounds validation.
pub fn page_file_name(index: i64) -> String {
    if index <= 1 {
        "index.html".to_string()
    } else {
        format!("index{index}.html")
    }
}

const MAX_SLUG_LEN: usize = 80;

/// Sanitize a grouping key for use as a directory name.
///
/// - Replaces non-alphanumeric characters (except dashes) with dashes
/// - Collapses consecutive dashes into one
/// - Strips leading and trailing dashes
/// - Truncates to `MAX_SLUG_LEN` characters (breaks at last dash before limit)
/// - Falls back to `g<hash>` when nothing survives sanitization
pub fn slugify(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();

    // Collapse consecutive dashes
    let mut collapsed = String::with_capacity(slug.len());
    let mut prev_dash = false;
    for c in slug.chars() {
        if c == '-' {
            if !prev_dash {
                collapsed.push('-');
            }
            prev_dash = true;
        } else {
            collapsed.push(c);
            prev_dash = false;
        }
    }

    let trimmed = collapsed.trim_matches('-');

    if trimmed.is_empty() {
        return format!("g{}", content_hash(name));
    }

    if trimmed.len() <= MAX_SLUG_LEN {
        trimmed.to_string()
    } else {
        let truncated = &trimmed[..MAX_SLUG_LEN];
        match truncated.rfind('-') {
            Some(pos) => truncated[..pos].to_string(),
            None => truncated.to_string(),
        }
    }
}

/// Assign a unique directory slug to every grouping key.
///
/// Keys are processed in iteration order; the first key to claim a slug
/// keeps the bare form and later colliding keys get a content-derived
/// suffix. Callers hand in the complete key set of one grouping (all tags,
/// or all authors) in sorted order, so the assignment is stable across runs
/// for an unchanged key set.
pub fn assign_slugs<'a, I>(keys: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slugs = BTreeMap::new();
    let mut taken = BTreeSet::new();
    for key in keys {
        let base = slugify(key);
        let slug = if taken.contains(&base) {
            format!("{base}-g{}", content_hash(key))
        } else {
            base
        };
        taken.insert(slug.clone());
        slugs.insert(key.to_string(), slug);
    }
    slugs
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // page_file_name
    // =========================================================================

    #[test]
    fn page_one_is_bare_index() {
        assert_eq!(page_file_name(1), "index.html");
    }

    #[test]
    fn later_pages_are_suffixed() {
        assert_eq!(page_file_name(2), "index2.html");
        assert_eq!(page_file_name(3), "index3.html");
        assert_eq!(page_file_name(17), "index17.html");
    }

    #[test]
    fn zero_and_negative_map_to_bare_index() {
        // Page 1's prev link is generated as page 0; the naming function
        // must tolerate it.
        assert_eq!(page_file_name(0), "index.html");
        assert_eq!(page_file_name(-1), "index.html");
    }

    // =========================================================================
    // slugify
    // =========================================================================

    #[test]
    fn alphanumeric_passthrough() {
        assert_eq!(slugify("rust"), "rust");
        assert_eq!(slugify("year-2024"), "year-2024");
    }

    #[test]
    fn replaces_spaces_and_special_chars() {
        assert_eq!(slugify("open source"), "open-source");
        assert_eq!(slugify("c++/systems"), "c-systems");
    }

    #[test]
    fn collapses_consecutive_dashes() {
        assert_eq!(slugify("a---b"), "a-b");
        assert_eq!(slugify("a - b"), "a-b");
    }

    #[test]
    fn strips_leading_trailing_dashes() {
        assert_eq!(slugify("--edge--"), "edge");
    }

    #[test]
    fn truncates_long_names_at_dash_boundary() {
        let long = "word-".repeat(30);
        let slug = slugify(&long);
        assert!(slug.len() <= 80);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn unsluggable_name_gets_stable_fallback() {
        let a = slugify("日本語");
        let b = slugify("日本語");
        assert_eq!(a, b);
        assert!(a.starts_with('g'));
        assert!(!a.is_empty());
    }

    #[test]
    fn distinct_unsluggable_names_do_not_collide() {
        assert_ne!(slugify("日本語"), slugify("한국어"));
    }

    // =========================================================================
    // assign_slugs
    // =========================================================================

    #[test]
    fn non_colliding_keys_keep_bare_slugs() {
        let slugs = assign_slugs(["rust", "open source"]);
        assert_eq!(slugs["rust"], "rust");
        assert_eq!(slugs["open source"], "open-source");
    }

    #[test]
    fn colliding_keys_get_distinct_directories() {
        let slugs = assign_slugs(["c#", "c++"]);
        assert_eq!(slugify("c#"), slugify("c++"));
        assert_ne!(slugs["c#"], slugs["c++"]);
        // First claimant keeps the bare slug, the later one is suffixed.
        assert_eq!(slugs["c#"], "c");
        assert!(slugs["c++"].starts_with("c-g"));
    }

    #[test]
    fn assignment_is_deterministic_for_a_key_set() {
        let keys = ["c", "c#", "c++"];
        assert_eq!(assign_slugs(keys), assign_slugs(keys));
    }
}
