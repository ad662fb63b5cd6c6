//! Grouping indices over the resolved entry set.
//!
//! One aggregation pass produces the two secondary views the renderer needs:
//! entries per tag and entries per author. The full entry list itself is the
//! third, chronological view and is owned by the caller.
//!
//! Entries within a group keep discovery order — the renderer sorts by
//! freshness at render time, so collection order carries no meaning beyond
//! determinism. Empty grouping keys are never inserted; an entry with an
//! empty tag string must not produce a spurious tag page.

use crate::types::Entry;
use std::collections::BTreeMap;

/// Tag and author views over a borrowed entry set.
pub struct Indices<'a> {
    /// Tag → entries carrying that tag, discovery order.
    pub by_tag: BTreeMap<String, Vec<&'a Entry>>,
    /// Author → entries by that author, discovery order.
    pub by_author: BTreeMap<String, Vec<&'a Entry>>,
}

/// Build both groupings in a single pass over `entries`.
pub fn build_indices(entries: &[Entry]) -> Indices<'_> {
    let mut by_tag: BTreeMap<String, Vec<&Entry>> = BTreeMap::new();
    let mut by_author: BTreeMap<String, Vec<&Entry>> = BTreeMap::new();

    for entry in entries {
        add_grouped(&mut by_author, &entry.author, entry);
        for tag in &entry.tags {
            add_grouped(&mut by_tag, tag, entry);
        }
    }

    Indices { by_tag, by_author }
}

fn add_grouped<'a>(map: &mut BTreeMap<String, Vec<&'a Entry>>, key: &str, entry: &'a Entry) {
    if key.is_empty() {
        return;
    }
    map.entry(key.to_string()).or_default().push(entry);
}
