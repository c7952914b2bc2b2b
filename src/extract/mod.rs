//! Microdata tree extraction.
//!
//! This module walks an annotated DOM subtree and builds a nested
//! [`PropertyMap`] from its `itemprop` annotations:
//! - nearest-annotated-descendant scoping (unannotated wrappers are skipped,
//!   annotated subtrees are not re-entered),
//! - leaf value resolution (`content` attribute, rendered text, `alt`),
//! - merge rules for repeated property names at the same nesting level.
//!
//! All extraction operates on borrowed `scraper` element references; the DOM
//! is never mutated.

use indexmap::map::Entry;
use log::debug;
use scraper::ElementRef;

mod value;

// Re-export public API
pub use value::{resolve_leaf_value, ExtractedValue, PropertyMap, PropertyValue};

/// Attribute that marks an element as participating in the extraction tree.
pub const ITEM_PROP_ATTR: &str = "itemprop";

/// Recursively extracts the annotated subtree rooted at `element` into
/// `parent`.
///
/// For a fresh schema root, pass an empty map; the map is mutated in place
/// and holds the full nested structure when the call returns. The element's
/// own `itemprop` attribute may be absent only at the scan root, in which
/// case descendants merge directly into `parent` without an extra nesting
/// level.
///
/// Repeated property names at the same level are promoted to an ordered
/// sequence on the second occurrence; later occurrences append to that
/// sequence rather than re-wrapping it.
pub fn extract_item_tree(element: ElementRef, parent: &mut PropertyMap) {
    let annotated = nearest_annotated_descendants(element);
    let key = element.value().attr(ITEM_PROP_ATTR);

    if !annotated.is_empty() {
        // Non-leaf: resolve the destination map, then recurse into each
        // nearest annotated descendant in document order.
        match key {
            // Scan root: no extra nesting level.
            None => {
                for child in annotated {
                    extract_item_tree(child, parent);
                }
            }
            Some(key) => {
                let destination = group_destination(parent, key);
                for child in annotated {
                    extract_item_tree(child, destination);
                }
            }
        }
    } else {
        // Leaf: resolve the literal value and merge it under the key.
        match key {
            None => {
                // A schema root with no annotated content contributes nothing.
                debug!("schema root has no itemprop annotations; skipping");
            }
            Some(key) => insert_leaf(parent, key, resolve_leaf_value(element)),
        }
    }
}

/// Collects the nearest annotated descendants of `element`: the closest
/// `itemprop`-bearing elements reachable without passing through another
/// annotated element. Unannotated wrappers at any depth are traversed;
/// annotated subtrees are collected and not re-entered.
fn nearest_annotated_descendants(element: ElementRef) -> Vec<ElementRef> {
    let mut found = Vec::new();
    collect_annotated(element, &mut found);
    found
}

fn collect_annotated<'a>(element: ElementRef<'a>, found: &mut Vec<ElementRef<'a>>) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            if child_element.value().attr(ITEM_PROP_ATTR).is_some() {
                found.push(child_element);
            } else {
                collect_annotated(child_element, found);
            }
        }
    }
}

/// Resolves the map that a non-leaf element's descendants merge into.
///
/// An existing group under `key` is reused (merge-in-place, so sibling
/// elements sharing a property name accumulate into one group). A vacant key
/// gets a fresh group. If the key is already claimed by a leaf, the existing
/// entry is kept and a fresh group is appended alongside it in a sequence,
/// mirroring the leaf collision rule; the same merge-in-place rule then
/// applies to the sequence's trailing group, so later sibling groups keep
/// accumulating into it instead of multiplying.
fn group_destination<'a>(parent: &'a mut PropertyMap, key: &str) -> &'a mut PropertyMap {
    let slot = parent
        .entry(key.to_string())
        .or_insert_with(|| PropertyValue::Group(PropertyMap::new()));

    match slot {
        PropertyValue::Group(_) => {}
        PropertyValue::Repeated(items) => {
            if !matches!(items.last(), Some(PropertyValue::Group(_))) {
                items.push(PropertyValue::Group(PropertyMap::new()));
            }
        }
        PropertyValue::Leaf(_) => {
            let existing = std::mem::replace(slot, PropertyValue::Repeated(Vec::new()));
            let PropertyValue::Repeated(items) = slot else {
                unreachable!("slot was just set to a sequence");
            };
            items.push(existing);
            items.push(PropertyValue::Group(PropertyMap::new()));
        }
    }

    match slot {
        PropertyValue::Group(group) => group,
        PropertyValue::Repeated(items) => match items.last_mut() {
            Some(PropertyValue::Group(group)) => group,
            _ => unreachable!("sequence tail is a group here"),
        },
        PropertyValue::Leaf(_) => unreachable!("leaf entries are promoted above"),
    }
}

/// Stores `leaf` under `key`, promoting to an ordered sequence on collision.
///
/// First occurrence stores the leaf directly. The second replaces the entry
/// with a two-element sequence `[existing, new]`. Third and later
/// occurrences append to the existing sequence; it is never re-nested.
fn insert_leaf(parent: &mut PropertyMap, key: &str, leaf: ExtractedValue) {
    let leaf = PropertyValue::Leaf(leaf);

    match parent.entry(key.to_string()) {
        Entry::Vacant(entry) => {
            entry.insert(leaf);
        }
        Entry::Occupied(mut entry) => {
            let existing =
                std::mem::replace(entry.get_mut(), PropertyValue::Repeated(Vec::new()));
            let mut items = match existing {
                PropertyValue::Repeated(items) => items,
                single => vec![single],
            };
            items.push(leaf);
            *entry.get_mut() = PropertyValue::Repeated(items);
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
