//! Extracted value types and the leaf value resolver.

use indexmap::IndexMap;
use scraper::ElementRef;
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from property name to stored entry.
///
/// One of these is produced per schema-root element. Key presence is always
/// checked explicitly against the map itself, never against any inherited
/// namespace.
pub type PropertyMap = IndexMap<String, PropertyValue>;

/// Terminal representation of a leaf annotated element.
///
/// All three fields are serialized even when absent (as `null`), so the JSON
/// shape of a leaf is always `{"value": …, "url": …, "src": …}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedValue {
    /// Preferred textual value: `content` attribute, else rendered text,
    /// else `alt` attribute.
    pub value: Option<String>,
    /// `href` attribute, when the element carries one.
    pub url: Option<String>,
    /// `src` attribute, when the element carries one.
    pub src: Option<String>,
}

/// One stored entry in a [`PropertyMap`].
///
/// A key starts out as a single `Leaf` or `Group` and is promoted to
/// `Repeated` on the second occurrence of the same property name at the same
/// nesting level. `Repeated` holds leaves and groups but never another
/// `Repeated`: later occurrences append instead of re-wrapping.
// Untagged variant order matters for deserialization: `Group` must be tried
// before `Leaf` so that a group containing a property named "value" is not
// mistaken for a leaf. A leaf map fails the `Group` attempt because its
// values are strings/nulls, not nested entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A nested group of properties.
    Group(PropertyMap),
    /// A single leaf occurrence.
    Leaf(ExtractedValue),
    /// Collision-promoted sequence of leaves and groups, in encounter order.
    Repeated(Vec<PropertyValue>),
}

/// Builds the [`ExtractedValue`] for a leaf annotated element.
///
/// `value` falls back through the sources in priority order: an explicit
/// `content` attribute, the element's rendered text, then the `alt`
/// attribute. An empty source counts as absent and falls through. `url` and
/// `src` mirror the `href` and `src` attributes verbatim; both may be set at
/// once, and the renderer breaks the tie in favor of the link.
pub fn resolve_leaf_value(element: ElementRef) -> ExtractedValue {
    let value = element
        .value()
        .attr("content")
        .filter(|content| !content.is_empty())
        .map(str::to_string)
        .or_else(|| rendered_text(element))
        .or_else(|| {
            element
                .value()
                .attr("alt")
                .filter(|alt| !alt.is_empty())
                .map(str::to_string)
        });

    ExtractedValue {
        value,
        url: element.value().attr("href").map(str::to_string),
        src: element.value().attr("src").map(str::to_string),
    }
}

/// Joins the element's text nodes with whitespace collapsed, the way a
/// browser reports rendered text. Returns `None` when nothing renders.
fn rendered_text(element: ElementRef) -> Option<String> {
    // Adjacent inline fragments concatenate without a separator; only
    // whitespace present in the markup separates words.
    let raw: String = element.text().collect();
    let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
