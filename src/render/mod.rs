//! Presentational rendering of parsed schema data.
//!
//! This module turns extracted [`PropertyMap`]s into HTML fragments:
//! - a two-column table per schema root, with nested tables for groups,
//! - a textarea holding the JSON serialization of the full result set,
//! - an error display span.
//!
//! Rendering consumes the extracted data only; it never touches the source
//! document. All generated class names are prefixed with the configured
//! class namespace. Output is built into an owned [`Container`], the single
//! output surface of a parser session; every render clears and rebuilds it.

use crate::extract::ExtractedValue;

mod json;
mod table;

// Re-export public API
pub use json::json_textarea;
pub use table::schema_table;

/// The owned output container: an HTML `div` identified by a configurable id
/// whose children are replaced wholesale on every render.
#[derive(Debug, Clone)]
pub struct Container {
    id: String,
    class_namespace: String,
    children: Vec<String>,
}

impl Container {
    /// Creates an empty container with the given id and class prefix.
    pub fn new(id: &str, class_namespace: &str) -> Self {
        Container {
            id: id.to_string(),
            class_namespace: class_namespace.to_string(),
            children: Vec::new(),
        }
    }

    /// Removes all rendered content.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Appends one rendered fragment.
    pub fn append(&mut self, fragment: String) {
        self.children.push(fragment);
    }

    /// True when nothing has been rendered into the container.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Serializes the container and its children to HTML.
    pub fn to_html(&self) -> String {
        format!(
            r#"<div id="{id}" class="{ns}__container">{children}</div>"#,
            id = escape_attr(&self.id),
            ns = escape_attr(&self.class_namespace),
            children = self.children.concat(),
        )
    }
}

/// Renders a leaf value as its presentational element: a hyperlink when a
/// link target is present (regardless of any media source), else an image
/// when a media source is present, else plain text.
///
/// Empty-string attributes count as absent, matching how a browser treats a
/// bare `href=""`.
pub fn render_value(value: &ExtractedValue) -> String {
    let text = value.value.as_deref().unwrap_or("");
    let url = value.url.as_deref().filter(|url| !url.is_empty());
    let src = value.src.as_deref().filter(|src| !src.is_empty());

    if let Some(url) = url {
        format!(
            r#"<a href="{href}">{text}</a>"#,
            href = escape_attr(url),
            text = escape_text(text),
        )
    } else if let Some(src) = src {
        format!(
            r#"<img src="{src}" alt="{alt}">"#,
            src = escape_attr(src),
            alt = escape_attr(text),
        )
    } else {
        escape_text(text)
    }
}

/// Renders the error display span: `An error occurred: {message}`.
pub fn error_span(message: &str, class_namespace: &str) -> String {
    format!(
        r#"<span class="{ns}__error">An error occurred: {message}</span>"#,
        ns = escape_attr(class_namespace),
        message = escape_text(message),
    )
}

/// Escapes text content for embedding between tags.
pub(crate) fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escapes a value for embedding inside a double-quoted attribute.
pub(crate) fn escape_attr(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
