//! JSON rendering of the parsed result set.

use log::error;

use crate::extract::PropertyMap;

use super::{escape_attr, escape_text};

/// Renders the full result set as a JSON string inside a textarea element.
///
/// The payload is the plain `serde_json` serialization of the ordered result
/// set with no additional transformation; decoding it yields the parsed data
/// back.
pub fn json_textarea(parsed: &[PropertyMap], class_namespace: &str) -> String {
    let payload = match serde_json::to_string(parsed) {
        Ok(json) => json,
        Err(err) => {
            error!("Failed to serialize parsed schema data: {err}");
            String::from("[]")
        }
    };

    format!(
        r#"<textarea class="{ns}__textarea">{payload}</textarea>"#,
        ns = escape_attr(class_namespace),
        payload = escape_text(&payload),
    )
}
