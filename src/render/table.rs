//! HTML table rendering of a parsed schema.

use crate::extract::{PropertyMap, PropertyValue};

use super::{escape_attr, escape_text, render_value};

/// Renders one schema root as a two-column table.
///
/// The table is headed by `{schema_name} Table #{index}` spanning both
/// columns. Body rows carry the property name in the left cell and the
/// rendered value in the right cell; nested groups become nested tables
/// inside a cell marked `td--nested`. Collision-promoted sequences render
/// one row per element, all sharing the key label, in stored order.
pub fn schema_table(
    schema: &PropertyMap,
    schema_name: &str,
    class_namespace: &str,
    index: usize,
) -> String {
    let mut table = format!(
        concat!(
            r#"<table class="{ns}__table" border="0">"#,
            r#"<thead><tr><th colspan="2">{name} Table #{index}</th></tr></thead>"#,
            "<tbody>",
        ),
        ns = escape_attr(class_namespace),
        name = escape_text(schema_name),
        index = index,
    );

    table_body(&mut table, schema);
    table.push_str("</tbody></table>");
    table
}

/// Appends one `<tr>` per stored entry, flattening sequences into one row
/// per element under the shared key.
fn table_body(out: &mut String, schema: &PropertyMap) {
    for (key, entry) in schema {
        match entry {
            PropertyValue::Repeated(items) => {
                for item in items {
                    push_row(out, key, item);
                }
            }
            single => push_row(out, key, single),
        }
    }
}

fn push_row(out: &mut String, key: &str, entry: &PropertyValue) {
    out.push_str("<tr><td>");
    // The key cell is emitted literally.
    out.push_str(key);
    out.push_str("</td>");
    push_cell(out, entry);
    out.push_str("</tr>");
}

/// Appends the value cell for one stored entry.
fn push_cell(out: &mut String, entry: &PropertyValue) {
    match entry {
        PropertyValue::Group(group) => {
            out.push_str(r#"<td class="td--nested"><table><tbody>"#);
            table_body(out, group);
            out.push_str("</tbody></table></td>");
        }
        PropertyValue::Leaf(value) => {
            out.push_str("<td>");
            out.push_str(&render_value(value));
            out.push_str("</td>");
        }
        PropertyValue::Repeated(items) => {
            // Sequences are flattened into sibling rows before reaching this
            // point; a nested sequence renders as a compound cell so nothing
            // is ever dropped.
            out.push_str("<td>");
            for item in items {
                push_cell(out, item);
            }
            out.push_str("</td>");
        }
    }
}
