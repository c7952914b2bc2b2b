//! End-to-end parse and render tests against a realistic product page.

mod helpers;

use micro_schema_parser::{MicroSchemaParser, ParserOptions, PropertyMap, PropertyValue};

#[test]
fn test_full_page_json_shape() {
    let mut session = MicroSchemaParser::new(ParserOptions::default());
    session.parse(helpers::sample_product_page());
    assert!(!session.is_error());

    let json = serde_json::to_value(session.parsed_data()).expect("serializable result set");
    assert_eq!(
        json,
        serde_json::json!([{
            "name": { "value": "Deluxe Widget", "url": null, "src": null },
            "image": {
                "value": "A deluxe widget",
                "url": null,
                "src": "/img/widget.png",
            },
            "url": {
                "value": "Product page",
                "url": "https://shop.example/widget",
                "src": null,
            },
            "color": [
                { "value": "red", "url": null, "src": null },
                { "value": "blue", "url": null, "src": null },
                { "value": "green", "url": null, "src": null },
            ],
            "offers": {
                "price": { "value": "19.99", "url": null, "src": null },
                "priceCurrency": { "value": "USD", "url": null, "src": null },
                "seller": {
                    "name": { "value": "Example Shop", "url": null, "src": null },
                },
            },
        }])
    );
}

#[test]
fn test_full_page_table_rendering() {
    let mut session = MicroSchemaParser::new(ParserOptions::default());
    session.parse(helpers::sample_product_page());

    let html = session.render_table();

    assert!(html.starts_with(r#"<div id="jsSchemaParser" class="schema-parser__container">"#));
    assert!(html.contains(r#"<th colspan="2">Product Table #0</th>"#));
    // Leaf with href renders as a link, leaf with src as an image.
    assert!(html.contains(r#"<a href="https://shop.example/widget">Product page</a>"#));
    assert!(html.contains(r#"<img src="/img/widget.png" alt="A deluxe widget">"#));
    // Repeated properties render one row each under the shared key.
    assert_eq!(html.matches("<tr><td>color</td>").count(), 3);
    // Nested groups render as nested tables.
    assert!(html.contains(r#"<td class="td--nested">"#));
    assert!(html.contains("<tr><td>priceCurrency</td><td>USD</td></tr>"));
}

#[test]
fn test_full_page_json_rendering_round_trips() {
    let mut session = MicroSchemaParser::new(ParserOptions::default());
    session.parse(helpers::sample_product_page());
    let expected = session.parsed_data().to_vec();

    let html = session.render_json();
    let decoded: Vec<PropertyMap> =
        serde_json::from_str(&helpers::textarea_payload(&html)).expect("valid JSON payload");

    assert_eq!(decoded, expected);
}

#[test]
fn test_nested_offer_is_also_a_scan_root_for_its_own_schema() {
    // Scanning the same page for Offer instead of Product starts extraction
    // at the nested element, independently of the outer schema.
    let mut session = MicroSchemaParser::new(ParserOptions {
        schema_name: "Offer".to_string(),
        ..Default::default()
    });
    session.parse(helpers::sample_product_page());

    assert!(!session.is_error());
    let parsed = session.parsed_data();
    assert_eq!(parsed.len(), 1);
    // The scan root carries its own itemprop, so its children nest under it.
    let offers = match parsed[0].get("offers") {
        Some(PropertyValue::Group(group)) => group,
        other => panic!("expected group under offers, got {other:?}"),
    };
    assert!(offers.contains_key("price"));
    assert!(!parsed[0].contains_key("name"), "product data stays outside");
}
