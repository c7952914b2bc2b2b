// Shared test helpers for building sample documents and decoding rendered
// output.

/// A realistic product page: nested groups, repeated properties, links,
/// images, and unannotated wrapper elements.
#[allow(dead_code)] // Used by other test files
pub fn sample_product_page() -> &'static str {
    r#"<html><body>
        <div itemscope itemtype="https://schema.org/Product">
            <div class="header">
                <h1 itemprop="name">Deluxe Widget</h1>
            </div>
            <img itemprop="image" src="/img/widget.png" alt="A deluxe widget">
            <a itemprop="url" href="https://shop.example/widget">Product page</a>
            <span itemprop="color">red</span>
            <span itemprop="color">blue</span>
            <span itemprop="color">green</span>
            <div itemprop="offers" itemscope itemtype="https://schema.org/Offer">
                <meta itemprop="price" content="19.99">
                <span itemprop="priceCurrency">USD</span>
                <div itemprop="seller">
                    <span itemprop="name">Example Shop</span>
                </div>
            </div>
        </div>
    </body></html>"#
}

/// Extracts and unescapes the JSON payload from a rendered textarea.
#[allow(dead_code)] // Used by other test files
pub fn textarea_payload(html: &str) -> String {
    let open = html.find("__textarea\">").expect("textarea present") + "__textarea\">".len();
    let close = html.find("</textarea>").expect("textarea closed");
    html[open..close]
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
