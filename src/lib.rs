//! micro_schema_parser: microdata extraction from annotated HTML
//!
//! This library scans an HTML document for elements whose `itemtype` ends
//! with a configured schema name, recursively extracts their nested
//! `itemprop` annotations into ordered key-value mappings, and renders the
//! result as an HTML table or a JSON view.
//!
//! # Example
//!
//! ```
//! use micro_schema_parser::{MicroSchemaParser, ParserOptions};
//!
//! let html = r#"<div itemscope itemtype="https://schema.org/Product">
//!     <span itemprop="name">Widget</span>
//!     <meta itemprop="price" content="9.99">
//! </div>"#;
//!
//! let mut parser = MicroSchemaParser::new(ParserOptions::default());
//! parser.parse(html);
//! assert!(parser.has_data());
//!
//! let table = parser.render_table();
//! assert!(table.contains("Product Table #0"));
//! ```
//!
//! Parsing never returns an error: failures (no matching schema roots, a
//! blank document, matches without any extracted data) are captured in the
//! session and rendered as an error display instead of data.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod extract;
pub mod initialization;
mod parser;
mod render;

// Re-export public API
pub use config::{LogLevel, OutputFormat, ParserOptions};
pub use error_handling::{InitializationError, ParseError};
pub use extract::{
    extract_item_tree, resolve_leaf_value, ExtractedValue, PropertyMap, PropertyValue,
};
pub use parser::MicroSchemaParser;
pub use render::{render_value, Container};
