//! The coordinating parser session.
//!
//! [`MicroSchemaParser`] owns the source document, the parsed result set,
//! the parse state, and the single output container. Parsing never returns
//! an error to the caller: failures are captured in the session state,
//! logged, and surfaced by the rendering calls as an error display.

use log::{debug, error};
use scraper::{Html, Selector};

use crate::config::ParserOptions;
use crate::error_handling::ParseError;
use crate::extract::{extract_item_tree, PropertyMap};
use crate::render::{self, Container};

/// Parse state of a session: fresh, successfully parsed, or failed.
#[derive(Debug, Clone)]
enum ParseState {
    Unparsed,
    Parsed,
    Failed(ParseError),
}

/// A microdata parsing session for one document.
///
/// Holds the configured schema name, the loaded source, the ordered result
/// set (one [`PropertyMap`] per schema-root element in document order), and
/// the owned output container. Parsing and rendering are synchronous; the
/// exclusive borrows serialize them by construction.
#[derive(Debug)]
pub struct MicroSchemaParser {
    options: ParserOptions,
    source: Option<String>,
    parsed_data: Vec<PropertyMap>,
    state: ParseState,
    container: Option<Container>,
}

impl MicroSchemaParser {
    /// Creates a fresh, unparsed session.
    pub fn new(options: ParserOptions) -> Self {
        MicroSchemaParser {
            options,
            source: None,
            parsed_data: Vec::new(),
            state: ParseState::Unparsed,
            container: None,
        }
    }

    /// The options this session was created with.
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Stores `html` as the session's source document without parsing it.
    ///
    /// The next rendering call triggers the parse implicitly; call
    /// [`parse`](Self::parse) to do both at once.
    pub fn load_document(&mut self, html: &str) {
        self.source = Some(html.to_string());
        self.state = ParseState::Unparsed;
        self.parsed_data.clear();
    }

    /// Loads `html` and scans it for elements whose `itemtype` ends with the
    /// configured schema name.
    ///
    /// Always rebuilds the result set from scratch. Failures are captured in
    /// the session state and logged, never returned; inspect
    /// [`error`](Self::error) or render to see them.
    pub fn parse(&mut self, html: &str) {
        self.source = Some(html.to_string());
        self.reparse();
    }

    /// Re-runs the scan against the stored source document.
    pub fn reparse(&mut self) {
        self.parsed_data.clear();

        match self.scan() {
            Ok(parsed) => {
                debug!(
                    "parsed {} schema root(s) for {}",
                    parsed.len(),
                    self.options.schema_name
                );
                self.parsed_data = parsed;
                self.state = ParseState::Parsed;
            }
            Err(err) => {
                error!("Error at parsing the page schema html: {err}");
                self.state = ParseState::Failed(err);
            }
        }
    }

    /// True when the session holds parsed data ready to render.
    pub fn has_data(&self) -> bool {
        !self.parsed_data.is_empty()
    }

    /// True when the last parse failed.
    pub fn is_error(&self) -> bool {
        matches!(self.state, ParseState::Failed(_))
    }

    /// The captured error from the last parse, if any.
    pub fn error(&self) -> Option<&ParseError> {
        match &self.state {
            ParseState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// The parsed result set: one mapping per schema root, in document order.
    pub fn parsed_data(&self) -> &[PropertyMap] {
        &self.parsed_data
    }

    /// Renders the parsed data as one HTML table per schema root into the
    /// container and returns the container HTML.
    ///
    /// An unparsed session parses the stored source first; a failed session
    /// renders the error display instead.
    pub fn render_table(&mut self) -> String {
        if matches!(self.state, ParseState::Unparsed) {
            self.reparse();
        }
        if let ParseState::Failed(err) = &self.state {
            let message = err.to_string();
            return self.render_error(Some(&message));
        }

        let tables: Vec<String> = self
            .parsed_data
            .iter()
            .enumerate()
            .map(|(index, schema)| {
                render::schema_table(
                    schema,
                    &self.options.schema_name,
                    &self.options.class_namespace,
                    index,
                )
            })
            .collect();

        let container = self.container_mut();
        container.clear();
        for table in tables {
            container.append(table);
        }
        container.to_html()
    }

    /// Renders the parsed data as a JSON textarea into the container and
    /// returns the container HTML.
    ///
    /// Same implicit-parse and error short-circuit rules as
    /// [`render_table`](Self::render_table).
    pub fn render_json(&mut self) -> String {
        if matches!(self.state, ParseState::Unparsed) {
            self.reparse();
        }
        if let ParseState::Failed(err) = &self.state {
            let message = err.to_string();
            return self.render_error(Some(&message));
        }

        let textarea = render::json_textarea(&self.parsed_data, &self.options.class_namespace);

        let container = self.container_mut();
        container.clear();
        container.append(textarea);
        container.to_html()
    }

    /// Renders an error display into the container and returns the container
    /// HTML. With no explicit `message` the session's captured error is
    /// shown.
    pub fn render_error(&mut self, message: Option<&str>) -> String {
        let message = match (message, &self.state) {
            (Some(message), _) => message.to_string(),
            (None, ParseState::Failed(err)) => err.to_string(),
            (None, _) => String::from("unknown error"),
        };

        let span = render::error_span(&message, &self.options.class_namespace);

        let container = self.container_mut();
        container.clear();
        container.append(span);
        container.to_html()
    }

    /// Empties the output container.
    pub fn clear_container(&mut self) {
        self.container_mut().clear();
    }

    /// The current container HTML (empty container when nothing has been
    /// rendered yet).
    pub fn container_html(&mut self) -> String {
        self.container_mut().to_html()
    }

    /// Returns the owned container, creating it on first use.
    fn container_mut(&mut self) -> &mut Container {
        self.container.get_or_insert_with(|| {
            Container::new(&self.options.container_id, &self.options.class_namespace)
        })
    }

    /// Runs one scan over the stored source document.
    fn scan(&self) -> Result<Vec<PropertyMap>, ParseError> {
        let source = self.source.as_deref().unwrap_or("");
        if source.trim().is_empty() {
            return Err(ParseError::InvalidRoot);
        }

        let document = Html::parse_document(source);
        let selector = self.schema_selector()?;

        let mut parsed = Vec::new();
        for root in document.select(&selector) {
            let mut schema = PropertyMap::new();
            extract_item_tree(root, &mut schema);
            parsed.push(schema);
        }

        if parsed.is_empty() {
            return Err(ParseError::SchemaNotFound {
                schema: self.options.schema_name.clone(),
            });
        }
        if parsed.iter().all(PropertyMap::is_empty) {
            return Err(ParseError::EmptyResult);
        }

        Ok(parsed)
    }

    /// Builds the schema-root selector: `itemtype` values ending with the
    /// configured schema name, so namespaced vocabulary URIs match.
    fn schema_selector(&self) -> Result<Selector, ParseError> {
        let selector = format!(r#"[itemtype$="{}"]"#, self.options.schema_name);
        Selector::parse(&selector).map_err(|err| {
            error!("Invalid schema selector {selector}: {err}");
            ParseError::SchemaNotFound {
                schema: self.options.schema_name.clone(),
            }
        })
    }
}
