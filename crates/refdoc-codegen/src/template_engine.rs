//! Template engine for Markdown generation using Handlebars.
//!
//! Wraps Handlebars with the page and index templates pre-registered.
//! Output is Markdown, so HTML escaping is turned off: documentation text is
//! copied into pages verbatim.
//!
//! # Examples
//!
//! ```
//! use refdoc_codegen::template_engine::{PAGE_TEMPLATE, TemplateEngine};
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let page = engine
//!     .render(PAGE_TEMPLATE, &json!({"name": "ora", "body": "a < b"}))
//!     .unwrap();
//! assert_eq!(page, "# `ora`\n\na < b\n\n");
//! ```

use handlebars::Handlebars;
use refdoc_core::{Error, Result};
use serde::Serialize;

/// Name of the per-symbol page template.
pub const PAGE_TEMPLATE: &str = "page";

/// Name of the index page template.
pub const INDEX_TEMPLATE: &str = "index";

/// Template engine for page generation.
///
/// `Send + Sync`, so one engine can serve parallel page rendering.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl TemplateEngine<'_> {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        let mut engine = Self { handlebars };
        engine.register_template_string(PAGE_TEMPLATE, include_str!("../templates/page.md.hbs"))?;
        engine.register_template_string(INDEX_TEMPLATE, include_str!("../templates/index.md.hbs"))?;

        Ok(engine)
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context lacks a variable the template uses
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                template: template_name.to_string(),
                message: format!("rendering failed: {e}"),
            })
    }

    /// Registers a template, replacing any existing one with the same name.
    ///
    /// This is how the built-in page or index layout is overridden.
    ///
    /// # Errors
    ///
    /// Returns error if the template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use refdoc_codegen::template_engine::{PAGE_TEMPLATE, TemplateEngine};
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine
    ///     .register_template_string(PAGE_TEMPLATE, "## {{name}}\n{{body}}\n")
    ///     .unwrap();
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                template: name.to_string(),
                message: format!("registration failed: {e}"),
            })
    }
}
