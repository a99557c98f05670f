//! Template renderers for coolme.
//!
//! File-based templates use [`PlaceholderRenderer`]: plain `{name}` tokens looked up
//! in the bindings, nothing evaluated. The in-code lens model template is rendered
//! with [`MiniJinjaRenderer`].
use crate::error::{Error, Result};
use indexmap::IndexMap;
use minijinja::{Environment, UndefinedBehavior};
use regex::Regex;
use std::sync::LazyLock;

/// Placeholder name to substitution value.
pub type Bindings = IndexMap<String, String>;

/// `{{` and `}}` are brace escapes, `{identifier}` is a placeholder.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given bindings.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `bindings` - Values for the template's placeholders
    ///
    /// # Returns
    /// * `Result<String>` - Fully rendered text; never a partial result
    fn render(&self, template: &str, bindings: &Bindings) -> Result<String>;
}

/// Substitutes `{name}` tokens with `bindings[name]`.
///
/// Values are inserted verbatim and never rescanned, so a value that itself looks
/// like a placeholder stays literal. Unused bindings are ignored. Braces that do not
/// form a token are copied through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    /// # Errors
    /// * `Error::MissingBinding` for the first placeholder without a value
    fn render(&self, template: &str, bindings: &Bindings) -> Result<String> {
        let mut rendered = String::with_capacity(template.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(template) {
            let Some(token) = caps.get(0) else { continue };
            rendered.push_str(&template[last..token.start()]);

            match caps.get(1) {
                Some(name) => {
                    let value = bindings.get(name.as_str()).ok_or_else(|| {
                        Error::MissingBinding { name: name.as_str().to_string() }
                    })?;
                    rendered.push_str(value);
                }
                // Escaped brace: keep one of the pair.
                None => rendered.push_str(&token.as_str()[..1]),
            }
            last = token.end();
        }

        rendered.push_str(&template[last..]);
        Ok(rendered)
    }
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer that rejects undefined variables.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::MinijinjaError` on syntax errors or undefined variables
    fn render(&self, template: &str, bindings: &Bindings) -> Result<String> {
        self.env.render_str(template, bindings).map_err(Error::MinijinjaError)
    }
}
