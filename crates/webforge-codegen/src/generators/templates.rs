//! Template engine for scaffold and document text.

use crate::error::{CodegenError, Result};
use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde::Serialize;

/// Handlebars configured for source text.
///
/// Output is source code, not HTML, so values are never escaped. Templates
/// run in strict mode: a missing variable is an error rather than blank text.
pub struct TemplateEngine<'a> {
    registry: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);
        registry.register_helper("indent", Box::new(indent_helper));
        Self { registry }
    }

    /// Parse and register `template` under `name`.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.registry
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }

    /// Render a registered template, failing if `name` was never registered.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        if !self.has_template(name) {
            return Err(CodegenError::TemplateNotFound(name.to_string()));
        }
        Ok(self.registry.render(name, data)?)
    }

    /// Render an unregistered template string.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        Ok(self.registry.render_template(template, data)?)
    }
}

impl Default for TemplateEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// `{{indent text N}}`: prefix every non-blank line of `text` with N spaces.
fn indent_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let text = h.param(0).and_then(|p| p.value().as_str()).unwrap_or_default();
    let width = h.param(1).and_then(|p| p.value().as_u64()).unwrap_or(2);
    out.write(&indent_lines(text, width as usize))?;
    Ok(())
}

fn indent_lines(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if !line.trim().is_empty() {
            out.push_str(&pad);
        }
        out.push_str(line);
    }
    out
}
