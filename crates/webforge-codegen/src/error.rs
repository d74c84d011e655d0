//! Codegen errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodegenError>;

/// Failures of the template layer.
///
/// Markup generation itself is infallible; only rendering scaffold and
/// preview documents through handlebars can fail.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Failed to render template: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    #[error("No template registered under '{0}'")]
    TemplateNotFound(String),

    #[error("Template does not parse: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),
}
