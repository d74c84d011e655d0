//! Code generation and preview rendering for webforge component trees.
//!
//! This crate turns a component sequence into framework source text for
//! React, Vue and Svelte, and into preview HTML for the editor canvas.
//!
//! # Features
//!
//! - `react` - Generate React/TypeScript code
//! - `vue` - Generate Vue single-file components
//! - `svelte` - Generate Svelte components
//!
//! # Example
//!
//! ```ignore
//! use webforge_codegen::{generator_for, CodeGenerator};
//! use webforge_core::Framework;
//!
//! let generator = generator_for(Framework::Vue).unwrap();
//! let sources = generator.generate_sources(store.components());
//! println!("{}", sources.app.content);
//! ```

pub mod error;
pub mod fragments;
pub mod generators;
pub mod markup;
pub mod preview;

pub use error::{CodegenError, Result};
pub use fragments::{export_fragment, export_root};
pub use generators::{
    generate, generate_app_code, generate_entry_code, generator_for, generator_for_tag,
    CodeGenerator, GeneratedFile, GeneratedProject, GeneratedSources, TemplateEngine,
};
pub use markup::{Attr, Dialect, Element, Markup, Printer};
pub use preview::{preview_document, render_preview, render_preview_body, PreviewTheme};

// Re-export framework-specific generators
#[cfg(feature = "react")]
pub use generators::ReactGenerator;

#[cfg(feature = "svelte")]
pub use generators::SvelteGenerator;

#[cfg(feature = "vue")]
pub use generators::VueGenerator;
