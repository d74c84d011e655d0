//! Code generators for the supported output frameworks.

#[cfg(feature = "react")]
mod react;
#[cfg(feature = "svelte")]
mod svelte;
#[cfg(feature = "vue")]
mod vue;

mod templates;

#[cfg(feature = "react")]
pub use react::ReactGenerator;
#[cfg(feature = "svelte")]
pub use svelte::SvelteGenerator;
#[cfg(feature = "vue")]
pub use vue::VueGenerator;

pub use templates::TemplateEngine;

use crate::fragments::export_root;
use crate::markup::{Dialect, Printer};
use webforge_core::{ComponentNode, Framework};

/// Common trait for framework generators.
pub trait CodeGenerator {
    /// Target framework.
    fn framework(&self) -> Framework;

    /// Markup dialect used in the app file.
    fn dialect(&self) -> Dialect;

    /// Extension of the app component file.
    fn app_extension(&self) -> &'static str;

    /// Extension of the entry file. Same as the app file unless overridden.
    fn entry_extension(&self) -> &'static str {
        self.app_extension()
    }

    /// Id of the DOM node the app mounts into.
    fn mount_id(&self) -> &'static str {
        "app"
    }

    fn entry_path(&self) -> String {
        format!("src/main.{}", self.entry_extension())
    }

    fn app_path(&self) -> String {
        format!("src/App.{}", self.app_extension())
    }

    /// Generate the entry file that mounts the app.
    fn generate_entry(&self) -> String;

    /// Generate the root app component for `nodes`.
    fn generate_app(&self, nodes: &[ComponentNode]) -> String;

    /// Entry and app files at their conventional paths.
    fn generate_sources(&self, nodes: &[ComponentNode]) -> GeneratedSources {
        GeneratedSources {
            entry: GeneratedFile::source(self.entry_path(), self.generate_entry()),
            app: GeneratedFile::source(self.app_path(), self.generate_app(nodes)),
        }
    }
}

/// The generator for a framework.
pub fn generator_for(framework: Framework) -> Option<Box<dyn CodeGenerator>> {
    match framework {
        #[cfg(feature = "react")]
        Framework::React => Some(Box::new(ReactGenerator::new())),
        #[cfg(feature = "vue")]
        Framework::Vue => Some(Box::new(VueGenerator::new())),
        #[cfg(feature = "svelte")]
        Framework::Svelte => Some(Box::new(SvelteGenerator::new())),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

/// The generator for a stored framework tag, `None` when unrecognized.
pub fn generator_for_tag(tag: &str) -> Option<Box<dyn CodeGenerator>> {
    Framework::parse(tag).and_then(generator_for)
}

/// Entry and app files for `tag`.
///
/// Never fails: an unrecognized tag yields files with empty paths and text.
pub fn generate(nodes: &[ComponentNode], tag: &str) -> GeneratedSources {
    generator_for_tag(tag)
        .map(|g| g.generate_sources(nodes))
        .unwrap_or_default()
}

/// App file text for `tag`. Unrecognized tags produce empty text.
pub fn generate_app_code(nodes: &[ComponentNode], tag: &str) -> String {
    generator_for_tag(tag)
        .map(|g| g.generate_app(nodes))
        .unwrap_or_default()
}

/// Entry file text for `tag`. Unrecognized tags produce empty text.
pub fn generate_entry_code(tag: &str) -> String {
    generator_for_tag(tag)
        .map(|g| g.generate_entry())
        .unwrap_or_default()
}

/// Render the root wrapper and its fragments as a block at `indent`.
pub(crate) fn app_body(dialect: Dialect, nodes: &[ComponentNode], indent: usize) -> String {
    Printer::new(dialect).print_block(&export_root(nodes), indent)
}

/// Generated entry and app files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedSources {
    pub entry: GeneratedFile,
    pub app: GeneratedFile,
}

/// Generated project output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedProject {
    /// Files in archive order.
    pub files: Vec<GeneratedFile>,
}

impl GeneratedProject {
    pub fn push(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    pub fn get(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path)
    }

    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.path.as_str()).collect()
    }
}

/// A generated file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedFile {
    /// File path relative to project root.
    pub path: String,
    /// File content.
    pub content: String,
    /// Whether this is a static scaffold file rather than generated source.
    pub is_scaffold: bool,
}

impl GeneratedFile {
    pub fn source(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            is_scaffold: false,
        }
    }

    pub fn scaffold(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            is_scaffold: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webforge_core::NodeType;

    #[test]
    fn test_paths_per_framework() {
        let paths: Vec<(String, String)> = Framework::ALL
            .into_iter()
            .filter_map(generator_for)
            .map(|g| (g.entry_path(), g.app_path()))
            .collect();
        assert_eq!(
            paths,
            [
                ("src/main.tsx".to_string(), "src/App.tsx".to_string()),
                ("src/main.ts".to_string(), "src/App.vue".to_string()),
                ("src/main.svelte".to_string(), "src/App.svelte".to_string()),
            ]
        );
    }

    #[test]
    fn test_generators_report_their_framework() {
        for framework in Framework::ALL {
            let generator = generator_for(framework).unwrap();
            assert_eq!(generator.framework(), framework);
            let by_tag = generator_for_tag(framework.as_str()).unwrap();
            assert_eq!(by_tag.framework(), framework);
        }
    }

    #[test]
    fn test_mount_ids() {
        let ids: Vec<&str> = Framework::ALL
            .into_iter()
            .filter_map(generator_for)
            .map(|g| g.mount_id())
            .collect();
        assert_eq!(ids, ["root", "app", "app"]);
    }

    #[test]
    fn test_unknown_framework_yields_empty_text() {
        let nodes = vec![ComponentNode::new("h", NodeType::Heading)];
        assert_eq!(generate_app_code(&nodes, "angular"), "");
        assert_eq!(generate_entry_code("angular"), "");
        assert!(generator_for_tag("angular").is_none());
        assert_eq!(generate(&nodes, "angular"), GeneratedSources::default());
    }

    #[test]
    fn test_generate_svelte_sources() {
        let sources = generate(&[ComponentNode::new("p", NodeType::Paragraph)], "svelte");
        assert_eq!(sources.entry.path, "src/main.svelte");
        assert_eq!(sources.app.path, "src/App.svelte");
        assert!(sources.entry.content.contains("target: document.getElementById('app')"));
        assert!(sources.app.content.contains(r#"<p class="mb-4">Paragraph text</p>"#));
        assert!(!sources.app.is_scaffold);
    }

    #[test]
    fn test_image_only_body_is_empty() {
        let nodes = vec![ComponentNode::new("i", NodeType::Image)];
        for framework in Framework::ALL {
            let Some(generator) = generator_for(framework) else {
                continue;
            };
            let app = generator.generate_app(&nodes);
            let body = body_between_root_tags(&app);
            assert!(body.trim().is_empty(), "{framework}: {body:?}");
        }
    }

    #[test]
    fn test_fragments_keep_sequence_order() {
        let nodes = vec![
            ComponentNode::new("b", NodeType::Button).with_text("Second"),
            ComponentNode::new("h", NodeType::Heading).with_text("First"),
        ];
        let app = generate_app_code(&nodes, "vue");
        let second = app.find("Second").unwrap();
        let first = app.find("First").unwrap();
        assert!(second < first);
    }

    fn body_between_root_tags(app: &str) -> &str {
        let start = app.find("p-8\">").map(|i| i + "p-8\">".len()).unwrap();
        let end = app.rfind("</div>").unwrap();
        &app[start..end]
    }
}
