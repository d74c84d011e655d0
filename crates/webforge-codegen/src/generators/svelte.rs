//! Svelte component generator.

use super::{app_body, CodeGenerator};
use crate::markup::Dialect;
use webforge_core::{ComponentNode, Framework};

/// Svelte code generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvelteGenerator;

impl SvelteGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for SvelteGenerator {
    fn framework(&self) -> Framework {
        Framework::Svelte
    }

    fn dialect(&self) -> Dialect {
        Dialect::Html
    }

    fn app_extension(&self) -> &'static str {
        "svelte"
    }

    fn generate_entry(&self) -> String {
        let mut lines = Vec::new();

        lines.push(String::new());
        lines.push(format!("import App from './App.{}'", self.app_extension()));
        lines.push("import './index.css'".to_string());
        lines.push(String::new());
        lines.push("const app = new App({".to_string());
        lines.push(format!(
            "  target: document.getElementById('{}'),",
            self.mount_id()
        ));
        lines.push("})".to_string());
        lines.push(String::new());
        lines.push("export default app".to_string());

        lines.join("\n")
    }

    fn generate_app(&self, nodes: &[ComponentNode]) -> String {
        let mut lines = Vec::new();

        lines.push(String::new());
        lines.push(app_body(self.dialect(), nodes, 0));
        lines.push(String::new());
        lines.push("<script lang=\"ts\">".to_string());
        lines.push("  // Component logic here".to_string());
        lines.push("</script>".to_string());

        lines.join("\n")
    }
}
