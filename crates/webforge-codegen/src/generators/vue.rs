//! Vue 3 single-file component generator.

use super::{app_body, CodeGenerator};
use crate::markup::Dialect;
use webforge_core::{ComponentNode, Framework};

/// Vue code generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct VueGenerator;

impl VueGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for VueGenerator {
    fn framework(&self) -> Framework {
        Framework::Vue
    }

    fn dialect(&self) -> Dialect {
        Dialect::Html
    }

    fn app_extension(&self) -> &'static str {
        "vue"
    }

    // The entry is a plain script even though the app is a .vue component.
    fn entry_extension(&self) -> &'static str {
        "ts"
    }

    fn generate_entry(&self) -> String {
        let mut lines = Vec::new();

        lines.push(String::new());
        lines.push("import { createApp } from 'vue'".to_string());
        lines.push(format!("import App from './App.{}'", self.app_extension()));
        lines.push("import './index.css'".to_string());
        lines.push(String::new());
        lines.push(format!("createApp(App).mount('#{}')", self.mount_id()));

        lines.join("\n")
    }

    fn generate_app(&self, nodes: &[ComponentNode]) -> String {
        let mut lines = Vec::new();

        lines.push(String::new());
        lines.push("<template>".to_string());
        lines.push(app_body(self.dialect(), nodes, 2));
        lines.push("</template>".to_string());
        lines.push(String::new());
        lines.push("<script setup lang=\"ts\">".to_string());
        lines.push("// Component logic here".to_string());
        lines.push("</script>".to_string());

        lines.join("\n")
    }
}
