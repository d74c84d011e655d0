//! React code generator (TypeScript + JSX).

use super::{app_body, CodeGenerator};
use crate::markup::Dialect;
use webforge_core::{ComponentNode, Framework};

/// React code generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactGenerator;

impl ReactGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for ReactGenerator {
    fn framework(&self) -> Framework {
        Framework::React
    }

    fn dialect(&self) -> Dialect {
        Dialect::Jsx
    }

    fn app_extension(&self) -> &'static str {
        "tsx"
    }

    fn mount_id(&self) -> &'static str {
        "root"
    }

    fn generate_entry(&self) -> String {
        let mut lines = Vec::new();

        lines.push(String::new());
        lines.push("import React from 'react'".to_string());
        lines.push("import ReactDOM from 'react-dom/client'".to_string());
        lines.push("import App from './App'".to_string());
        lines.push("import './index.css'".to_string());
        lines.push(String::new());
        lines.push(format!(
            "ReactDOM.createRoot(document.getElementById('{}')!).render(",
            self.mount_id()
        ));
        lines.push("  <React.StrictMode>".to_string());
        lines.push("    <App />".to_string());
        lines.push("  </React.StrictMode>,".to_string());
        lines.push(")".to_string());

        lines.join("\n")
    }

    fn generate_app(&self, nodes: &[ComponentNode]) -> String {
        let mut lines = Vec::new();

        lines.push(String::new());
        lines.push("import React from 'react'".to_string());
        lines.push(String::new());
        lines.push("export default function App() {".to_string());
        lines.push("  return (".to_string());
        lines.push(app_body(self.dialect(), nodes, 4));
        lines.push("  )".to_string());
        lines.push("}".to_string());

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webforge_core::NodeType;

    #[test]
    fn test_heading_without_props() {
        let gen = ReactGenerator::new();
        let app = gen.generate_app(&[ComponentNode::new("heading-1", NodeType::Heading)]);
        assert!(app.contains(
            "\n      <h1 className=\"text-2xl font-bold mb-4\">Heading</h1>\n"
        ));
    }

    #[test]
    fn test_generate_app() {
        let gen = ReactGenerator::new();
        let nodes = vec![
            ComponentNode::new("h", NodeType::Heading).with_text("Welcome"),
            ComponentNode::new("p", NodeType::Paragraph),
        ];
        let app = gen.generate_app(&nodes);
        assert!(app.starts_with('\n'));
        insta::assert_snapshot!(app.trim_start(), @r###"
        import React from 'react'

        export default function App() {
          return (
            <div className="min-h-screen bg-gray-50 p-8">
              <h1 className="text-2xl font-bold mb-4">Welcome</h1>
              <p className="mb-4">Paragraph text</p>
            </div>
          )
        }
        "###);
    }

    #[test]
    fn test_generate_entry() {
        let entry = ReactGenerator::new().generate_entry();
        assert!(entry.starts_with("\nimport React from 'react'"));
        assert!(entry.contains("document.getElementById('root')!"));
        assert!(entry.contains("<App />"));
    }
}
