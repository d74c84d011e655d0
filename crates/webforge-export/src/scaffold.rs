//! Static and lightly templated scaffold files.

use serde::Serialize;
use webforge_codegen::{CodeGenerator, Result, TemplateEngine};
use webforge_core::Framework;

const VITE_CONFIG: &str = "
import { defineConfig } from 'vite'
{{plugin_import}}

export default defineConfig({
  plugins: [{{plugin_call}}],
})";

const INDEX_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{title}}</title>
  </head>
  <body>
    <div id="{{mount_id}}"></div>
    <script type="module" src="/{{entry_path}}"></script>
  </body>
</html>"#;

pub const TAILWIND_CONFIG: &str = r#"
/** @type {import('tailwindcss').Config} */
export default {
  content: [
    "./index.html",
    "./src/**/*.{js,ts,jsx,tsx,vue,svelte}",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}"#;

pub const POSTCSS_CONFIG: &str = "
export default {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}";

pub const INDEX_CSS: &str = "
@tailwind base;
@tailwind components;
@tailwind utilities;

:root {
  font-family: Inter, system-ui, Avenir, Helvetica, Arial, sans-serif;
  line-height: 1.5;
  font-weight: 400;
}

body {
  margin: 0;
  min-width: 320px;
  min-height: 100vh;
}";

/// Import line for the framework's vite plugin.
pub fn plugin_import(framework: Framework) -> &'static str {
    match framework {
        Framework::React => "import react from '@vitejs/plugin-react'",
        Framework::Vue => "import vue from '@vitejs/plugin-vue'",
        Framework::Svelte => "import { svelte } from '@sveltejs/vite-plugin-svelte'",
    }
}

#[derive(Serialize)]
struct ViteData<'a> {
    plugin_import: &'a str,
    plugin_call: String,
}

#[derive(Serialize)]
struct IndexData<'a> {
    title: &'a str,
    mount_id: &'a str,
    entry_path: String,
}

/// Renders the templated scaffold files.
pub struct Scaffold<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> Scaffold<'a> {
    pub fn new() -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template("vite_config", VITE_CONFIG)?;
        engine.register_template("index_html", INDEX_HTML)?;
        Ok(Self { engine })
    }

    /// `vite.config.ts`: only the plugin differs between frameworks.
    pub fn vite_config(&self, framework: Framework) -> Result<String> {
        self.engine.render(
            "vite_config",
            &ViteData {
                plugin_import: plugin_import(framework),
                plugin_call: format!("{}()", framework.as_str()),
            },
        )
    }

    /// `index.html` mounting the generator's entry file.
    pub fn index_html(&self, generator: &dyn CodeGenerator, title: &str) -> Result<String> {
        self.engine.render(
            "index_html",
            &IndexData {
                title,
                mount_id: generator.mount_id(),
                entry_path: generator.entry_path(),
            },
        )
    }
}
