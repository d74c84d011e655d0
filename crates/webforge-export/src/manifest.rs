//! `package.json` for exported projects.
//!
//! Every version string is a fixed literal; nothing is resolved against a
//! registry.

use indexmap::IndexMap;
use serde::Serialize;
use webforge_core::Framework;

/// Build tool invoked by the npm scripts.
pub const BUILD_TOOL: &str = "vite";

/// The npm package manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub private: bool,
    pub version: String,
    #[serde(rename = "type")]
    pub module_type: String,
    pub scripts: IndexMap<String, String>,
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    pub fn new(name: &str, version: &str, framework: Framework) -> Self {
        Self {
            name: name.to_string(),
            private: true,
            version: version.to_string(),
            module_type: "module".to_string(),
            scripts: owned([
                ("dev", BUILD_TOOL.to_string()),
                ("build", format!("{} build", BUILD_TOOL)),
                ("preview", format!("{} preview", BUILD_TOOL)),
            ]),
            dependencies: owned(framework_dependencies(framework).iter().copied()),
            dev_dependencies: owned(DEV_DEPENDENCIES.iter().copied()),
        }
    }

    /// Two-space indented JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("vite", "^4.4.9"),
    ("typescript", "^5.0.2"),
    ("tailwindcss", "^3.3.3"),
    ("autoprefixer", "^10.4.15"),
    ("postcss", "^8.4.29"),
];

/// Framework runtime plus its build plugin.
pub fn framework_dependencies(framework: Framework) -> &'static [(&'static str, &'static str)] {
    match framework {
        Framework::React => &[
            ("react", "^18.2.0"),
            ("react-dom", "^18.2.0"),
            ("@types/react", "^18.2.0"),
            ("@types/react-dom", "^18.2.0"),
            ("@vitejs/plugin-react", "^4.0.3"),
        ],
        Framework::Vue => &[("vue", "^3.3.0"), ("@vitejs/plugin-vue", "^4.3.0")],
        Framework::Svelte => &[
            ("svelte", "^4.0.0"),
            ("@sveltejs/vite-plugin-svelte", "^2.4.0"),
        ],
    }
}

fn owned<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> IndexMap<String, String>
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
