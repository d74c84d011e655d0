//! Project packaging for webforge.
//!
//! Assembles the generated entry and app files together with a fixed set of
//! scaffold files into a zip archive ready for download:
//! - `package.json` with framework dependencies
//! - `vite.config.ts` importing the framework plugin
//! - `tailwind.config.js` and `postcss.config.js`
//! - `index.html` mounting the entry file
//! - `src/index.css`, `src/main.<ext>` and `src/App.<ext>`
//!
//! The archive is built in one pass from the current component sequence.
//! Any failure surfaces as an [`ExportError`] and no archive is produced.

pub mod archive;
pub mod error;
pub mod manifest;
pub mod scaffold;

use webforge_codegen::{generator_for_tag, GeneratedFile, GeneratedProject};
use webforge_core::ComponentNode;
use zip::CompressionMethod;

pub use archive::{write_archive, ProjectArchive};
pub use error::ExportError;
pub use manifest::PackageManifest;
pub use scaffold::Scaffold;

/// Export options.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Package name in `package.json`.
    pub project_name: String,
    /// Package version in `package.json`.
    pub version: String,
    /// Document title in `index.html`.
    pub title: String,
    /// File name offered for the archive.
    pub archive_name: String,
    /// Compression used for every entry.
    pub compression: CompressionMethod,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            project_name: "web-builder-project".to_string(),
            version: "1.0.0".to_string(),
            title: "Web Builder Project".to_string(),
            archive_name: "web-builder-project.zip".to_string(),
            compression: CompressionMethod::Deflated,
        }
    }
}

impl ExportOptions {
    /// Options for a named project; the archive takes the same name.
    pub fn named(project_name: impl Into<String>) -> Self {
        let project_name = project_name.into();
        Self {
            archive_name: format!("{}.zip", project_name),
            project_name,
            ..Default::default()
        }
    }
}

/// Every file of the exported project, in archive order.
pub fn bill_of_materials(
    nodes: &[ComponentNode],
    framework_tag: &str,
    options: &ExportOptions,
) -> Result<GeneratedProject, ExportError> {
    let generator = generator_for_tag(framework_tag)
        .ok_or_else(|| ExportError::UnsupportedFramework(framework_tag.to_string()))?;
    let framework = generator.framework();
    tracing::debug!(%framework, "assembling project files");
    let scaffold = Scaffold::new()?;
    let sources = generator.generate_sources(nodes);

    let manifest = PackageManifest::new(&options.project_name, &options.version, framework);

    let mut project = GeneratedProject::default();
    project.push(GeneratedFile::scaffold("package.json", manifest.to_json()?));
    project.push(GeneratedFile::scaffold(
        "vite.config.ts",
        scaffold.vite_config(framework)?,
    ));
    project.push(GeneratedFile::scaffold(
        "tailwind.config.js",
        scaffold::TAILWIND_CONFIG,
    ));
    project.push(GeneratedFile::scaffold(
        "postcss.config.js",
        scaffold::POSTCSS_CONFIG,
    ));
    project.push(sources.entry);
    project.push(sources.app);
    project.push(GeneratedFile::scaffold(
        "index.html",
        scaffold.index_html(generator.as_ref(), &options.title)?,
    ));
    project.push(GeneratedFile::scaffold("src/index.css", scaffold::INDEX_CSS));

    Ok(project)
}

/// Generate and zip the project for `framework_tag`.
pub fn package_project(
    nodes: &[ComponentNode],
    framework_tag: &str,
    options: &ExportOptions,
) -> Result<ProjectArchive, ExportError> {
    let project = bill_of_materials(nodes, framework_tag, options)?;
    let bytes = write_archive(&project, options.compression)?;

    tracing::info!(
        framework = framework_tag,
        files = project.files.len(),
        bytes = bytes.len(),
        "packaged project"
    );

    Ok(ProjectArchive {
        file_name: options.archive_name.clone(),
        bytes,
    })
}
