//! webforge command-line host
//!
//! Drives the component tree store from the shell. The tree lives in a JSON
//! file that plays the part of browser local storage; every command opens it,
//! applies one operation and exits.
//!
//! ## Usage
//!
//! ```bash
//! webforge add heading
//! webforge update heading-1718000000000 '{"props":{"text":"Welcome"}}'
//! webforge framework vue
//! webforge generate
//! webforge preview --dark --out preview.html
//! webforge export --out dist/
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use webforge_codegen::{generate_app_code, generate_entry_code, preview_document, PreviewTheme};
use webforge_core::{
    palette, FileStorage, Framework, NodeId, NodeType, NodeUpdate, Storage, Store,
    DEFAULT_STORAGE_FILE,
};
use webforge_export::{package_project, ExportOptions};

const EXPORT_FAILED: &str = "Failed to export project. Please try again.";

#[derive(Parser)]
#[command(name = "webforge")]
#[command(about = "Build pages from components and export them as projects", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// File holding the persisted component tree
    #[arg(long, global = true, env = "WEBFORGE_STORAGE", default_value = DEFAULT_STORAGE_FILE)]
    storage: PathBuf,

    /// Verbosity level (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the component types that can be added
    Palette,

    /// Print the component tree as JSON
    Show,

    /// Append a new component with default props
    Add {
        /// Component type (heading, paragraph, button, image, list, input, container, grid)
        #[arg(value_name = "TYPE")]
        node_type: NodeType,
    },

    /// Merge a partial JSON object over a component
    Update {
        #[arg(value_name = "ID")]
        id: String,

        /// e.g. '{"props":{"text":"Hello"}}'
        #[arg(value_name = "JSON")]
        changes: String,
    },

    /// Remove a component by id
    Remove {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Move the component at FROM to position TO
    Move {
        from: usize,
        to: usize,
    },

    /// Show a component as the selected one, or clear the selection when no id is given
    ///
    /// Selection is editor highlighting only and is never saved, so it lasts
    /// for this invocation alone.
    Select {
        #[arg(value_name = "ID")]
        id: Option<String>,
    },

    /// Set the target framework (react, vue, svelte)
    Framework {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Replace the whole tree with JSON read from a file, or stdin for `-`
    Edit {
        #[arg(value_name = "FILE")]
        source: String,
    },

    /// Print the generated app component
    Generate {
        /// Override the stored framework
        #[arg(short, long)]
        framework: Option<String>,

        /// Print the entry file instead of the app component
        #[arg(long)]
        entry: bool,
    },

    /// Render the tree as a standalone HTML preview
    Preview {
        /// Use the dark theme
        #[arg(long)]
        dark: bool,

        /// Write to a file instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Package the project as a zip archive
    Export {
        /// Directory to write the archive to
        #[arg(long, value_name = "DIR", default_value = ".")]
        out: PathBuf,

        /// Project and archive name
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let mut store = Store::open(FileStorage::new(&cli.storage));
    let stdout = io::stdout();
    let result = execute(cli.command, &mut store, &mut stdout.lock());

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn execute<S: Storage>(
    command: Commands,
    store: &mut Store<S>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Commands::Palette => {
            for entry in palette() {
                writeln!(out, "{:<10} {}", entry.node_type.as_str(), entry.label)?;
            }
        }
        Commands::Show => {
            writeln!(out, "{}", store.code_text()?)?;
        }
        Commands::Add { node_type } => {
            let id = store.add_from_palette(node_type);
            writeln!(out, "{}", id)?;
        }
        Commands::Update { id, changes } => {
            let update: NodeUpdate =
                serde_json::from_str(&changes).context("update must be a JSON object")?;
            if !store.update_component(&NodeId::from(id.as_str()), update) {
                bail!("no component with id '{}'", id);
            }
        }
        Commands::Remove { id } => {
            if !store.remove_component(&NodeId::from(id.as_str())) {
                bail!("no component with id '{}'", id);
            }
        }
        Commands::Move { from, to } => {
            store.move_component(from, to)?;
        }
        Commands::Select { id } => run_select(id, store, out)?,
        Commands::Framework { name } => {
            if Framework::parse(&name).is_none() {
                tracing::warn!(framework = %name, "unrecognized framework, generated code will be empty");
            }
            store.set_framework(name);
        }
        Commands::Edit { source } => {
            let text = read_source(&source)?;
            if !store.update_code(&text) {
                bail!("edit discarded: expected a JSON array of components");
            }
        }
        Commands::Generate { framework, entry } => {
            let tag = framework.as_deref().unwrap_or(store.framework());
            let code = if entry {
                generate_entry_code(tag)
            } else {
                generate_app_code(store.components(), tag)
            };
            writeln!(out, "{}", code)?;
        }
        Commands::Preview { dark, out: path } => {
            let theme = if dark {
                PreviewTheme::Dark
            } else {
                PreviewTheme::Light
            };
            let html = preview_document(store.components(), theme)?;
            match path {
                Some(path) => fs::write(&path, html)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => writeln!(out, "{}", html)?,
            }
        }
        Commands::Export { out: dir, name } => {
            let path = run_export(store, &dir, name)?;
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}

fn run_select<S: Storage>(
    id: Option<String>,
    store: &mut Store<S>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let Some(id) = id.map(NodeId::from) else {
        store.select_component(None);
        return Ok(());
    };
    let node = store
        .find(&id)
        .cloned()
        .with_context(|| format!("no component with id '{}'", id))?;
    store.select_component(Some(id));
    writeln!(out, "{}", serde_json::to_string_pretty(&node)?)?;
    Ok(())
}

/// Export failures collapse into one message; details go to the log.
fn run_export<S: Storage>(
    store: &Store<S>,
    dir: &Path,
    name: Option<String>,
) -> anyhow::Result<PathBuf> {
    let options = name.map(ExportOptions::named).unwrap_or_default();
    package_project(store.components(), store.framework(), &options)
        .and_then(|archive| archive.save_to(dir))
        .map_err(|e| {
            tracing::error!(error = %e, "export failed");
            anyhow::anyhow!(EXPORT_FAILED)
        })
}

fn read_source(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(source).with_context(|| format!("failed to read {}", source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use webforge_core::MemoryStorage;

    fn run(store: &mut Store<MemoryStorage>, args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("webforge").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        execute(cli.command, store, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_update_generate() {
        let mut store = Store::open(MemoryStorage::new());
        let id = run(&mut store, &["add", "heading"]).unwrap();
        let id = id.trim();
        assert!(id.starts_with("heading-"));

        run(&mut store, &["update", id, r#"{"props":{"text":"Hi"}}"#]).unwrap();
        let code = run(&mut store, &["generate"]).unwrap();
        assert!(code.contains(r#"<h1 className="text-2xl font-bold mb-4">Hi</h1>"#));

        let vue = run(&mut store, &["generate", "--framework", "vue"]).unwrap();
        assert!(vue.contains(r#"<h1 class="text-2xl font-bold mb-4">Hi</h1>"#));
    }

    #[test]
    fn test_unknown_type_rejected_by_parser() {
        let mut store = Store::open(MemoryStorage::new());
        assert!(run(&mut store, &["add", "carousel"]).is_err());
        assert!(store.components().is_empty());
    }

    #[test]
    fn test_update_missing_id_fails() {
        let mut store = Store::open(MemoryStorage::new());
        let err = run(&mut store, &["update", "nope", "{}"]).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_edit_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        fs::write(
            &path,
            r#"[{"id":"p1","type":"paragraph","props":{"text":"Body"}}]"#,
        )
        .unwrap();

        let mut store = Store::open(MemoryStorage::new());
        run(&mut store, &["edit", path.to_str().unwrap()]).unwrap();
        assert_eq!(store.components().len(), 1);

        fs::write(&path, "{}").unwrap();
        assert!(run(&mut store, &["edit", path.to_str().unwrap()]).is_err());
        assert_eq!(store.components().len(), 1);
    }

    #[test]
    fn test_select_and_clear() {
        let mut store = Store::open(MemoryStorage::new());
        let id = run(&mut store, &["add", "button"]).unwrap();
        let shown = run(&mut store, &["select", id.trim()]).unwrap();
        assert!(shown.contains(r#""type": "button""#));
        assert_eq!(store.selected().map(NodeId::as_str), Some(id.trim()));

        run(&mut store, &["select"]).unwrap();
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_selection_does_not_outlive_the_process() {
        let mut store = Store::open(MemoryStorage::new());
        let id = run(&mut store, &["add", "heading"]).unwrap();
        let saves = store.storage().saves();

        run(&mut store, &["select", id.trim()]).unwrap();
        assert_eq!(store.storage().saves(), saves);

        let reopened = Store::open(store.into_storage());
        assert!(reopened.selected().is_none());
        assert_eq!(reopened.components().len(), 1);
    }

    #[test]
    fn test_export_unknown_framework_generic_message() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(MemoryStorage::new());
        run(&mut store, &["framework", "angular"]).unwrap();

        let out = dir.path().to_str().unwrap();
        let err = run(&mut store, &["export", "--out", out]).unwrap_err();
        assert_eq!(err.to_string(), EXPORT_FAILED);
    }

    #[test]
    fn test_export_writes_archive() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(MemoryStorage::new());
        run(&mut store, &["add", "paragraph"]).unwrap();

        let out = dir.path().to_str().unwrap();
        let printed = run(&mut store, &["export", "--out", out, "--name", "site"]).unwrap();
        assert!(printed.trim().ends_with("site.zip"));
        assert!(dir.path().join("site.zip").exists());
    }

    #[test]
    fn test_preview_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.html");
        let mut store = Store::open(MemoryStorage::new());
        run(&mut store, &["add", "heading"]).unwrap();
        run(&mut store, &["preview", "--dark", "--out", path.to_str().unwrap()]).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<h1"));
    }
}
