//! Live preview rendering.
//!
//! Unlike export, the preview renders all eight node types and recurses into
//! container children. Output is escaped HTML meant for an iframe that loads
//! the Tailwind CDN.

use crate::error::Result;
use crate::fragments::non_empty_or;
use crate::generators::TemplateEngine;
use crate::markup::{Dialect, Element, Markup, Printer};
use convert_case::{Case, Casing};
use serde::Serialize;
use serde_json::{Map, Value};
use webforge_core::{ComponentNode, NodeKind};

const TRANSITION_CLASS: &str = "transition-all duration-200";
const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300";

const PREVIEW_DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
      @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap');
      body {
        font-family: 'Inter', sans-serif;
        margin: 0;
        padding: 0;
        background: {{background}};
        color: {{color}};
      }
    </style>
  </head>
  <body>
    <div class="p-8">
{{indent body 6}}
    </div>
  </body>
</html>
"#;

/// Color scheme of the preview frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewTheme {
    #[default]
    Light,
    Dark,
}

impl PreviewTheme {
    fn colors(&self) -> (&'static str, &'static str) {
        match self {
            PreviewTheme::Light => ("#fff", "#000"),
            PreviewTheme::Dark => ("#111", "#fff"),
        }
    }
}

#[derive(Serialize)]
struct DocumentData<'a> {
    background: &'a str,
    color: &'a str,
    body: String,
}

/// Preview markup for one node.
pub fn render_preview(node: &ComponentNode) -> Markup {
    let class = node.common.class_name.as_deref();
    let element = match &node.kind {
        NodeKind::Heading { text } => Element::new("h1")
            .class(merge_classes("text-2xl font-bold mb-4", class))
            .text(non_empty_or(text.as_deref(), "Heading")),
        NodeKind::Paragraph { text } => Element::new("p")
            .class(merge_classes("mb-4 leading-relaxed", class))
            .text(non_empty_or(text.as_deref(), "Paragraph text")),
        NodeKind::Button { text } => Element::new("button")
            .class(merge_classes(
                "px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600",
                class,
            ))
            .text(non_empty_or(text.as_deref(), "Button")),
        NodeKind::Image { src, alt } => Element::void("img")
            .class(merge_classes("max-w-full h-auto rounded", class))
            .attr("src", non_empty_or(src.as_deref(), PLACEHOLDER_IMAGE))
            .attr("alt", non_empty_or(alt.as_deref(), "Image")),
        NodeKind::List { items } => {
            // An explicit empty list stays empty; only a missing one gets samples.
            let items = items
                .clone()
                .unwrap_or_else(|| vec!["List item 1".into(), "List item 2".into()]);
            Element::new("ul")
                .class(merge_classes("list-disc list-inside space-y-2", class))
                .children(
                    items
                        .into_iter()
                        .map(|item| Markup::from(Element::new("li").text(item))),
                )
        }
        NodeKind::Input {
            input_type,
            placeholder,
        } => Element::void("input")
            .class(merge_classes(
                "w-full px-3 py-2 border rounded focus:outline-none focus:ring-2",
                class,
            ))
            .attr("type", non_empty_or(input_type.as_deref(), "text"))
            .attr(
                "placeholder",
                non_empty_or(placeholder.as_deref(), "Enter text..."),
            ),
        NodeKind::Container { children } => Element::new("div")
            .class(merge_classes("p-4 border rounded", class))
            .children(children.iter().map(render_preview)),
        NodeKind::Grid { children } => Element::new("div")
            .class(merge_classes("grid grid-cols-2 gap-4", class))
            .children(children.iter().map(render_preview)),
        NodeKind::Unknown { .. } => return Markup::Empty,
    };

    match &node.common.style {
        Some(style) if !style.is_empty() => element.attr("style", inline_style(style)).into(),
        _ => element.into(),
    }
}

/// Preview HTML fragments, one line per top-level node.
pub fn render_preview_body(nodes: &[ComponentNode]) -> String {
    let printer = Printer::escaping(Dialect::Html);
    nodes
        .iter()
        .map(render_preview)
        .filter(|m| !m.is_empty())
        .map(|m| printer.print(&m))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A complete HTML document previewing `nodes`.
pub fn preview_document(nodes: &[ComponentNode], theme: PreviewTheme) -> Result<String> {
    let (background, color) = theme.colors();
    TemplateEngine::new().render_string(
        PREVIEW_DOCUMENT,
        &DocumentData {
            background,
            color,
            body: render_preview_body(nodes),
        },
    )
}

/// `<base> <class> transition-all duration-200`.
///
/// A user class replaces any base class of the same utility group, so `mb-2`
/// drops the base `mb-4` while `text-red-500` leaves `text-2xl` alone.
fn merge_classes(base: &str, class: Option<&str>) -> String {
    let user: Vec<&str> = class.unwrap_or_default().split_whitespace().collect();
    let overridden: Vec<&str> = user.iter().copied().filter_map(utility_group).collect();

    base.split_whitespace()
        .filter(|c| utility_group(c).map_or(true, |g| !overridden.contains(&g)))
        .chain(user.iter().copied())
        .chain(TRANSITION_CLASS.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

const SIZE_SUFFIXES: &[&str] = &[
    "xs", "sm", "base", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl",
    "9xl", "full", "auto", "px", "screen", "none",
];

/// The utility a class sets when its last segment is a scale value:
/// `mb-4` -> `mb`, `hover:text-lg` -> `hover:text`. Color and keyword
/// classes (`text-red-500`, `font-bold`) have no group.
fn utility_group(class: &str) -> Option<&str> {
    let (group, value) = class.rsplit_once('-')?;
    let numeric = value
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '/');
    if group.is_empty() || value.is_empty() {
        return None;
    }
    if (numeric && !group.contains('-')) || SIZE_SUFFIXES.contains(&value) {
        Some(group)
    } else {
        None
    }
}

/// Render a style object (`{"fontSize": "12px"}`) as CSS declarations.
fn inline_style(style: &Map<String, Value>) -> String {
    style
        .iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => return None,
            };
            Some(format!("{}: {}", key.to_case(Case::Kebab), value))
        })
        .collect::<Vec<_>>()
        .join("; ")
}
