//! Markup fragments and the printers that turn them into source text.
//!
//! Generators build a small tree of [`Markup`] and hand it to a [`Printer`]
//! configured for a [`Dialect`]. The dialect decides framework spelling (the
//! styling attribute is `className` in JSX and `class` in HTML-style
//! templates); everything else about an element prints the same way.

/// A markup fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Markup {
    Element(Element),
    Text(String),
    /// Prints as nothing.
    Empty,
}

impl Markup {
    pub fn is_empty(&self) -> bool {
        matches!(self, Markup::Empty)
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        Markup::Element(element)
    }
}

/// An element attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Attr {
    /// The styling class list; its name depends on the dialect.
    Class(String),
    Named { name: String, value: String },
}

/// An element with attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<Attr>,
    pub children: Vec<Markup>,
    /// Void elements print self-closed and take no children.
    pub void: bool,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            void: false,
        }
    }

    /// A self-closing element such as `img` or `input`.
    pub fn void(tag: impl Into<String>) -> Self {
        Self {
            void: true,
            ..Self::new(tag)
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.attrs.push(Attr::Class(class.into()));
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(Attr::Named {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Markup::Text(text.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Markup>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Framework markup conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// React JSX.
    Jsx,
    /// Vue and Svelte templates, and plain HTML.
    Html,
}

impl Dialect {
    /// Attribute name carrying the styling class list.
    pub const fn class_attr(&self) -> &'static str {
        match self {
            Dialect::Jsx => "className",
            Dialect::Html => "class",
        }
    }
}

/// Prints markup for one dialect.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    dialect: Dialect,
    escape: bool,
}

impl Printer {
    /// A printer that embeds text verbatim, as exported source does.
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            escape: false,
        }
    }

    /// A printer that HTML-escapes text and attribute values.
    pub const fn escaping(dialect: Dialect) -> Self {
        Self {
            dialect,
            escape: true,
        }
    }

    /// Print a fragment on one line.
    pub fn print(&self, markup: &Markup) -> String {
        let mut out = String::new();
        self.write(&mut out, markup);
        out
    }

    /// Print `element` as a block: the opening tag at `indent`, each child on
    /// its own line two spaces deeper, then the closing tag.
    ///
    /// Empty children still occupy a line, so the body of a block whose
    /// children are all empty is whitespace only.
    pub fn print_block(&self, element: &Element, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let child_pad = " ".repeat(indent + 2);

        let mut open = String::new();
        self.write_open_tag(&mut open, element);

        let body = element
            .children
            .iter()
            .map(|child| self.print(child))
            .collect::<Vec<_>>()
            .join(&format!("\n{}", child_pad));

        format!(
            "{pad}{open}\n{child_pad}{body}\n{pad}</{tag}>",
            tag = element.tag
        )
    }

    fn write(&self, out: &mut String, markup: &Markup) {
        match markup {
            Markup::Empty => {}
            Markup::Text(text) => out.push_str(&self.escape_text(text)),
            Markup::Element(element) => {
                self.write_open_tag(out, element);
                if element.void {
                    return;
                }
                for child in &element.children {
                    self.write(out, child);
                }
                out.push_str("</");
                out.push_str(&element.tag);
                out.push('>');
            }
        }
    }

    fn write_open_tag(&self, out: &mut String, element: &Element) {
        out.push('<');
        out.push_str(&element.tag);
        for attr in &element.attrs {
            let (name, value) = match attr {
                Attr::Class(value) => (self.dialect.class_attr(), value.as_str()),
                Attr::Named { name, value } => (name.as_str(), value.as_str()),
            };
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&self.escape_attr(value));
            out.push('"');
        }
        out.push_str(if element.void { " />" } else { ">" });
    }

    fn escape_text(&self, text: &str) -> String {
        if !self.escape {
            return text.to_string();
        }
        escape_html(text, false)
    }

    fn escape_attr(&self, value: &str) -> String {
        if !self.escape {
            return value.to_string();
        }
        escape_html(value, true)
    }
}

fn escape_html(s: &str, quotes: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
