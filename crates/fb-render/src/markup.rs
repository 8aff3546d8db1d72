//! A small markup tree with a terse builder and escaped HTML emission.
//!
//! Renderers build `Element` trees rather than concatenating strings, so
//! user-entered labels and option values can never break out of an
//! attribute or inject markup — escaping happens once, at emission.

use std::fmt::Write;

/// Tags that take no children and no closing tag.
const VOID_TAGS: &[&str] = &["input", "hr", "br", "img"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    /// Value-less attributes: `required`, `checked`, `selected`.
    flags: Vec<&'static str>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            flags: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append a class token. Empty strings are skipped so optional
    /// utility classes (`textAlign`) never leave stray whitespace.
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref();
        if !class.is_empty() {
            self.classes.push(class.to_string());
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Add `attr` only when `value` is non-empty (e.g. placeholder).
    pub fn attr_if_present(self, name: impl Into<String>, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.attr(name, value)
        }
    }

    /// A value-less boolean attribute, emitted only when `on`.
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.flags.push(name);
        }
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn tag(&self) -> &str {
        self.tag
    }

    /// First value of an attribute, for tests and hit-target mapping.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Serialize the tree. Text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        for flag in &self.flags {
            out.push(' ');
            out.push_str(flag);
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_html(out),
                Node::Text(t) => out.push_str(&escape(t)),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
