//! Structured markup tree.
//!
//! Views are built as plain data ([`Node`] / [`Fragment`]) and only turned
//! into HTML at the display boundary. Tests assert on the tree directly.

use std::fmt::Write;

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with attributes, classes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag name.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the element id.
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Add a class. Empty class names are ignored.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add a class only when `condition` holds.
    pub fn class_if(self, class: impl Into<String>, condition: bool) -> Self {
        if condition {
            self.class(class)
        } else {
            self
        }
    }

    /// Set an attribute, replacing any previous value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes.
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::Text(content.into()))
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Get an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Depth-first search for the element with the given id (including self).
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.get_id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| match c {
            Node::Element(e) => e.find_by_id(id),
            Node::Text(_) => None,
        })
    }

    /// All descendant elements (including self) carrying `class`, in document order.
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            out.push(self);
        }
        for child in &self.children {
            if let Node::Element(e) = child {
                e.collect_by_class(class, out);
            }
        }
    }

    /// Serialize to HTML, escaping text and attribute values.
    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_html(&self.classes.join(" ")));
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => {
                for child in &e.children {
                    child.collect_text(out);
                }
            }
        }
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&escape_html(t)),
            Node::Element(e) => e.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::Text(content)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::Text(content.to_string())
    }
}

/// An ordered list of sibling nodes inserted as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level elements in order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(Node::as_element)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.elements().find_map(|e| e.find_by_id(id))
    }

    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        self.elements()
            .flat_map(|e| e.find_all_by_class(class))
            .collect()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_html(&mut out);
        }
        out
    }
}

/// Escape text for safe inclusion in HTML content or quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn div() -> Element {
    Element::new("div")
}

pub fn span() -> Element {
    Element::new("span")
}

pub fn p(content: impl Into<String>) -> Element {
    Element::new("p").text(content)
}

pub fn h3(content: impl Into<String>) -> Element {
    Element::new("h3").text(content)
}

pub fn ul() -> Element {
    Element::new("ul")
}

pub fn li(content: impl Into<String>) -> Element {
    Element::new("li").text(content)
}

pub fn button() -> Element {
    Element::new("button").attr("type", "button")
}

pub fn img(src: impl Into<String>, alt: impl Into<String>) -> Element {
    Element::new("img").attr("src", src).attr("alt", alt)
}

pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_serialization() {
        let el = div()
            .class("card")
            .id("main")
            .child(p("Hello"))
            .child(img("a.png", "An image"));
        assert_eq!(
            el.to_html(),
            "<div class=\"card\" id=\"main\"><p>Hello</p><img src=\"a.png\" alt=\"An image\"></div>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let el = p("Challenges & <Solutions>");
        assert_eq!(el.to_html(), "<p>Challenges &amp; &lt;Solutions&gt;</p>");

        let el = img("x.png", "say \"hi\"");
        assert!(el.to_html().contains("alt=\"say &quot;hi&quot;\""));
    }

    #[test]
    fn test_class_dedup_and_conditional() {
        let el = button()
            .class("thumb")
            .class("thumb")
            .class_if("active", false)
            .class_if("selected", true);
        assert_eq!(el.classes(), &["thumb".to_string(), "selected".to_string()]);
    }

    #[test]
    fn test_attr_replaces_existing() {
        let el = div().attr("data-index", "1").attr("data-index", "2");
        assert_eq!(el.get_attr("data-index"), Some("2"));
        assert!(el.to_html().matches("data-index").count() == 1);
    }

    #[test]
    fn test_queries() {
        let tree = div().child(
            ul().child(li("one").class("item"))
                .child(li("two").class("item").id("second")),
        );
        assert_eq!(tree.find_all_by_class("item").len(), 2);
        assert_eq!(
            tree.find_by_id("second").map(Element::text_content),
            Some("two".to_string())
        );
        assert_eq!(tree.text_content(), "onetwo");
    }

    #[test]
    fn test_fragment_html_and_queries() {
        let mut fragment = Fragment::new();
        assert!(fragment.is_empty());
        fragment.push(div().class("a"));
        fragment.push(text("between"));
        fragment.push(div().class("a").id("last"));
        assert_eq!(fragment.elements().count(), 2);
        assert_eq!(fragment.find_all_by_class("a").len(), 2);
        assert!(fragment.find_by_id("last").is_some());
        assert_eq!(
            fragment.to_html(),
            "<div class=\"a\"></div>between<div class=\"a\" id=\"last\"></div>"
        );
    }
}
