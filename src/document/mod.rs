// Attributed output tree
//
// A minimal element tree: tag, insertion-ordered unique attributes, ordered
// children and optional leaf text. The walker only appends; the query helpers
// exist for consumers and tests.

pub mod xml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;

use crate::error::DocumentError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        debug_assert!(!tag.is_empty(), "element tags must be non-empty");
        Self {
            tag,
            attributes: IndexMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Append a new child and return it for further construction
    pub fn create_child(&mut self, tag: impl Into<String>) -> &mut Element {
        self.children.push(Element::new(tag));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Set an attribute; a duplicate key keeps its original position
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        debug_assert!(!key.is_empty(), "attribute keys must be non-empty");
        self.attributes.insert(key, value.into());
    }

    pub fn append_text(&mut self, text: &str) {
        self.text.get_or_insert_with(String::new).push_str(text);
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Follow a slash-separated tag path, taking the first match at each step
    pub fn find(&self, path: &str) -> Option<&Element> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |current, segment| {
                current.children.iter().find(|c| c.tag == segment)
            })
    }

    /// All descendants with the given tag, in document order
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_by_tag(tag, &mut found);
        found
    }

    fn collect_by_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.tag == tag {
                found.push(child);
            }
            child.collect_by_tag(tag, found);
        }
    }
}

/// An unnamed document node holding top-level elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    node: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            node: Element::new("#document"),
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_root(&mut self, tag: impl Into<String>) -> &mut Element {
        self.node.create_child(tag)
    }

    /// The document node itself, for builders that append top-level elements
    pub fn node_mut(&mut self) -> &mut Element {
        &mut self.node
    }

    pub fn root(&self) -> Option<&Element> {
        self.node.children.first()
    }

    pub fn elements(&self) -> &[Element] {
        &self.node.children
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), DocumentError> {
        xml::write_document(self, writer)
    }

    pub fn to_xml_string(&self) -> Result<String, DocumentError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| DocumentError::Encoding(e.to_string()))
    }

    /// Serialize to `path`, replacing any existing file
    pub fn write_to_file(&self, path: &Path) -> Result<(), DocumentError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attribute_overwrites_in_place() {
        let mut element = Element::new("Ident");
        element.set_attribute("Name", "x");
        element.set_attribute("IsExported", "false");
        element.set_attribute("Name", "y");

        let attrs: Vec<_> = element.attributes().collect();
        assert_eq!(attrs, vec![("Name", "y"), ("IsExported", "false")]);
    }

    #[test]
    fn test_append_text_concatenates() {
        let mut element = Element::new("Comment");
        assert_eq!(element.text(), None);
        element.append_text("// a");
        element.append_text(" b");
        assert_eq!(element.text(), Some("// a b"));
    }

    #[test]
    fn test_find_and_find_all() {
        let mut doc = Document::new();
        let root = doc.create_root("Package");
        let file = root.create_child("File");
        file.create_child("Func").set_attribute("Name", "a");
        file.create_child("Func").set_attribute("Name", "b");
        root.create_child("File");

        let root = doc.root().expect("root exists");
        assert_eq!(
            root.find("File/Func").and_then(|f| f.attribute("Name")),
            Some("a")
        );
        assert!(root.find("File/Var").is_none());
        assert_eq!(root.find_all("File").len(), 2);
        assert_eq!(root.find_all("Func").len(), 2);
        assert_eq!(root.find("").map(Element::tag), Some("Package"));
    }
}
