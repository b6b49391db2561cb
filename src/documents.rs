//! XML document handling
//!
//! This module builds a small element tree from `quick-xml` events. Only what
//! ComicInfo needs is kept: local names, attributes in document order, and
//! text content.

use crate::error::{Error, Result};
use crate::limits::Limits;
use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// XML Element in the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Element local name (any prefix is stripped)
    pub name: String,
    /// Element attributes by local name, in document order
    pub attributes: IndexMap<String, String>,
    /// Text content (if any)
    pub text: Option<String>,
    /// Child elements
    pub children: Vec<Element>,
}

impl Element {
    /// Create a new element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Get the local name of the element
    pub fn local_name(&self) -> &str {
        &self.name
    }

    /// Add a child element
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Append text content exactly as it appears in the document
    pub fn push_text(&mut self, text: &str) {
        match self.text {
            Some(ref mut existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    /// Text content, if any
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// First child element with the given local name
    pub fn find_child(&self, local_name: &str) -> Option<&Element> {
        self.children.iter().find(|e| e.local_name() == local_name)
    }

    /// Find child elements by local name
    pub fn find_children(&self, local_name: &str) -> Vec<&Element> {
        self.children
            .iter()
            .filter(|e| e.local_name() == local_name)
            .collect()
    }

    /// Text of the first child element with the given local name
    pub fn child_text(&self, local_name: &str) -> Option<&str> {
        self.find_child(local_name).and_then(Element::text)
    }
}

/// XML Document representation
#[derive(Debug, Default)]
pub struct Document {
    /// Root element of the document
    pub root: Option<Element>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an XML document from bytes
    ///
    /// Text content is kept verbatim. Segments split by comments, CDATA
    /// sections or child elements are concatenated without trimming.
    pub fn parse(xml: &[u8], limits: &Limits) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.trim_text(false);

        let mut doc = Document::new();
        let mut element_stack: Vec<Element> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    limits.check_xml_depth(element_stack.len() + 1)?;
                    let element = Self::parse_element(&e, limits)?;
                    if element_stack.is_empty() && doc.root.is_some() {
                        return Err(Self::multiple_roots(&element));
                    }
                    element_stack.push(element);
                }
                Ok(Event::End(_)) => {
                    if let Some(current) = element_stack.pop() {
                        if let Some(parent) = element_stack.last_mut() {
                            parent.add_child(current);
                        } else {
                            doc.root = Some(current);
                        }
                    }
                }
                Ok(Event::Empty(e)) => {
                    limits.check_xml_depth(element_stack.len() + 1)?;
                    let element = Self::parse_element(&e, limits)?;
                    if let Some(parent) = element_stack.last_mut() {
                        parent.add_child(element);
                    } else if doc.root.is_some() {
                        return Err(Self::multiple_roots(&element));
                    } else {
                        doc.root = Some(element);
                    }
                }
                Ok(Event::Text(e)) => {
                    let text = e
                        .unescape()
                        .map_err(|e| Error::parse(format!("failed to unescape text: {}", e)))?;
                    match element_stack.last_mut() {
                        Some(current) => current.push_text(&text),
                        None if text.trim().is_empty() => {}
                        None => {
                            return Err(Error::parse("text content outside of the root element"))
                        }
                    }
                }
                Ok(Event::CData(e)) => {
                    let bytes = e.into_inner();
                    let text = std::str::from_utf8(&bytes)
                        .map_err(|e| Error::parse(format!("invalid CDATA content: {}", e)))?;
                    if let Some(current) = element_stack.last_mut() {
                        current.push_text(text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::parse(format!(
                        "error parsing XML at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {} // Declarations, comments, doctypes and processing instructions
            }
            buf.clear();
        }

        if let Some(open) = element_stack.last() {
            return Err(Error::parse(format!(
                "unexpected end of document: element '{}' is not closed",
                open.name
            )));
        }

        Ok(doc)
    }

    fn multiple_roots(element: &Element) -> Error {
        Error::parse(format!(
            "unexpected element '{}' after the root element",
            element.name
        ))
    }

    /// Parse element from BytesStart event
    fn parse_element(start: &BytesStart, limits: &Limits) -> Result<Element> {
        let name = std::str::from_utf8(start.local_name().as_ref())
            .map_err(|e| Error::parse(format!("invalid element name: {}", e)))?
            .to_string();

        let mut element = Element::new(name);

        for attr_result in start.attributes() {
            let attr = attr_result
                .map_err(|e| Error::parse(format!("failed to parse attribute: {}", e)))?;

            let key = attr.key;
            if key.as_ref() == b"xmlns" || key.as_ref().starts_with(b"xmlns:") {
                continue;
            }

            let attr_name = std::str::from_utf8(key.local_name().as_ref())
                .map_err(|e| Error::parse(format!("invalid attribute name: {}", e)))?
                .to_string();

            let attr_value = attr
                .unescape_value()
                .map_err(|e| Error::parse(format!("failed to unescape attribute value: {}", e)))?
                .to_string();

            element.attributes.insert(attr_name, attr_value);
        }

        limits.check_attributes(element.attributes.len())?;

        Ok(element)
    }

    /// Get the root element
    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }
}
