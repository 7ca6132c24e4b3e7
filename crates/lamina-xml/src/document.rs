use lamina_core::error::{StoreError, StoreResult};

/// One piece of an element's ordered content: a nested element or a run of
/// character data.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Content {
    Element(Element),
    Text(String),
}

/// A named element with ordered content.
///
/// Child elements and text runs stay interleaved in document order, so
/// mixed content reads back the way it appears in the source. Whitespace
/// that only separates elements is not loaded; see [`XmlDocument::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    name: String,
    content: Vec<Content>,
}

impl Element {
    /// The element's local name. Namespaces are ignored: configuration
    /// documents are conventionally unnamespaced.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.content.iter().filter_map(|content| match content {
            Content::Element(element) => Some(element),
            Content::Text(_) => None,
        })
    }

    /// The element's text content: every descendant text run concatenated
    /// in document order, or `None` if the element contains no text.
    pub fn text(&self) -> Option<String> {
        let mut text = String::new();
        self.collect_text(&mut text);
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn collect_text(&self, out: &mut String) {
        for content in &self.content {
            match content {
                Content::Text(run) => out.push_str(run),
                Content::Element(child) => child.collect_text(out),
            }
        }
    }

    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let mut content = Vec::new();
        for child in node.children() {
            if child.is_element() {
                content.push(Content::Element(Self::from_node(child)));
            } else if child.is_text() {
                // Whitespace-only runs are formatting between elements;
                // anything else is kept verbatim.
                if let Some(run) = child.text() {
                    if !run.trim().is_empty() {
                        content.push(Content::Text(run.to_string()));
                    }
                }
            }
        }
        Self {
            name: node.tag_name().name().to_string(),
            content,
        }
    }
}

/// The backing document an XML store queries: a single owned element tree,
/// or no content at all when the source was missing or unparseable.
#[derive(Clone, Debug, Default)]
pub struct XmlDocument {
    root: Option<Element>,
}

impl XmlDocument {
    /// A document with no content. Every query against it matches nothing.
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// Parse an XML string into an owned document.
    ///
    /// Parsing borrows from the input, but the resulting tree owns its data
    /// outright, so the document holds no references into the source text.
    pub fn parse(xml: &str) -> StoreResult<Self> {
        let parsed =
            roxmltree::Document::parse(xml).map_err(|e| StoreError::InvalidDocument {
                reason: e.to_string(),
            })?;
        Ok(Self {
            root: Some(Element::from_node(parsed.root_element())),
        })
    }

    /// The document element, if the document has content.
    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    /// Returns `true` if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> XmlDocument {
        XmlDocument::parse(xml).unwrap()
    }

    #[test]
    fn parse_reads_root_name() {
        let doc = parse("<config><Key>value</Key></config>");
        assert_eq!(doc.root().unwrap().name(), "config");
        assert!(!doc.is_empty());
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(matches!(
            XmlDocument::parse("<config>"),
            Err(StoreError::InvalidDocument { .. })
        ));
        assert!(matches!(
            XmlDocument::parse(""),
            Err(StoreError::InvalidDocument { .. })
        ));
        assert!(matches!(
            XmlDocument::parse("not xml at all"),
            Err(StoreError::InvalidDocument { .. })
        ));
    }

    #[test]
    fn empty_document_has_no_root() {
        assert!(XmlDocument::empty().root().is_none());
        assert!(XmlDocument::empty().is_empty());
        assert!(XmlDocument::default().is_empty());
    }

    #[test]
    fn children_are_elements_only_in_document_order() {
        let doc = parse("<config>text<a/>more<b/><c/></config>");
        let names: Vec<&str> = doc.root().unwrap().children().map(Element::name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn text_of_leaf_element() {
        let doc = parse("<config><Key>c75aaedd</Key></config>");
        let key = doc.root().unwrap().children().next().unwrap();
        assert_eq!(key.text(), Some("c75aaedd".to_string()));
    }

    #[test]
    fn text_concatenates_descendants_in_document_order() {
        let doc = parse("<a>x<b>y</b>z</a>");
        assert_eq!(doc.root().unwrap().text(), Some("xyz".to_string()));
    }

    #[test]
    fn text_of_empty_element_is_none() {
        let doc = parse("<config><Empty/></config>");
        let empty = doc.root().unwrap().children().next().unwrap();
        assert_eq!(empty.text(), None);
    }

    #[test]
    fn whitespace_only_element_has_no_text() {
        let doc = parse("<config><Blank>\n   </Blank></config>");
        let blank = doc.root().unwrap().children().next().unwrap();
        assert_eq!(blank.text(), None);
    }

    #[test]
    fn pretty_printing_does_not_leak_into_values() {
        let doc = parse("<config>\n  <Key>value</Key>\n</config>");
        let root = doc.root().unwrap();
        let key = root.children().next().unwrap();
        assert_eq!(key.text(), Some("value".to_string()));
        // The indentation around <Key> is not text of the root either.
        assert_eq!(root.text(), Some("value".to_string()));
    }

    #[test]
    fn significant_text_is_kept_verbatim() {
        let doc = parse("<config><Key>  spaced out  </Key></config>");
        let key = doc.root().unwrap().children().next().unwrap();
        assert_eq!(key.text(), Some("  spaced out  ".to_string()));
    }

    #[test]
    fn cdata_reads_as_text() {
        let doc = parse("<config><Key><![CDATA[<raw & unescaped>]]></Key></config>");
        let key = doc.root().unwrap().children().next().unwrap();
        assert_eq!(key.text(), Some("<raw & unescaped>".to_string()));
    }

    #[test]
    fn comments_are_not_content() {
        let doc = parse("<config><Key><!-- note -->value</Key></config>");
        let key = doc.root().unwrap().children().next().unwrap();
        assert_eq!(key.children().count(), 0);
        assert_eq!(key.text(), Some("value".to_string()));
    }

    #[test]
    fn element_names_ignore_namespace_prefixes() {
        let doc = parse(r#"<c:config xmlns:c="urn:example"><c:Key>v</c:Key></c:config>"#);
        let root = doc.root().unwrap();
        assert_eq!(root.name(), "config");
        assert_eq!(root.children().next().unwrap().name(), "Key");
    }
}
