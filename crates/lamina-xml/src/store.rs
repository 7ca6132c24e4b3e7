use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use lamina_core::error::{StoreError, StoreResult};
use lamina_core::traits::ConfigStore;

use crate::document::XmlDocument;
use crate::query;
use crate::translate::translate;

/// Default name of the root element configuration keys resolve under.
pub const DEFAULT_ROOT_ELEMENT: &str = "config";

/// Where an [`XmlConfigStore`] gets its backing document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlSource {
    /// Path to an XML file. The file does not have to exist; a missing or
    /// unparseable file reads as an empty document.
    File(PathBuf),
    /// A literal XML document. Malformed input fails construction.
    Literal(String),
}

/// Read-only configuration store backed by an XML document.
///
/// Keys resolve as element paths under a fixed root element: dots descend
/// one element per segment, `[n]` picks the n-th same-named sibling, and a
/// trailing `$l` answers the number of matches instead of a value.
///
/// The document is parsed once at construction and never mutated, so the
/// store is freely shareable across threads. Writes are permanently
/// unsupported and fail with [`StoreError::WriteUnsupported`].
pub struct XmlConfigStore {
    root_element: String,
    /// Present only for file-backed stores.
    path: Option<PathBuf>,
    document: XmlDocument,
}

impl XmlConfigStore {
    /// Construct a store from an explicit source and root element name.
    ///
    /// File sources never fail here; literal sources fail on malformed XML.
    pub fn new(source: XmlSource, root_element: impl Into<String>) -> StoreResult<Self> {
        match source {
            XmlSource::File(path) => Ok(Self::file_backed(path, root_element.into())),
            XmlSource::Literal(xml) => Self::literal_backed(&xml, root_element.into()),
        }
    }

    /// Open a store backed by the XML file at `path`, resolving keys under
    /// the default `config` root element.
    ///
    /// The file does not have to exist yet: a missing, unreadable, or
    /// unparseable file degrades to an empty document, and every read
    /// against it answers absent. A fresh instance picks the file up once
    /// it exists.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::file_backed(path.into(), DEFAULT_ROOT_ELEMENT.to_string())
    }

    /// Build a store from a literal XML document, resolving keys under the
    /// default `config` root element.
    ///
    /// Unlike [`from_file`], malformed input is rejected here: a literal
    /// has no file to be created later, so there is nothing to wait for.
    ///
    /// [`from_file`]: Self::from_file
    pub fn from_xml(xml: &str) -> StoreResult<Self> {
        Self::literal_backed(xml, DEFAULT_ROOT_ELEMENT.to_string())
    }

    /// The backing file path, for file-backed stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The root element name keys resolve under.
    pub fn root_element(&self) -> &str {
        &self.root_element
    }

    fn file_backed(path: PathBuf, root_element: String) -> Self {
        let document = match std::fs::read_to_string(&path) {
            Ok(xml) => match XmlDocument::parse(&xml) {
                Ok(document) => {
                    debug!(path = %path.display(), "loaded xml backing file");
                    document
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "unparseable xml backing file; reading as empty");
                    XmlDocument::empty()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "xml backing file does not exist; reading as empty");
                XmlDocument::empty()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable xml backing file; reading as empty");
                XmlDocument::empty()
            }
        };
        Self {
            root_element,
            path: Some(path),
            document,
        }
    }

    fn literal_backed(xml: &str, root_element: String) -> StoreResult<Self> {
        let document = XmlDocument::parse(xml)?;
        Ok(Self {
            root_element,
            path: None,
            document,
        })
    }
}

impl ConfigStore for XmlConfigStore {
    fn name(&self) -> &str {
        "xml"
    }

    fn can_read(&self) -> bool {
        true
    }

    /// Whether this store announces write capability to the aggregator.
    ///
    /// File-backed stores report `true` even though [`ConfigStore::write`]
    /// unconditionally fails. The flag is a declarative hint the
    /// aggregator's store-selection logic has always received from
    /// file-backed XML stores; the store is read-only either way.
    fn can_write(&self) -> bool {
        self.path.is_some()
    }

    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        // A document that never loaded reads as "no data" for every key,
        // length queries included, so a store built against a
        // not-yet-existing file is safe to query.
        if self.document.is_empty() {
            return Ok(None);
        }

        let (structural_query, is_length) = translate(key, &self.root_element);
        let nodes = query::evaluate(&self.document, &structural_query);
        debug!(key, query = %structural_query, matches = nodes.len(), "xml store read");

        if is_length {
            return Ok(Some(nodes.len().to_string()));
        }
        match nodes.as_slice() {
            [] => Ok(None),
            [node] => Ok(node.text()),
            _ => Err(StoreError::AmbiguousKey {
                key: key.to_string(),
                matches: nodes.len(),
            }),
        }
    }

    fn write(&self, _key: &str, _value: Option<&str>) -> StoreResult<()> {
        Err(StoreError::WriteUnsupported {
            store: self.name().to_string(),
        })
    }
}

impl fmt::Debug for XmlConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlConfigStore")
            .field("root_element", &self.root_element)
            .field("path", &self.path)
            .field("loaded", &!self.document.is_empty())
            .finish()
    }
}
