//! Read-only XML backing store for the Lamina configuration framework.
//!
//! [`XmlConfigStore`] owns a parsed XML document and resolves dotted
//! configuration keys against it. A key names a path of nested elements
//! under a fixed root element; repeated sibling elements form collections
//! addressable by a 1-based index or a length query.
//!
//! # Key syntax
//!
//! - `Logging.LogLevel.Default` — one element per dot-separated segment
//! - `Numbers.$l` — the number of `Numbers` elements, as a decimal string
//! - `Numbers[2]` — the second `Numbers` element (positions are 1-based)
//!
//! A key matching nothing answers absent; a key matching several elements
//! where a single value was expected fails with
//! [`lamina_core::StoreError::AmbiguousKey`]. The store is permanently
//! read-only: every write fails with
//! [`lamina_core::StoreError::WriteUnsupported`].
//!
//! # Modules
//!
//! - [`document`] — The owned backing-document tree
//! - [`translate`] — Dotted key to structural query translation
//! - [`query`] — Query evaluation over the document
//! - [`store`] — [`XmlConfigStore`] and its construction sources

pub mod document;
pub mod query;
pub mod store;
pub mod translate;

pub use document::{Element, XmlDocument};
pub use store::{DEFAULT_ROOT_ELEMENT, XmlConfigStore, XmlSource};
pub use translate::translate;
