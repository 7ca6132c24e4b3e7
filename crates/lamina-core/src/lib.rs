//! Foundation crate for the Lamina configuration framework.
//!
//! A Lamina configuration is assembled from an ordered chain of backing
//! *stores*. The aggregator resolves every configuration key against the
//! chain in order and takes the first present answer, so stores stay
//! independent of each other and only honor the contract defined here.
//!
//! # Modules
//!
//! - [`error`] — The store error taxonomy: [`StoreError`], [`StoreResult`]
//! - [`keypath`] — The dotted-key grammar: separators and the length marker
//! - [`memory`] — In-memory [`InMemoryConfigStore`] for tests and overrides
//! - [`traits`] — The [`ConfigStore`] trait every store implements

pub mod error;
pub mod keypath;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryConfigStore;
pub use traits::ConfigStore;
