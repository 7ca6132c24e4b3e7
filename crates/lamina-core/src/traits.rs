//! The [`ConfigStore`] trait defining the store contract.
//!
//! A Lamina configuration is assembled from an ordered chain of stores. The
//! aggregator asks each store for a key in turn and takes the first present
//! answer, so stores never need to know about each other — they only honor
//! this contract.

use crate::error::StoreResult;

/// A single backing store of configuration values.
///
/// All implementations must satisfy these invariants:
/// - Keys are dot-separated, case-sensitive paths (see [`crate::keypath`]);
///   a store that cannot resolve a key answers `Ok(None)`, never an error.
/// - `read` has no side effects: repeated calls with the same key against an
///   unchanged store return identical results.
/// - `can_read`/`can_write` are declarative capability hints consumed by the
///   aggregator's store-selection logic; they are not functional guarantees.
/// - Implementations are safe to share across threads (`Send + Sync`).
pub trait ConfigStore: Send + Sync {
    /// Short diagnostic name of this store (e.g. `"xml"`).
    fn name(&self) -> &str;

    /// Whether the aggregator should consult this store on reads.
    fn can_read(&self) -> bool;

    /// Whether the aggregator should route writes to this store.
    fn can_write(&self) -> bool;

    /// Read the raw string value at `key`.
    ///
    /// Returns `Ok(None)` if the key is absent. A key whose final segment
    /// carries the length marker answers the number of matches as a decimal
    /// string instead of a value.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` at `key`; `None` removes the key.
    ///
    /// Read-only stores fail with [`StoreError::WriteUnsupported`].
    ///
    /// [`StoreError::WriteUnsupported`]: crate::error::StoreError::WriteUnsupported
    fn write(&self, key: &str, value: Option<&str>) -> StoreResult<()>;
}
