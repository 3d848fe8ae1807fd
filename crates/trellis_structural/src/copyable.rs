//! The copy capability.

use trellis_foundation::Stateful;

/// Produces a new instance of the same concrete type sharing no mutable
/// state with the original.
///
/// Derived for every stateful type with an explicit `Clone`; the clone is
/// required to uphold the same invariants as normal construction, and no
/// constructor side effects run during a copy.
pub trait Copyable {
    /// Returns an independent copy of this instance.
    ///
    /// Guarantees: the copy is a distinct object, and
    /// [`equals`](crate::Comparable::equals) holds between original and
    /// copy. Nested node handles are shared by reference until an update
    /// targets their sub-path.
    #[must_use]
    fn copy(&self) -> Self;
}

impl<T: Stateful + Clone> Copyable for T {
    fn copy(&self) -> Self {
        self.clone()
    }
}
