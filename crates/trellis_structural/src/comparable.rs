//! The value-equality capability.

use trellis_foundation::{Stateful, deep_equal};

/// Decides value equality against another, possibly unrelated, stateful
/// instance.
///
/// Equality keys on concrete type identity first: two different types with
/// identical state shapes are never equal. States are then compared by the
/// deep oracle, which delegates to nested instances' own equality.
pub trait Comparable {
    /// Returns true if `other` has the same concrete type and a deeply
    /// equal state.
    fn equals(&self, other: &dyn Stateful) -> bool;
}

impl<T: Stateful> Comparable for T {
    fn equals(&self, other: &dyn Stateful) -> bool {
        self.as_any().type_id() == other.as_any().type_id()
            && deep_equal(&self.state(), &other.state())
    }
}
