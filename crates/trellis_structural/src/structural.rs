//! The composite structural capability.

use trellis_foundation::{Path, Result, State, Stateful};

use crate::comparable::Comparable;
use crate::copyable::Copyable;
use crate::walk;

/// The full structural protocol: stateful, copyable, comparable, and deep
/// path-addressable.
///
/// Implemented automatically for every `Stateful + Clone` type. All
/// operations derive from the one symbolic accessor pair; concrete types
/// never re-implement tree recursion.
pub trait Structural: Stateful + Copyable + Comparable + Clone {
    /// Reads the deep, flattened state at a path.
    ///
    /// The returned tree contains only plain values; every embedded node at
    /// or below the path is replaced by its own flattened state.
    ///
    /// # Errors
    ///
    /// Invalid-state error for a path absent from the current state;
    /// cyclic-state error if the tree references itself.
    fn get_in<P: Into<Path>>(&self, path: P) -> Result<State> {
        walk::get_in_dyn(self, &path.into())
    }

    /// Reads the whole flattened state.
    ///
    /// # Errors
    ///
    /// Cyclic-state error if the tree references itself.
    fn deep_state(&self) -> Result<State> {
        walk::get_in_dyn(self, &Path::root())
    }

    /// Applies a deep, path-addressed update in place.
    ///
    /// A partial update aimed at an embedded node recurses into the
    /// existing sub-instance, preserving its concrete type and untouched
    /// fields; an update that is itself a node replaces the previous
    /// sub-instance outright.
    ///
    /// Callers building immutable pipelines want [`apply`](Self::apply);
    /// `set_in` is the in-place half it is built from.
    ///
    /// # Errors
    ///
    /// Invalid-state error for a path absent from the current state or a
    /// non-record root assignment over a record state; scalar-state error
    /// for a non-empty path against a scalar state.
    fn set_in<P: Into<Path>, V: Into<State>>(&mut self, path: P, value: V) -> Result<()> {
        walk::set_in_dyn(self, &path.into(), value.into())
    }

    /// Returns an updated copy; the original is never mutated.
    ///
    /// This is the single externally-visible write operation: copy, then
    /// [`set_in`](Self::set_in) on the copy.
    ///
    /// # Errors
    ///
    /// Same conditions as [`set_in`](Self::set_in).
    fn apply<P: Into<Path>, V: Into<State>>(&self, path: P, value: V) -> Result<Self> {
        let mut next = self.copy();
        next.set_in(path, value)?;
        Ok(next)
    }

    /// Returns a copy with a root-level update applied.
    ///
    /// # Errors
    ///
    /// Same conditions as [`set_in`](Self::set_in) with an empty path.
    fn apply_root<V: Into<State>>(&self, value: V) -> Result<Self> {
        self.apply(Path::root(), value)
    }
}

impl<T: Stateful + Clone> Structural for T {}
