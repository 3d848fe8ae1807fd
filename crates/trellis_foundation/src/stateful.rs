//! The symbolic state accessor seam.
//!
//! [`Stateful`] is the one primitive every structural type implements: a
//! get/set pair over an opaque [`State`] snapshot. Every derived operation
//! in the protocol (copy, equality, deep path get/set) is built from this
//! seam alone, so a concrete type implements it exactly once.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::equality::deep_equal;
use crate::error::Result;
use crate::state::State;

/// The primitive capability: a symbolic accessor pair over an opaque state.
///
/// Contract:
/// - `state()` returns a snapshot sufficient to reconstruct an equivalent
///   instance via [`duplicate`](Stateful::duplicate) + `set_state`.
/// - `set_state` accepts partial record updates (only the touched top-level
///   keys present) for record-shaped states, or a whole replacement value
///   for scalar states. `set_state(state())` must be a no-op.
/// - `duplicate()` is an explicit clone producing a value with the same
///   invariants as normal construction, sharing no mutable ownership with
///   the original.
pub trait Stateful: Any + Send + Sync {
    /// Returns a snapshot of this instance's state.
    fn state(&self) -> State;

    /// Applies a (possibly partial) state update to this instance.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error if the update value has the wrong
    /// shape for a field.
    fn set_state(&mut self, update: State) -> Result<()>;

    /// Returns a boxed clone of this instance with its own state.
    fn duplicate(&self) -> Box<dyn Stateful>;

    /// Upcasts to [`Any`] for concrete-type identity tests and downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// A shared handle embedding one stateful instance inside another's state.
///
/// A `NodeRef` is held by reference inside [`State::Node`]; copies of the
/// enclosing tree share the same node until an update targets its sub-path,
/// at which point only that sub-path is replaced (copy-on-write at path
/// granularity).
#[derive(Clone)]
pub struct NodeRef(Arc<dyn Stateful>);

impl NodeRef {
    /// Wraps a stateful instance in a shared handle.
    pub fn new(node: impl Stateful) -> Self {
        Self(Arc::new(node))
    }

    /// Wraps an already-boxed stateful instance.
    #[must_use]
    pub fn from_box(node: Box<dyn Stateful>) -> Self {
        Self(Arc::from(node))
    }

    /// Returns a snapshot of the embedded instance's state.
    #[must_use]
    pub fn state(&self) -> State {
        self.0.state()
    }

    /// Returns the concrete type identity of the embedded instance.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.0.as_any().type_id()
    }

    /// Returns an owned clone of the embedded instance.
    #[must_use]
    pub fn duplicate(&self) -> Box<dyn Stateful> {
        self.0.duplicate()
    }

    /// Attempts to borrow the embedded instance as a concrete type.
    #[must_use]
    pub fn downcast_ref<T: Stateful>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Returns true if both handles point at the same instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Structural equality: same concrete type and deep-equal states.
    ///
    /// Two different concrete types with identical state shapes are never
    /// equal.
    #[must_use]
    pub fn node_eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id() && deep_equal(&self.state(), &other.state())
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({:?})", self.state())
    }
}
