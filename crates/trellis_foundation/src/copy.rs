//! The default leaf copier.
//!
//! Duplicates a plain state tree: composite values are rebuilt, embedded
//! nodes are duplicated into fresh handles, scalars are cloned. Structural
//! types only special-case embedded nodes; everything else in their state
//! is copied by this collaborator.
//!
//! The walk carries a visited set of node handles, so a state tree that
//! reaches the same node through a cycle fails with
//! [`ErrorKind::CyclicState`](crate::ErrorKind::CyclicState) instead of
//! recursing without bound.

use crate::error::{Error, Result};
use crate::state::State;
use crate::stateful::NodeRef;

/// Returns a duplicate of the given state tree.
///
/// # Errors
///
/// Returns [`ErrorKind::CyclicState`](crate::ErrorKind::CyclicState) if the
/// tree contains a reference cycle through an embedded node.
pub fn copy_state(state: &State) -> Result<State> {
    let mut seen = Vec::new();
    copy_inner(state, &mut seen)
}

fn copy_inner(state: &State, seen: &mut Vec<NodeRef>) -> Result<State> {
    match state {
        State::List(items) => {
            let mut copied = Vec::with_capacity(items.len());
            for item in items.iter() {
                copied.push(copy_inner(item, seen)?);
            }
            Ok(State::List(copied.into_iter().collect()))
        }
        State::Record(fields) => {
            let mut copied = crate::collections::StateMap::new();
            for (key, value) in fields.iter() {
                copied = copied.insert(key.clone(), copy_inner(value, seen)?);
            }
            Ok(State::Record(copied))
        }
        State::Node(node) => {
            if seen.iter().any(|n| n.ptr_eq(node)) {
                return Err(Error::cyclic_state());
            }
            seen.push(node.clone());
            // The node's own state may embed further nodes; walk it so a
            // cycle anywhere below is still caught.
            copy_inner(&node.state(), seen)?;
            seen.pop();
            Ok(State::Node(NodeRef::from_box(node.duplicate())))
        }
        scalar => Ok(scalar.clone()),
    }
}
