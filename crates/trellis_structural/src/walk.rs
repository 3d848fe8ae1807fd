//! The deep path walk: descent, flattening, and copy-on-write merging.
//!
//! These are the algorithms behind [`Structural::get_in`] and
//! [`Structural::set_in`]; the dyn-typed entry points here also serve the
//! recursion into embedded nodes, whose concrete types are erased.
//!
//! [`Structural::get_in`]: crate::Structural::get_in
//! [`Structural::set_in`]: crate::Structural::set_in

use trellis_foundation::{Error, Key, NodeRef, Path, Result, State, StateMap, Stateful};

/// Reads the deep, flattened state at a path of a type-erased instance.
///
/// Descends from the instance's state one key at a time, stepping through
/// record fields and into embedded nodes' states. The terminal value is
/// then flattened: every reachable node is replaced by its own flattened
/// state, so the result contains only plain values.
///
/// # Errors
///
/// - Invalid-state error if any step of the path is absent or lands on a
///   non-navigable value.
/// - Cyclic-state error if flattening revisits a node already on the
///   current walk.
pub fn get_in_dyn(x: &dyn Stateful, path: &Path) -> Result<State> {
    let terminal = descend(&x.state(), path)?;
    let mut seen = Vec::new();
    flatten(&terminal, &mut seen)
}

/// Applies a deep, path-addressed update to a type-erased instance in
/// place.
///
/// The update value is nested backward through the path into a partial
/// record, merged against the previous state with the copy-on-write rules
/// (see [`Structural::set_in`](crate::Structural::set_in)), and handed to
/// the instance's `set_state`.
///
/// # Errors
///
/// - Invalid-state error if the path does not exist in the current state,
///   or if a non-record value is assigned over a record state at the root.
/// - Scalar-state error if a non-empty path targets a scalar state.
pub fn set_in_dyn(x: &mut dyn Stateful, path: &Path, value: State) -> Result<()> {
    let prev = x.state();

    let Some((head, rest)) = path.split_first() else {
        // Root write: merge record-over-record, replace scalar wholesale.
        let update = match (&prev, value) {
            (State::Record(prev_fields), State::Record(update_fields)) => {
                State::Record(merge_fields(prev_fields, &update_fields, path)?)
            }
            (State::Record(_), _) => return Err(Error::invalid_state(path)),
            (_, replacement) => replacement,
        };
        return x.set_state(update);
    };

    let State::Record(prev_fields) = &prev else {
        return Err(Error::scalar_state(prev.kind()));
    };
    // The whole path must exist before any part of the update is applied.
    descend(&prev, path)?;

    let update = StateMap::new().insert(head, nest(&rest, value));
    let merged = merge_fields(prev_fields, &update, path)?;
    x.set_state(State::Record(merged))
}

/// Walks a state tree down a path without flattening.
pub(crate) fn descend(state: &State, path: &Path) -> Result<State> {
    let mut current = state.clone();
    for key in path {
        let fields = match &current {
            State::Record(fields) => fields.clone(),
            State::Node(node) => match node.state() {
                State::Record(fields) => fields,
                _ => return Err(Error::invalid_state(path)),
            },
            _ => return Err(Error::invalid_state(path)),
        };
        current = fields
            .get(key)
            .cloned()
            .ok_or_else(|| Error::invalid_state(path))?;
    }
    Ok(current)
}

/// Replaces every embedded node in a value with its own flattened state.
fn flatten(value: &State, seen: &mut Vec<NodeRef>) -> Result<State> {
    match value {
        State::Node(node) => {
            if seen.iter().any(|n| n.ptr_eq(node)) {
                return Err(Error::cyclic_state());
            }
            seen.push(node.clone());
            let flat = flatten(&node.state(), seen);
            seen.pop();
            flat
        }
        State::Record(fields) => {
            let mut flattened = StateMap::new();
            for (key, field) in fields.iter() {
                flattened = flattened.insert(key.clone(), flatten(field, seen)?);
            }
            Ok(State::Record(flattened))
        }
        State::List(items) => {
            let mut flattened = Vec::with_capacity(items.len());
            for item in items.iter() {
                flattened.push(flatten(item, seen)?);
            }
            Ok(State::List(flattened.into_iter().collect()))
        }
        scalar => Ok(scalar.clone()),
    }
}

/// Nests a value backward through a path into a chain of one-field records.
fn nest(path: &Path, value: State) -> State {
    let mut nested = value;
    for key in path.into_iter().rev() {
        nested = State::Record(StateMap::new().insert(key.clone(), nested));
    }
    nested
}

/// Merges a partial update record against the previous state's top level.
///
/// Rules, per update key:
/// - the key must already exist in the previous state;
/// - previous value is a node and the update is not: patch the existing
///   sub-instance (preserving its concrete type and untouched fields);
/// - the update is itself a node: full replacement, type swap and all;
/// - anything else: the update value wins wholesale.
fn merge_fields(
    prev: &StateMap<Key, State>,
    update: &StateMap<Key, State>,
    at: &Path,
) -> Result<StateMap<Key, State>> {
    let mut merged = StateMap::new();
    for (key, update_value) in update.iter() {
        let prev_value = prev
            .get(key)
            .ok_or_else(|| Error::invalid_state(at.clone().key(key)))?;
        let resolved = match (prev_value, update_value) {
            (State::Node(_), State::Node(_)) => update_value.clone(),
            (State::Node(node), patch) => State::Node(patch_node(node, patch.clone())?),
            _ => update_value.clone(),
        };
        merged = merged.insert(key.clone(), resolved);
    }
    Ok(merged)
}

/// Recurses an update into an embedded node: duplicate, root-merge, rewrap.
fn patch_node(node: &NodeRef, patch: State) -> Result<NodeRef> {
    let mut duplicate = node.duplicate();
    set_in_dyn(duplicate.as_mut(), &Path::root(), patch)?;
    Ok(NodeRef::from_box(duplicate))
}
