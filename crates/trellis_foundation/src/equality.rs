//! The deep value-equality oracle.
//!
//! Compares state trees by shape and value: scalars by value (floats by
//! bits, so NaN equals itself and `Eq` stays reflexive), lists and records
//! recursively, and embedded nodes by delegating to their own structural
//! equality (same concrete type, deep-equal states).

use crate::state::State;

/// Returns true if two state values are deeply equal.
///
/// Values of different kinds are never equal; in particular an embedded
/// node never equals a plain record, even when their shapes match.
#[must_use]
pub fn deep_equal(a: &State, b: &State) -> bool {
    match (a, b) {
        (State::Nil, State::Nil) => true,
        (State::Bool(x), State::Bool(y)) => x == y,
        (State::Int(x), State::Int(y)) => x == y,
        (State::Float(x), State::Float(y)) => x.to_bits() == y.to_bits(),
        (State::String(x), State::String(y)) => x == y,
        (State::List(x), State::List(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(a, b)| deep_equal(a, b))
        }
        (State::Record(x), State::Record(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| deep_equal(v, w)))
        }
        (State::Node(x), State::Node(y)) => x.node_eq(y),
        _ => false,
    }
}
