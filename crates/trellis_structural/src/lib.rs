//! The structural state protocol.
//!
//! A type that implements the one
//! [`Stateful`](trellis_foundation::Stateful) accessor pair (plus `Clone`)
//! gets the whole protocol derived for free:
//!
//! - [`Copyable::copy`] - a new instance sharing no mutable state
//! - [`Comparable::equals`] - value equality keyed on concrete type identity
//! - [`Structural::get_in`] - deep, flattened state reads at a path
//! - [`Structural::set_in`] / [`Structural::apply`] - copy-on-write deep
//!   writes; `apply` is the single externally-visible write operation and
//!   never mutates its receiver
//!
//! Nested [`NodeRef`](trellis_foundation::NodeRef) values are treated as
//! sub-trees: a partial update recurses into the existing sub-instance and
//! preserves its concrete type, while an update that is itself a node
//! replaces the previous sub-instance outright.
//!
//! [`markers`] exposes the protocol's capabilities to the runtime
//! composition engine in `trellis_caps`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod comparable;
pub mod copyable;
pub mod markers;
pub mod structural;
pub mod walk;

pub use comparable::Comparable;
pub use copyable::Copyable;
pub use structural::Structural;
pub use walk::{get_in_dyn, set_in_dyn};
