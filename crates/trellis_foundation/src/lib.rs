//! Core types for the Trellis structural state protocol.
//!
//! This crate provides:
//! - [`State`] - The value tree every stateful instance exposes
//! - [`Key`] and [`Path`] - Property-key addressing into nested state
//! - [`Stateful`] and [`NodeRef`] - The symbolic accessor seam and the
//!   handle that embeds one stateful instance inside another's state
//! - [`Error`] - Error taxonomy for navigation, shape, and composition faults
//! - Persistent collections ([`StateVec`], [`StateMap`])
//! - [`deep_equal`] - The deep value-equality oracle
//! - [`copy_state`] - The default leaf copier with cycle protection

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod copy;
pub mod equality;
pub mod error;
pub mod path;
pub mod state;
pub mod stateful;

pub use collections::{StateMap, StateVec};
pub use copy::copy_state;
pub use equality::deep_equal;
pub use error::{Error, ErrorKind, Result};
pub use path::{Key, Path};
pub use state::State;
pub use stateful::{NodeRef, Stateful};
