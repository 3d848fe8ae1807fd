//! Runtime capability composition for Trellis.
//!
//! A [`Capability`] is a named, abstract unit of behavior carrying a runtime
//! conformance test and an optional attach hook. Capabilities are combined
//! onto concrete types without inheritance:
//!
//! - [`compose`] builds a [`Composed`] descriptor from a set of
//!   capabilities, failing fast at composition time if any capability lacks
//!   its typeguard.
//! - [`Capability::merge`] produces a virtual capability whose test is the
//!   logical AND of its parts and whose attach hook threads every part's
//!   hook in order.
//! - [`Composed::construct`] runs an instance through the attach hooks; a
//!   hook may return a replacement instance (the mechanism a call-signature
//!   wrapper uses).
//!
//! Static code should prefer plain trait bounds; this engine exists for the
//! places that need a runtime membership test ([`Probe::provides`]) or
//! hook-driven instance wrapping, and composition happens once at
//! type-definition time, never per instance.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod capability;
pub mod compose;
pub mod probe;

pub use capability::Capability;
pub use compose::{Composed, compose};
pub use probe::{CapabilitySet, Instance, Probe};
