//! Trellis - capability composition and immutable structural state
//!
//! This crate re-exports all layers of the Trellis system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: trellis_structural — Copy/equality/deep path protocol, markers
//!          trellis_caps       — Capability composition engine
//! Layer 0: trellis_foundation — Core types (State, Path, Stateful, Error)
//! ```

pub use trellis_caps as caps;
pub use trellis_foundation as foundation;
pub use trellis_structural as structural;
