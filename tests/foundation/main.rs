//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: State, Key/Path, Error, the deep-equality oracle,
//! the leaf copier, and persistent collections.

mod collections;
mod states;
