//! Runtime conformance testing.
//!
//! Composite types are synthesized, not inherited, so capability membership
//! cannot ride on any inheritance chain. [`Probe`] is the structural
//! substitute: an instance reports which capabilities it provides, and a
//! capability's typeguard asks.

use std::any::Any;

/// A boxed instance moving through attach hooks during construction.
pub type Instance = Box<dyn Probe>;

/// Structural conformance test for composed instances.
///
/// `provides` answers "does this instance carry that capability?" — the
/// runtime equivalent of a symbolic-key existence check, independent of any
/// type hierarchy.
pub trait Probe: Any + Send + Sync {
    /// Returns true if this instance provides the named capability.
    fn provides(&self, capability: &str) -> bool;

    /// Upcasts to [`Any`] for downcasting back to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// The set of capability names a composite type stamps on itself.
///
/// Concrete [`Probe`] implementations typically hold one of these as a
/// constant and delegate `provides` to [`contains`](Self::contains).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    names: Vec<&'static str>,
}

impl CapabilitySet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Creates a set from a slice of capability names.
    #[must_use]
    pub fn of(names: &[&'static str]) -> Self {
        let mut set = Self::new();
        for name in names {
            set.add(name);
        }
        set
    }

    /// Adds a capability name; duplicates are ignored.
    pub fn add(&mut self, name: &'static str) {
        if !self.contains(name) {
            self.names.push(name);
        }
    }

    /// Returns true if the set contains the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| *n == name)
    }

    /// Returns the union of this set and another.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for name in &other.names {
            merged.add(name);
        }
        merged
    }

    /// Returns the number of names in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }
}
