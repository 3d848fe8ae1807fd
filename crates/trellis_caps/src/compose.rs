//! Composition of capabilities into a type descriptor.
//!
//! `compose` is the analogue of building a base class out of N capability
//! markers: it validates every typeguard up front and yields a [`Composed`]
//! descriptor that a concrete type uses at construction time
//! ([`Composed::construct`]) and that callers can use as a conformance test
//! ([`Composed::is`]).

use std::fmt;

use trellis_foundation::{Error, Result};

use crate::capability::Capability;
use crate::probe::{CapabilitySet, Instance, Probe};

/// A validated set of capabilities attached in a fixed order.
///
/// Built once at type-definition time; construction of instances threads
/// each one through the attach hooks in attachment order.
#[derive(Clone)]
pub struct Composed {
    caps: Vec<Capability>,
}

/// Composes capabilities into a [`Composed`] descriptor.
///
/// # Errors
///
/// Fails fast with a missing-typeguard error if any capability (or any
/// part of a merged capability) lacks its runtime test.
pub fn compose(caps: Vec<Capability>) -> Result<Composed> {
    for cap in &caps {
        if !cap.has_test() {
            return Err(Error::missing_typeguard(cap.name()));
        }
    }
    Ok(Composed { caps })
}

impl Composed {
    /// Attaches further capabilities, preserving order.
    ///
    /// # Errors
    ///
    /// Fails with a missing-typeguard error if any new capability lacks a
    /// test; the existing capabilities are already validated.
    pub fn extend(&self, more: Vec<Capability>) -> Result<Self> {
        let mut caps = self.caps.clone();
        caps.extend(more);
        compose(caps)
    }

    /// Threads an instance through every attach hook in attachment order.
    ///
    /// Each hook may return a replacement instance; the final instance is
    /// whatever the last hook produced.
    #[must_use]
    pub fn construct(&self, instance: Instance) -> Instance {
        self.caps
            .iter()
            .fold(instance, |instance, cap| cap.attach(instance))
    }

    /// Returns true if the instance conforms to every composed capability.
    #[must_use]
    pub fn is(&self, x: &dyn Probe) -> bool {
        self.caps.iter().all(|cap| cap.is(x))
    }

    /// Returns the composed capabilities in attachment order.
    #[must_use]
    pub fn capabilities(&self) -> &[Capability] {
        &self.caps
    }

    /// Returns the flattened name set, for composites to stamp on
    /// themselves.
    #[must_use]
    pub fn names(&self) -> CapabilitySet {
        fn collect(cap: &Capability, set: &mut CapabilitySet) {
            set.add(cap.name());
            for part in cap.parts() {
                collect(part, set);
            }
        }

        let mut set = CapabilitySet::new();
        for cap in &self.caps {
            collect(cap, &mut set);
        }
        set
    }
}

impl fmt::Debug for Composed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composed").field("caps", &self.caps).finish()
    }
}
