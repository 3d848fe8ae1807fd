//! Capability markers and merging.

use std::fmt;
use std::sync::Arc;

use trellis_foundation::{Error, Result};

use crate::probe::{Instance, Probe};

/// Runtime typeguard for a capability.
pub type TestFn = Arc<dyn Fn(&dyn Probe) -> bool + Send + Sync>;

/// Hook invoked when a capability is attached to an instance under
/// construction; may return a replacement instance.
pub type AttachFn = Arc<dyn Fn(Instance) -> Instance + Send + Sync>;

/// A named, abstract unit of behavior with a runtime conformance test.
///
/// A capability never carries constructor logic of its own; it contributes
/// a typeguard and, optionally, an attach hook that runs once per instance
/// at construction.
#[derive(Clone)]
pub struct Capability {
    name: &'static str,
    test: Option<TestFn>,
    attach: Option<AttachFn>,
    parts: Vec<Capability>,
}

impl Capability {
    /// Creates a bare capability with no typeguard.
    ///
    /// Composing a bare capability fails at composition time; callers add a
    /// test via [`with_test`](Self::with_test) or use
    /// [`marker`](Self::marker).
    #[must_use]
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            test: None,
            attach: None,
            parts: Vec::new(),
        }
    }

    /// Creates a capability whose typeguard is the structural membership
    /// test `x.provides(name)`.
    #[must_use]
    pub fn marker(name: &'static str) -> Self {
        Self::named(name).with_test(move |x| x.provides(name))
    }

    /// Replaces the typeguard.
    #[must_use]
    pub fn with_test(mut self, test: impl Fn(&dyn Probe) -> bool + Send + Sync + 'static) -> Self {
        self.test = Some(Arc::new(test));
        self
    }

    /// Replaces the attach hook.
    #[must_use]
    pub fn with_attach(mut self, attach: impl Fn(Instance) -> Instance + Send + Sync + 'static) -> Self {
        self.attach = Some(Arc::new(attach));
        self
    }

    /// Returns this capability's name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if this capability carries a typeguard.
    #[must_use]
    pub fn has_test(&self) -> bool {
        self.test.is_some()
    }

    /// Runs the typeguard against an instance.
    ///
    /// A capability without a typeguard conforms to nothing; composition
    /// rejects such capabilities before they can be asked.
    #[must_use]
    pub fn is(&self, x: &dyn Probe) -> bool {
        self.test.as_ref().is_some_and(|test| test(x))
    }

    /// Runs the attach hook, if any, returning the (possibly replaced)
    /// instance.
    #[must_use]
    pub fn attach(&self, instance: Instance) -> Instance {
        match &self.attach {
            Some(hook) => hook(instance),
            None => instance,
        }
    }

    /// Looks up a constituent capability by name.
    ///
    /// A merged capability exposes every part's surface through its own
    /// name, recursively, so consumers can reach a sub-capability without
    /// knowing how the merge was layered.
    #[must_use]
    pub fn part(&self, name: &str) -> Option<&Capability> {
        if self.name == name {
            return Some(self);
        }
        self.parts.iter().find_map(|p| p.part(name))
    }

    /// Returns the constituent capabilities of a merge (empty for leaves).
    #[must_use]
    pub fn parts(&self) -> &[Capability] {
        &self.parts
    }

    /// Merges capabilities into one virtual capability.
    ///
    /// The merged typeguard is the logical AND of every part's typeguard;
    /// the merged attach hook threads the instance through every part's
    /// hook in order.
    ///
    /// # Errors
    ///
    /// Fails with a missing-typeguard error if any part lacks a test. This
    /// is a programmer error surfaced at composition time, not at use time.
    pub fn merge(name: &'static str, parts: Vec<Capability>) -> Result<Self> {
        let mut tests = Vec::with_capacity(parts.len());
        for part in &parts {
            match &part.test {
                Some(test) => tests.push(Arc::clone(test)),
                None => return Err(Error::missing_typeguard(part.name)),
            }
        }
        let test: TestFn = Arc::new(move |x| tests.iter().all(|test| test(x)));

        let hooks: Vec<AttachFn> = parts.iter().filter_map(|p| p.attach.clone()).collect();
        let attach: Option<AttachFn> = if hooks.is_empty() {
            None
        } else {
            Some(Arc::new(move |mut instance| {
                for hook in &hooks {
                    instance = hook(instance);
                }
                instance
            }))
        };

        Ok(Self {
            name,
            test: Some(test),
            attach,
            parts,
        })
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("name", &self.name)
            .field("has_test", &self.test.is_some())
            .field("has_attach", &self.attach.is_some())
            .field("parts", &self.parts)
            .finish()
    }
}
