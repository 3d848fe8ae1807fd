//! Capability markers for the structural protocol.
//!
//! These expose the protocol's capabilities to the runtime composition
//! engine. `structural()` is a merge of the three primitives, so a merged
//! conformance test is the logical AND of theirs and
//! `structural().part(STATEFUL)` reaches the primitive seam directly.

use trellis_caps::Capability;
use trellis_foundation::Result;

/// Name of the stateful capability.
pub const STATEFUL: &str = "stateful";
/// Name of the copy capability.
pub const COPYABLE: &str = "copyable";
/// Name of the value-equality capability.
pub const COMPARABLE: &str = "comparable";
/// Name of the composite structural capability.
pub const STRUCTURAL: &str = "structural";

/// The primitive state-accessor capability.
#[must_use]
pub fn stateful() -> Capability {
    Capability::marker(STATEFUL)
}

/// The copy capability.
#[must_use]
pub fn copyable() -> Capability {
    Capability::marker(COPYABLE)
}

/// The value-equality capability.
#[must_use]
pub fn comparable() -> Capability {
    Capability::marker(COMPARABLE)
}

/// The composite structural capability: stateful AND copyable AND
/// comparable.
///
/// # Errors
///
/// Merging cannot fail for the core markers, but the composition-time
/// typeguard check is preserved so custom parts slot in uniformly.
pub fn structural() -> Result<Capability> {
    Capability::merge(STRUCTURAL, vec![stateful(), copyable(), comparable()])
}
