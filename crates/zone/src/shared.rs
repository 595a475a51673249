//! A registry that can be replaced while readers hold on to the old one.

use std::sync::{Arc, PoisonError, RwLock};
use crate::registry::Registry;

/// Holds the current [`Registry`] behind an [`Arc`].
///
/// Readers take a [`snapshot`](SharedRegistry::snapshot) and use it for as long as they like. A
/// reload builds a complete new registry and swaps it in with
/// [`replace`](SharedRegistry::replace); snapshots taken earlier keep seeing the old one.
#[derive(Debug, Default)]
pub struct SharedRegistry {
	current: RwLock<Arc<Registry>>
}

impl SharedRegistry {
	/// Start sharing `registry`.
	pub fn new(registry: Registry) -> SharedRegistry {
		SharedRegistry { current: RwLock::new(Arc::new(registry)) }
	}

	/// The registry in effect right now.
	pub fn snapshot(&self) -> Arc<Registry> {
		// The lock only ever guards a whole-value swap, so a poisoned lock still holds a valid Arc
		self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
	}

	/// Swap in `registry`, returning the one it replaces.
	pub fn replace(&self, registry: Registry) -> Arc<Registry> {
		let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
		std::mem::replace(&mut *current, Arc::new(registry))
	}
}

impl From<Registry> for SharedRegistry {
	fn from(registry: Registry) -> Self {
		SharedRegistry::new(registry)
	}
}
