// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use parking_lot::RwLock;

/// Process-wide default notes, shared between the caller and the service.
///
/// The service reads the current value each time it logs, so the caller can
/// keep it pointed at whatever context is active (request id, job name, ...).
#[derive(Debug, Clone, Default)]
pub struct SharedNotes(Arc<RwLock<Option<String>>>);

impl SharedNotes {
	pub fn new(notes: impl Into<String>) -> Self {
		Self(Arc::new(RwLock::new(Some(notes.into()))))
	}

	pub fn empty() -> Self {
		Self::default()
	}

	pub fn set(&self, notes: impl Into<String>) {
		*self.0.write() = Some(notes.into());
	}

	pub fn clear(&self) {
		*self.0.write() = None;
	}

	pub fn get(&self) -> Option<String> {
		self.0.read().clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_clones_share_value() {
		let notes = SharedNotes::empty();
		let handle = notes.clone();
		assert_eq!(handle.get(), None);

		notes.set("job 7");
		assert_eq!(handle.get().as_deref(), Some("job 7"));

		handle.clear();
		assert_eq!(notes.get(), None);
	}
}
