// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{io, sync::Arc};

use logbook_core::{display::DisplayBlock, interface::DisplaySink};
use parking_lot::Mutex;

/// Display sink keeping every block in memory. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemorySink {
	blocks: Arc<Mutex<Vec<DisplayBlock>>>,
	failing: bool,
}

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	/// A sink whose writes fail after recording the block.
	pub fn failing() -> Self {
		Self {
			blocks: Arc::default(),
			failing: true,
		}
	}

	pub fn blocks(&self) -> Vec<DisplayBlock> {
		self.blocks.lock().clone()
	}

	pub fn len(&self) -> usize {
		self.blocks.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.blocks.lock().is_empty()
	}
}

impl DisplaySink for MemorySink {
	fn write(&self, block: &DisplayBlock) -> io::Result<()> {
		self.blocks.lock().push(block.clone());
		if self.failing {
			return Err(io::Error::new(io::ErrorKind::BrokenPipe, "display sink closed"));
		}
		Ok(())
	}
}
