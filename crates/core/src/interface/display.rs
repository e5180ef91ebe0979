// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io;

use crate::display::DisplayBlock;

/// Destination of rendered events.
pub trait DisplaySink: Send + Sync {
	fn write(&self, block: &DisplayBlock) -> io::Result<()>;
}
