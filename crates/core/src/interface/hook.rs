// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::event::RuntimeError;

/// Called for every runtime error reported while the process runs.
pub type ErrorHandler = Box<dyn Fn(RuntimeError) + Send + Sync>;

/// Called once when the process ends, with the last uncaught fatal condition
/// or `None` when the process ends normally.
pub type ShutdownHandler = Box<dyn FnOnce(Option<RuntimeError>) + Send>;

/// Process-wide error reporting mechanism the log service attaches to.
pub trait HookRegistry {
	/// Replace the current runtime error handler.
	fn set_error_handler(&mut self, handler: ErrorHandler);

	fn register_shutdown(&mut self, handler: ShutdownHandler);
}
