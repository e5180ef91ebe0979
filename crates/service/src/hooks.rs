// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Process-wide error hooks backed by the panic hook and a drop guard.

use std::{
	mem,
	panic::{self, PanicHookInfo},
	sync::{
		Arc,
		atomic::{AtomicBool, Ordering},
	},
};

use logbook_core::{
	RuntimeError,
	interface::{ErrorHandler, HookRegistry, ShutdownHandler},
};
use logbook_type::Severity;
use parking_lot::{Mutex, RwLock};

/// Error hooks for the current process.
///
/// Runtime errors are delivered with [`ProcessHooks::report`]. A panic
/// recorded by [`ProcessHooks::install_panic_hook`] becomes the last fatal
/// condition, handed to every shutdown handler when [`ProcessHooks::shutdown`]
/// runs or the last clone is dropped, whichever comes first.
#[derive(Clone, Default)]
pub struct ProcessHooks(Arc<HooksInner>);

#[derive(Default)]
struct HooksInner {
	error_handler: RwLock<Option<ErrorHandler>>,
	shutdown_handlers: Mutex<Vec<ShutdownHandler>>,
	last_fatal: Mutex<Option<RuntimeError>>,
	finished: AtomicBool,
}

impl HooksInner {
	fn finish(&self) {
		if self.finished.swap(true, Ordering::AcqRel) {
			return;
		}

		let last_fatal = self.last_fatal.lock().take();
		let handlers = mem::take(&mut *self.shutdown_handlers.lock());
		for handler in handlers {
			handler(last_fatal.clone());
		}
	}
}

impl Drop for HooksInner {
	fn drop(&mut self) {
		self.finish();
	}
}

impl ProcessHooks {
	pub fn new() -> Self {
		Self::default()
	}

	/// Deliver a runtime error to the registered handler. Returns whether a
	/// handler received it.
	pub fn report(&self, error: RuntimeError) -> bool {
		match self.0.error_handler.read().as_ref() {
			Some(handler) => {
				handler(error);
				true
			}
			None => false,
		}
	}

	/// Remember `error` as the condition the process is dying of.
	pub fn record_fatal(&self, error: RuntimeError) {
		*self.0.last_fatal.lock() = Some(error);
	}

	pub fn last_fatal(&self) -> Option<RuntimeError> {
		self.0.last_fatal.lock().clone()
	}

	/// Chain a panic hook recording every panic as the last fatal condition.
	/// The previously installed hook still runs afterwards.
	pub fn install_panic_hook(&self) {
		let inner = Arc::downgrade(&self.0);
		let previous = panic::take_hook();
		panic::set_hook(Box::new(move |info| {
			if let Some(inner) = inner.upgrade() {
				*inner.last_fatal.lock() = Some(fatal_from_panic(info));
			}
			previous(info);
		}));
	}

	/// Run the shutdown handlers now. Later calls do nothing.
	pub fn shutdown(&self) {
		self.0.finish();
	}

	pub fn is_shut_down(&self) -> bool {
		self.0.finished.load(Ordering::Acquire)
	}
}

impl HookRegistry for ProcessHooks {
	fn set_error_handler(&mut self, handler: ErrorHandler) {
		*self.0.error_handler.write() = Some(handler);
	}

	fn register_shutdown(&mut self, handler: ShutdownHandler) {
		self.0.shutdown_handlers.lock().push(handler);
	}
}

fn fatal_from_panic(info: &PanicHookInfo<'_>) -> RuntimeError {
	let payload = info.payload();
	let message = if let Some(message) = payload.downcast_ref::<&str>() {
		message.to_string()
	} else if let Some(message) = payload.downcast_ref::<String>() {
		message.clone()
	} else {
		"panic with non-string payload".to_string()
	};

	let error = RuntimeError::new(Severity::Error.code(), message);
	match info.location() {
		Some(location) => error.with_location(location.file(), location.line()),
		None => error,
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::AtomicUsize;

	use super::*;

	#[test]
	fn test_report_without_handler() {
		let hooks = ProcessHooks::new();
		assert!(!hooks.report(RuntimeError::new(2, "x")));
	}

	#[test]
	fn test_report_reaches_handler() {
		let seen = Arc::new(Mutex::new(Vec::new()));
		let mut hooks = ProcessHooks::new();
		let sink = Arc::clone(&seen);
		hooks.set_error_handler(Box::new(move |error| sink.lock().push(error)));

		assert!(hooks.report(RuntimeError::new(2, "x")));
		assert_eq!(seen.lock().len(), 1);
	}

	#[test]
	fn test_shutdown_runs_once_with_last_fatal() {
		let calls = Arc::new(Mutex::new(Vec::new()));
		let mut hooks = ProcessHooks::new();
		let sink = Arc::clone(&calls);
		hooks.register_shutdown(Box::new(move |fatal| sink.lock().push(fatal)));

		hooks.record_fatal(RuntimeError::new(1, "out of memory"));
		hooks.shutdown();
		hooks.shutdown();
		drop(hooks);

		let calls = calls.lock();
		assert_eq!(calls.len(), 1);
		assert_eq!(calls[0].as_ref().map(|e| e.message.as_str()), Some("out of memory"));
	}

	#[test]
	fn test_drop_of_last_clone_runs_shutdown() {
		let count = Arc::new(AtomicUsize::new(0));
		let mut hooks = ProcessHooks::new();
		let counter = Arc::clone(&count);
		hooks.register_shutdown(Box::new(move |fatal| {
			assert!(fatal.is_none());
			counter.fetch_add(1, Ordering::SeqCst);
		}));

		let clone = hooks.clone();
		drop(hooks);
		assert_eq!(count.load(Ordering::SeqCst), 0);
		assert!(!clone.is_shut_down());

		drop(clone);
		assert_eq!(count.load(Ordering::SeqCst), 1);
	}
}
