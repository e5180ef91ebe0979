// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Logging macros capturing the call site

/// Log a custom message with the caller's file and line.
///
/// ```ignore
/// log_custom!(service, "cache rebuilt in {}ms", elapsed);
/// ```
#[macro_export]
macro_rules! log_custom {
	($service:expr, $($arg:tt)+) => {
		$service.log_custom_message(format!($($arg)+), Some(file!()), Some(line!()), None)
	};
}

/// Log a runtime error of the given severity with the caller's file and line.
#[macro_export]
macro_rules! log_runtime {
	($service:expr, $severity:expr, $($arg:tt)+) => {
		$service.log_runtime_error(
			$crate::RuntimeError::new(($severity).code(), format!($($arg)+)).with_location(file!(), line!()),
			None,
		)
	};
}

/// Report a runtime error through process hooks with the caller's file and line.
#[macro_export]
macro_rules! report {
	($hooks:expr, $severity:expr, $($arg:tt)+) => {
		$hooks.report($crate::RuntimeError::new(($severity).code(), format!($($arg)+)).with_location(file!(), line!()))
	};
}
