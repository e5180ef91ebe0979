// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// What happened to a logged event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutcome {
	/// The severity filter dropped the event before any sink saw it.
	Filtered,
	/// An insert was attempted; `true` when it affected at least one row.
	Persisted(bool),
	/// Persistence is disabled for this class of event. The event may or may
	/// not have been displayed.
	DisplayOnly,
}

impl LogOutcome {
	pub fn is_success(&self) -> bool {
		matches!(self, LogOutcome::Persisted(true) | LogOutcome::DisplayOnly)
	}

	/// The plain success flag, or `None` for filtered events.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			LogOutcome::Filtered => None,
			_ => Some(self.is_success()),
		}
	}
}
