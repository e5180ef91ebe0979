// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chrono::{DateTime, Utc};
use logbook_type::Severity;
use serde::{Deserialize, Serialize};

/// One log occurrence, immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEvent {
	severity: Severity,
	message: String,
	file: Option<String>,
	line: Option<u32>,
	notes: Option<String>,
	timestamp: DateTime<Utc>,
}

impl LogEvent {
	pub fn new(severity: Severity, message: impl Into<String>) -> Self {
		Self {
			severity,
			message: message.into(),
			file: None,
			line: None,
			notes: None,
			timestamp: Utc::now(),
		}
	}

	pub fn with_location(self, file: impl Into<String>, line: u32) -> Self {
		self.with_file(file).with_line(line)
	}

	pub fn with_file(mut self, file: impl Into<String>) -> Self {
		self.file = Some(file.into());
		self
	}

	pub fn with_line(mut self, line: u32) -> Self {
		self.line = Some(line);
		self
	}

	pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
		self.notes = Some(notes.into());
		self
	}

	pub fn severity(&self) -> Severity {
		self.severity
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn file(&self) -> Option<&str> {
		self.file.as_deref()
	}

	pub fn line(&self) -> Option<u32> {
		self.line
	}

	pub fn notes(&self) -> Option<&str> {
		self.notes.as_deref()
	}

	pub fn timestamp(&self) -> DateTime<Utc> {
		self.timestamp
	}
}

/// Payload delivered by a runtime error hook.
///
/// The code is kept raw; it is only resolved against the severity table when
/// the error is logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeError {
	pub code: u32,
	pub message: String,
	pub file: Option<String>,
	pub line: Option<u32>,
	/// Free-form state captured at the error site. Never rendered or stored.
	pub context: Option<String>,
}

impl RuntimeError {
	pub fn new(code: u32, message: impl Into<String>) -> Self {
		Self {
			code,
			message: message.into(),
			file: None,
			line: None,
			context: None,
		}
	}

	pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
		self.file = Some(file.into());
		self.line = Some(line);
		self
	}

	pub fn with_context(mut self, context: impl Into<String>) -> Self {
		self.context = Some(context.into());
		self
	}
}

impl From<LogEvent> for RuntimeError {
	fn from(event: LogEvent) -> Self {
		Self {
			code: event.severity.code(),
			message: event.message,
			file: event.file,
			line: event.line,
			context: None,
		}
	}
}
