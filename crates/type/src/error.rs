// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("unknown severity code {code}")]
	UnknownSeverity {
		code: i64,
	},

	#[error("unknown severity name '{name}'")]
	UnknownSeverityName {
		name: String,
	},

	#[error("invalid identifier '{identifier}': only [A-Za-z0-9_] is allowed and it must not start with a digit")]
	InvalidIdentifier {
		identifier: String,
	},

	#[error("cannot order log by '{column}'")]
	InvalidOrderColumn {
		column: String,
	},

	#[error("invalid order direction '{direction}', expected ASC or DESC")]
	InvalidOrderDirection {
		direction: String,
	},

	#[error("invalid limit '{limit}'")]
	InvalidLimit {
		limit: String,
	},

	#[error("invalid date format '{format}'")]
	InvalidDateFormat {
		format: String,
	},

	#[error("malformed log row: {reason}")]
	InvalidRow {
		reason: String,
	},

	#[error("storage error: {message}")]
	Storage {
		message: String,
	},

	#[error("configuration error: {message}")]
	Config {
		message: String,
	},
}

impl Error {
	/// Stable diagnostic code for this error.
	pub fn code(&self) -> &'static str {
		match self {
			Error::UnknownSeverity {
				..
			} => "LOG_001",
			Error::UnknownSeverityName {
				..
			} => "LOG_002",
			Error::InvalidIdentifier {
				..
			} => "LOG_003",
			Error::InvalidOrderColumn {
				..
			} => "LOG_004",
			Error::InvalidOrderDirection {
				..
			} => "LOG_005",
			Error::InvalidLimit {
				..
			} => "LOG_006",
			Error::InvalidDateFormat {
				..
			} => "LOG_007",
			Error::InvalidRow {
				..
			} => "LOG_008",
			Error::Storage {
				..
			} => "LOG_009",
			Error::Config {
				..
			} => "LOG_010",
		}
	}

	pub fn storage(message: impl Into<String>) -> Self {
		Error::Storage {
			message: message.into(),
		}
	}

	pub fn invalid_row(reason: impl Into<String>) -> Self {
		Error::InvalidRow {
			reason: reason.into(),
		}
	}
}
