// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt;

use logbook_type::{Error, Result};

/// Name of the log table: `{prefix}log{suffix}`.
///
/// Only `[A-Za-z0-9_]` is accepted and the name must not start with a digit,
/// so it can be spliced into statements without quoting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
	pub const BASE: &'static str = "log";

	pub fn new(prefix: &str, suffix: &str) -> Result<Self> {
		let name = format!("{}{}{}", prefix, Self::BASE, suffix);
		let valid = name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
			&& !name.starts_with(|c: char| c.is_ascii_digit());

		if !valid {
			return Err(Error::InvalidIdentifier {
				identifier: name,
			});
		}

		Ok(Self(name))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Default for TableName {
	fn default() -> Self {
		Self(Self::BASE.to_string())
	}
}

impl fmt::Display for TableName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
