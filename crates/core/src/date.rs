// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Write};

use chrono::{
	DateTime, NaiveDateTime, TimeZone, Utc,
	format::{Item, StrftimeItems},
};
use logbook_type::{Error, Result};

/// Layout of `date` values as written by the store.
const STORED_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

/// A validated strftime pattern used to present dates to humans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
	pub const DEFAULT: &'static str = "%d.%m.%Y - %H:%M:%S";

	pub fn new(format: impl Into<String>) -> Result<Self> {
		let format = format.into();
		if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
			return Err(Error::InvalidDateFormat {
				format,
			});
		}

		let date_format = Self(format);
		if date_format.render(&DateTime::UNIX_EPOCH.naive_utc()).is_err() {
			return Err(Error::InvalidDateFormat {
				format: date_format.0,
			});
		}
		Ok(date_format)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Render `date`, taken as UTC. Offset specifiers such as `%Z` render
	/// the UTC zone.
	pub fn format(&self, date: &NaiveDateTime) -> String {
		self.render(date).unwrap_or_else(|_| date.format(STORED_FORMATS[0]).to_string())
	}

	fn render(&self, date: &NaiveDateTime) -> std::result::Result<String, fmt::Error> {
		let mut rendered = String::new();
		write!(rendered, "{}", Utc.from_utc_datetime(date).format(&self.0))?;
		Ok(rendered)
	}

	/// Parse a `date` column value as produced by `CURRENT_TIMESTAMP`.
	pub fn parse_stored(value: &str) -> Result<NaiveDateTime> {
		STORED_FORMATS
			.iter()
			.find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
			.ok_or_else(|| Error::invalid_row(format!("unparseable date '{}'", value)))
	}
}

impl Default for DateFormat {
	fn default() -> Self {
		Self(Self::DEFAULT.to_string())
	}
}

impl fmt::Display for DateFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
