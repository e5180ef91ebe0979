// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chrono::NaiveDateTime;
use logbook_type::{Error, Result, Severity};
use serde::Serialize;

use crate::{date::DateFormat, value::Row};

/// A log event as read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
	/// Identifier assigned by the store
	pub id: u64,
	pub severity: Severity,
	/// Human readable name of `severity`
	pub severity_name: &'static str,
	pub message: String,
	pub file: Option<String>,
	pub line: Option<u32>,
	pub notes: Option<String>,
	/// Insertion time assigned by the store
	pub date: NaiveDateTime,
	/// `date` in the configured display format
	pub display_date: String,
}

impl LogRecord {
	/// Decode a `SELECT *` row of the log table.
	///
	/// A `notes` column is optional so tables created without it stay readable.
	pub fn from_row(row: &Row, date_format: &DateFormat) -> Result<Self> {
		let id = row.required_integer("id")?;
		let id = u64::try_from(id).map_err(|_| Error::invalid_row(format!("negative id {}", id)))?;

		let severity = Severity::try_from(row.required_integer("level")?)?;

		let line = row
			.integer("line")?
			.map(|line| u32::try_from(line).map_err(|_| Error::invalid_row(format!("line {} out of range", line))))
			.transpose()?;

		let date = DateFormat::parse_stored(row.required_text("date")?)?;

		Ok(Self {
			id,
			severity,
			severity_name: severity.name(),
			message: row.required_text("message")?.to_string(),
			file: row.text("file")?.map(str::to_string),
			line,
			notes: row.text("notes")?.map(str::to_string),
			display_date: date_format.format(&date),
			date,
		})
	}
}
