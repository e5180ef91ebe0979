// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Fixed-layout diagnostic block shown for every displayed event.

use std::fmt::{self, Write};

use logbook_type::Severity;
use serde::{Deserialize, Serialize};

use crate::{date::DateFormat, event::LogEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
	#[default]
	Html,
	Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
	Custom,
	Runtime,
}

impl EventKind {
	pub fn heading(&self) -> &'static str {
		match self {
			EventKind::Custom => "Custom Message",
			EventKind::Runtime => "Runtime Error",
		}
	}
}

/// The fields of one event prepared for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBlock {
	pub kind: EventKind,
	pub severity: Severity,
	pub message: String,
	pub file: Option<String>,
	pub line: Option<u32>,
	pub notes: Option<String>,
	pub date: String,
}

impl DisplayBlock {
	pub fn new(kind: EventKind, event: &LogEvent, date_format: &DateFormat) -> Self {
		Self {
			kind,
			severity: event.severity(),
			message: event.message().to_string(),
			file: event.file().map(str::to_string),
			line: event.line(),
			notes: event.notes().map(str::to_string),
			date: date_format.format(&event.timestamp().naive_utc()),
		}
	}

	pub fn render(&self, format: DisplayFormat) -> String {
		match format {
			DisplayFormat::Html => self.to_html(),
			DisplayFormat::Text => self.to_string(),
		}
	}

	fn rows(&self) -> Vec<(&'static str, String)> {
		let mut rows = vec![
			("Level", format!("{} ({})", self.severity.name(), self.severity.code())),
			("Message", self.message.clone()),
			("File", self.file.clone().unwrap_or_default()),
			("Line", self.line.map(|line| line.to_string()).unwrap_or_default()),
		];
		if let Some(notes) = &self.notes {
			rows.push(("Notes", notes.clone()));
		}
		rows.push(("Date", self.date.clone()));
		rows
	}

	pub fn to_html(&self) -> String {
		let mut html = String::new();
		html.push_str("<hr>\n<p><b style=\"font-weight: bold\">[Logger] ");
		html.push_str(self.kind.heading());
		html.push_str(":</b></p>\n<table>\n<tbody>\n");
		for (label, value) in self.rows() {
			let _ = writeln!(html, "<tr><td>{}:</td><td>{}</td></tr>", label, escape_html(&value));
		}
		html.push_str("</tbody>\n</table>\n<hr>\n");
		html
	}
}

impl fmt::Display for DisplayBlock {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "[Logger] {}:", self.kind.heading())?;
		for (label, value) in self.rows() {
			writeln!(f, "  {:<8} {}", format!("{}:", label), value)?;
		}
		Ok(())
	}
}

fn escape_html(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());
	for c in value.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			c => escaped.push(c),
		}
	}
	escaped
}
