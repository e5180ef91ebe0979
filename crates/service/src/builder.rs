// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Builder pattern for configuring the log service

use std::sync::Arc;

use logbook_core::{DateFormat, DisplayFormat, TableName, interface::Database};
use logbook_type::{Result, Severity};

use crate::{
	LogConfig, LogService, SeverityFilter, SharedNotes,
	sink::{ConsoleSink, DisplaySink, WriterSink},
};

pub struct LogServiceBuilder {
	database: Arc<dyn Database>,
	config: LogConfig,
	sink: Option<Box<dyn DisplaySink>>,
	notes: Option<SharedNotes>,
}

impl LogServiceBuilder {
	pub fn new(database: Arc<dyn Database>) -> Self {
		Self {
			database,
			config: LogConfig::default(),
			sink: None,
			notes: None,
		}
	}

	/// Replace every setting at once.
	pub fn config(mut self, config: LogConfig) -> Self {
		self.config = config;
		self
	}

	pub fn with_sink(mut self, sink: impl DisplaySink + 'static) -> Self {
		self.sink = Some(Box::new(sink));
		self
	}

	pub fn with_console<F>(self, configurator: F) -> Self
	where
		F: FnOnce(ConsoleSink) -> ConsoleSink,
	{
		self.with_sink(configurator(ConsoleSink::new()))
	}

	pub fn with_notes(mut self, notes: SharedNotes) -> Self {
		self.notes = Some(notes);
		self
	}

	pub fn handle_runtime_errors(mut self, handle: bool) -> Self {
		self.config.handle_runtime_errors = handle;
		self
	}

	pub fn persist_runtime_errors(mut self, persist: bool) -> Self {
		self.config.persist_runtime_errors = persist;
		self
	}

	pub fn display_runtime_errors(mut self, display: bool) -> Self {
		self.config.display_runtime_errors = display;
		self
	}

	pub fn persist_custom_messages(mut self, persist: bool) -> Self {
		self.config.persist_custom_messages = persist;
		self
	}

	pub fn display_custom_messages(mut self, display: bool) -> Self {
		self.config.display_custom_messages = display;
		self
	}

	pub fn table_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.config.table_prefix = prefix.into();
		self
	}

	pub fn table_suffix(mut self, suffix: impl Into<String>) -> Self {
		self.config.table_suffix = suffix.into();
		self
	}

	pub fn date_display_format(mut self, format: impl Into<String>) -> Self {
		self.config.date_display_format = format.into();
		self
	}

	pub fn display_format(mut self, format: DisplayFormat) -> Self {
		self.config.display_format = format;
		self
	}

	pub fn filter_severity(mut self, severity: Severity, enabled: bool) -> Self {
		self.config.severity_filter.insert(severity.name().to_string(), enabled);
		self
	}

	/// Validate the settings and build the service. Without an explicit sink
	/// events are written to stdout in the configured display format.
	pub fn build(self) -> Result<LogService> {
		let table = TableName::new(&self.config.table_prefix, &self.config.table_suffix)?;
		let date_format = DateFormat::new(self.config.date_display_format.as_str())?;
		let filter = SeverityFilter::from_names(
			self.config.severity_filter.iter().map(|(name, enabled)| (name.as_str(), *enabled)),
		)?;

		let sink = match self.sink {
			Some(sink) => sink,
			None => Box::new(WriterSink::stdout(self.config.display_format)),
		};

		Ok(LogService {
			config: self.config,
			table,
			date_format,
			filter,
			database: self.database,
			sink,
			notes: self.notes,
		})
	}
}
