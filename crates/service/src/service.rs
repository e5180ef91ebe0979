// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use indexmap::IndexMap;
use logbook_core::{
	DateFormat, DisplayBlock, EventKind, LogEvent, LogQuery, LogRecord, RuntimeError, TableName, Value,
	interface::{Database, DisplaySink, ErrorHandler, HookRegistry, ShutdownHandler},
};
use logbook_type::{Result, Severity};
use tracing::{debug, instrument, trace, warn};

use crate::{LogConfig, LogOutcome, LogServiceBuilder, SeverityFilter, SharedNotes};

/// Filters, displays and stores log events.
pub struct LogService {
	pub(crate) config: LogConfig,
	pub(crate) table: TableName,
	pub(crate) date_format: DateFormat,
	pub(crate) filter: SeverityFilter,
	pub(crate) database: Arc<dyn Database>,
	pub(crate) sink: Box<dyn DisplaySink>,
	pub(crate) notes: Option<SharedNotes>,
}

impl LogService {
	pub fn builder(database: Arc<dyn Database>) -> LogServiceBuilder {
		LogServiceBuilder::new(database)
	}

	/// Service with `config`, printing to stdout and without default notes.
	pub fn new(config: LogConfig, database: Arc<dyn Database>) -> Result<Self> {
		LogServiceBuilder::new(database).config(config).build()
	}

	pub fn config(&self) -> &LogConfig {
		&self.config
	}

	pub fn table(&self) -> &TableName {
		&self.table
	}

	#[instrument(name = "logbook::service::create_tables", level = "debug", skip(self), fields(table = %self.table))]
	pub fn create_database_tables(&self) -> Result<bool> {
		let sql = format!(
			"CREATE TABLE {} (
				id INTEGER PRIMARY KEY AUTOINCREMENT,
				level INTEGER NOT NULL CHECK (level >= 0),
				message TEXT NOT NULL,
				file TEXT,
				line INTEGER CHECK (line >= 0),
				notes TEXT,
				date DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
			)",
			self.table
		);

		let created = self.database.execute(&sql)?;
		if !created {
			warn!(table = %self.table, "database refused to create the log table");
		}
		Ok(created)
	}

	/// Stored records keyed by id, in the order requested by `query`.
	#[instrument(name = "logbook::service::get_log", level = "debug", skip(self))]
	pub fn get_log(&self, query: &LogQuery) -> Result<IndexMap<u64, LogRecord>> {
		let (clause, params) = query.clause();
		let sql = format!("SELECT * FROM {} {}", self.table, clause);

		let rows = self.database.query(&sql, &params)?;
		rows.iter()
			.map(|row| LogRecord::from_row(row, &self.date_format).map(|record| (record.id, record)))
			.collect()
	}

	/// Log a message on behalf of the application. Custom messages are never
	/// filtered by severity.
	#[instrument(name = "logbook::service::log_custom_message", level = "trace", skip_all)]
	pub fn log_custom_message(
		&self,
		message: impl Into<String>,
		file: Option<&str>,
		line: Option<u32>,
		notes: Option<&str>,
	) -> LogOutcome {
		let event = self.event(Severity::Custom, message, file, line, notes);
		self.dispatch(
			EventKind::Custom,
			&event,
			self.config.display_custom_messages,
			self.config.persist_custom_messages,
		)
	}

	/// Log an error reported by the runtime.
	///
	/// Fails only when the code is not in the severity table; storage problems
	/// are reported as `Persisted(false)`.
	#[instrument(name = "logbook::service::log_runtime_error", level = "trace", skip_all, fields(code = error.code))]
	pub fn log_runtime_error(&self, error: RuntimeError, notes: Option<&str>) -> Result<LogOutcome> {
		let severity = Severity::from_code(error.code)?;
		if !self.filter.is_enabled(severity) {
			debug!(severity = %severity, "runtime error filtered");
			return Ok(LogOutcome::Filtered);
		}

		if let Some(context) = &error.context {
			trace!(context = %context, "runtime error context");
		}

		let event = self.event(severity, error.message, error.file.as_deref(), error.line, notes);
		Ok(self.dispatch(
			EventKind::Runtime,
			&event,
			self.config.display_runtime_errors,
			self.config.persist_runtime_errors,
		))
	}

	/// Log the condition that is taking the process down, if there is one.
	#[instrument(name = "logbook::service::log_shutdown_error", level = "trace", skip_all)]
	pub fn log_shutdown_error(&self, last_fatal: Option<RuntimeError>) -> Option<Result<LogOutcome>> {
		let fatal = last_fatal?;
		Some(self.log_runtime_error(fatal, None))
	}

	/// Attach to `registry` when runtime error handling is enabled. Returns
	/// whether anything was registered.
	pub fn install(self: &Arc<Self>, registry: &mut dyn HookRegistry) -> bool {
		if !self.config.handle_runtime_errors {
			return false;
		}
		registry.set_error_handler(self.error_handler());
		registry.register_shutdown(self.shutdown_handler());
		true
	}

	pub fn error_handler(self: &Arc<Self>) -> ErrorHandler {
		let service = Arc::clone(self);
		Box::new(move |error| {
			if let Err(err) = service.log_runtime_error(error, None) {
				warn!(error = %err, "runtime error could not be logged");
			}
		})
	}

	pub fn shutdown_handler(self: &Arc<Self>) -> ShutdownHandler {
		let service = Arc::clone(self);
		Box::new(move |last_fatal| {
			if let Some(Err(err)) = service.log_shutdown_error(last_fatal) {
				warn!(error = %err, "fatal error could not be logged");
			}
		})
	}

	fn event(
		&self,
		severity: Severity,
		message: impl Into<String>,
		file: Option<&str>,
		line: Option<u32>,
		notes: Option<&str>,
	) -> LogEvent {
		let mut event = LogEvent::new(severity, message);
		if let Some(file) = file {
			event = event.with_file(file);
		}
		if let Some(line) = line {
			event = event.with_line(line);
		}

		let notes = match notes {
			Some(notes) => Some(notes.to_string()),
			None => self.notes.as_ref().and_then(SharedNotes::get),
		};
		if let Some(notes) = notes {
			event = event.with_notes(notes);
		}
		event
	}

	fn dispatch(&self, kind: EventKind, event: &LogEvent, display: bool, persist: bool) -> LogOutcome {
		if display {
			self.display(kind, event);
		}
		if !persist {
			return LogOutcome::DisplayOnly;
		}
		LogOutcome::Persisted(self.persist(event))
	}

	fn display(&self, kind: EventKind, event: &LogEvent) {
		let block = DisplayBlock::new(kind, event, &self.date_format);
		if let Err(err) = self.sink.write(&block) {
			warn!(error = %err, "failed to display log event");
		}
	}

	fn persist(&self, event: &LogEvent) -> bool {
		let sql = format!(
			"INSERT INTO {} (level, message, file, line, notes) VALUES (:level, :message, :file, :line, :notes)",
			self.table
		);
		let params = [
			(":level", Value::from(event.severity().code())),
			(":message", Value::from(event.message())),
			(":file", Value::from(event.file())),
			(":line", Value::from(event.line())),
			(":notes", Value::from(event.notes())),
		];

		match self.database.execute_with(&sql, &params) {
			Ok(rows) if rows > 0 => true,
			Ok(_) => {
				warn!(table = %self.table, "log insert affected no rows");
				false
			}
			Err(err) => {
				warn!(table = %self.table, error = %err, "failed to persist log event");
				false
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use logbook_testing::{MemorySink, RecordingDatabase};

	use super::*;

	fn service(config: LogConfig, db: &RecordingDatabase, sink: &MemorySink) -> LogService {
		LogService::builder(Arc::new(db.clone())).config(config).with_sink(sink.clone()).build().unwrap()
	}

	#[test]
	fn test_create_database_tables_uses_prefixed_name() {
		let db = RecordingDatabase::new();
		let config = LogConfig {
			table_prefix: "app_".to_string(),
			table_suffix: "_v2".to_string(),
			..LogConfig::default()
		};
		let service = service(config, &db, &MemorySink::new());

		assert!(service.create_database_tables().unwrap());
		let calls = db.calls();
		assert_eq!(calls.len(), 1);
		assert!(calls[0].sql.starts_with("CREATE TABLE app_log_v2 ("));
		assert!(calls[0].sql.contains("notes TEXT"));
	}

	#[test]
	fn test_create_database_tables_reports_refusal() {
		let db = RecordingDatabase::new().with_execute_result(false);
		let service = service(LogConfig::default(), &db, &MemorySink::new());
		assert!(!service.create_database_tables().unwrap());
	}

	#[test]
	fn test_create_database_tables_propagates_errors() {
		let db = RecordingDatabase::new().failing("disk I/O error");
		let service = service(LogConfig::default(), &db, &MemorySink::new());
		let err = service.create_database_tables().unwrap_err();
		assert_eq!(err.code(), "LOG_009");
	}

	#[test]
	fn test_insert_binds_all_fields() {
		let db = RecordingDatabase::new();
		let service = service(LogConfig::default(), &db, &MemorySink::new());

		let outcome = service.log_custom_message("disk full", Some("main.rs"), Some(3), Some("job 7"));
		assert_eq!(outcome, LogOutcome::Persisted(true));

		let calls = db.calls();
		assert_eq!(calls.len(), 1);
		assert!(calls[0].sql.starts_with("INSERT INTO log "));
		assert_eq!(
			calls[0].params,
			vec![
				(":level".to_string(), Value::Integer(0)),
				(":message".to_string(), Value::Text("disk full".to_string())),
				(":file".to_string(), Value::Text("main.rs".to_string())),
				(":line".to_string(), Value::Integer(3)),
				(":notes".to_string(), Value::Text("job 7".to_string())),
			]
		);
	}

	#[test]
	fn test_zero_affected_rows_is_failure() {
		let db = RecordingDatabase::new().with_affected_rows(0);
		let sink = MemorySink::new();
		let service = service(LogConfig::default(), &db, &sink);

		assert_eq!(service.log_custom_message("x", None, None, None), LogOutcome::Persisted(false));
		assert_eq!(
			service.log_runtime_error(RuntimeError::new(2, "x"), None).unwrap(),
			LogOutcome::Persisted(false)
		);
		assert_eq!(sink.len(), 2);
	}

	#[test]
	fn test_storage_error_is_failure_not_error() {
		let db = RecordingDatabase::new().failing("database is locked");
		let service = service(LogConfig::default(), &db, &MemorySink::new());
		assert_eq!(service.log_custom_message("x", None, None, None), LogOutcome::Persisted(false));
	}

	#[test]
	fn test_display_failure_still_persists() {
		let db = RecordingDatabase::new();
		let sink = MemorySink::failing();
		let service = service(LogConfig::default(), &db, &sink);

		assert_eq!(service.log_custom_message("x", None, None, None), LogOutcome::Persisted(true));
		assert_eq!(sink.len(), 1);
		assert_eq!(db.call_count(), 1);
	}

	#[test]
	fn test_both_policies_disabled_is_noop_success() {
		let db = RecordingDatabase::new();
		let sink = MemorySink::new();
		let config = LogConfig {
			display_custom_messages: false,
			persist_custom_messages: false,
			..LogConfig::default()
		};
		let service = service(config, &db, &sink);

		let outcome = service.log_custom_message("x", None, None, None);
		assert_eq!(outcome, LogOutcome::DisplayOnly);
		assert!(outcome.is_success());
		assert!(sink.is_empty());
		assert_eq!(db.call_count(), 0);
	}

	#[test]
	fn test_filtered_severities_touch_nothing() {
		let db = RecordingDatabase::new();
		let sink = MemorySink::new();
		let mut config = LogConfig::default();
		for severity in Severity::ALL {
			config.severity_filter.insert(severity.name().to_string(), false);
		}
		let service = service(config, &db, &sink);

		for severity in Severity::ALL {
			let outcome =
				service.log_runtime_error(RuntimeError::new(severity.code(), "x"), Some("n")).unwrap();
			assert_eq!(outcome, LogOutcome::Filtered);
		}
		assert!(sink.is_empty());
		assert_eq!(db.call_count(), 0);
	}

	#[test]
	fn test_custom_messages_ignore_filter() {
		let db = RecordingDatabase::new();
		let mut config = LogConfig::default();
		config.severity_filter.insert("CUSTOM_LOG_MESSAGE".to_string(), false);
		let service = service(config, &db, &MemorySink::new());

		assert_eq!(service.log_custom_message("x", None, None, None), LogOutcome::Persisted(true));
		assert_eq!(db.call_count(), 1);
	}

	#[test]
	fn test_unknown_severity_fails_before_side_effects() {
		let db = RecordingDatabase::new();
		let sink = MemorySink::new();
		let service = service(LogConfig::default(), &db, &sink);

		let err = service.log_runtime_error(RuntimeError::new(3, "x"), None).unwrap_err();
		assert_eq!(err.code(), "LOG_001");
		assert!(sink.is_empty());
		assert_eq!(db.call_count(), 0);
	}

	#[test]
	fn test_runtime_policies_are_independent_of_custom_policies() {
		let db = RecordingDatabase::new();
		let sink = MemorySink::new();
		let config = LogConfig {
			display_runtime_errors: false,
			persist_custom_messages: false,
			..LogConfig::default()
		};
		let service = service(config, &db, &sink);

		assert_eq!(service.log_runtime_error(RuntimeError::new(2, "w"), None).unwrap(), LogOutcome::Persisted(true));
		assert!(sink.is_empty());

		assert_eq!(service.log_custom_message("c", None, None, None), LogOutcome::DisplayOnly);
		assert_eq!(sink.len(), 1);
		assert_eq!(db.call_count(), 1);
	}

	#[test]
	fn test_notes_resolution() {
		let db = RecordingDatabase::new();
		let sink = MemorySink::new();
		let notes = SharedNotes::new("default");
		let service = LogService::builder(Arc::new(db.clone()))
			.with_sink(sink.clone())
			.with_notes(notes.clone())
			.build()
			.unwrap();

		service.log_custom_message("a", None, None, None);
		service.log_custom_message("b", None, None, Some("explicit"));
		notes.clear();
		service.log_custom_message("c", None, None, None);

		let notes: Vec<Option<String>> = sink.blocks().into_iter().map(|block| block.notes).collect();
		assert_eq!(notes, vec![Some("default".to_string()), Some("explicit".to_string()), None]);
	}

	#[test]
	fn test_zone_in_date_format_displays_utc() {
		let db = RecordingDatabase::new();
		let sink = MemorySink::new();
		let service = LogService::builder(Arc::new(db.clone()))
			.date_display_format("%d.%m.%Y %H:%M:%S %Z")
			.with_sink(sink.clone())
			.build()
			.unwrap();

		assert_eq!(service.log_custom_message("disk full", None, None, None), LogOutcome::Persisted(true));
		service.log_runtime_error(RuntimeError::new(2, "x"), None).unwrap();

		let blocks = sink.blocks();
		assert_eq!(blocks.len(), 2);
		assert!(blocks.iter().all(|block| block.date.ends_with(" UTC")));
		assert_eq!(db.call_count(), 2);
	}

	#[test]
	fn test_display_block_carries_real_severity() {
		let sink = MemorySink::new();
		let service = service(LogConfig::default(), &RecordingDatabase::new(), &sink);

		service.log_runtime_error(RuntimeError::new(8192, "old api").with_location("lib.rs", 40), None).unwrap();
		let block = &sink.blocks()[0];
		assert_eq!(block.kind, EventKind::Runtime);
		assert_eq!(block.severity, Severity::Deprecated);
		assert_eq!(block.file.as_deref(), Some("lib.rs"));
		assert_eq!(block.line, Some(40));
	}

	#[test]
	fn test_shutdown_without_fatal_does_nothing() {
		let db = RecordingDatabase::new();
		let sink = MemorySink::new();
		let service = service(LogConfig::default(), &db, &sink);

		assert!(service.log_shutdown_error(None).is_none());
		assert!(sink.is_empty());
		assert_eq!(db.call_count(), 0);
	}

	#[test]
	fn test_get_log_statement() {
		let db = RecordingDatabase::new();
		let service = service(LogConfig::default(), &db, &MemorySink::new());

		let log = service.get_log(&LogQuery::parse("level", "ASC", "LIMIT 5").unwrap()).unwrap();
		assert!(log.is_empty());

		let calls = db.calls();
		assert_eq!(calls[0].sql, "SELECT * FROM log ORDER BY level ASC, id ASC LIMIT :limit");
		assert_eq!(calls[0].params, vec![(":limit".to_string(), Value::Integer(5))]);
	}
}
