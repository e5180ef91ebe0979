// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Logging of runtime errors and custom messages.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use logbook::{LogQuery, LogService, ProcessHooks, Sqlite, SqliteConfig, log_custom};
//!
//! let database = Arc::new(Sqlite::new(SqliteConfig::new("log.db"))?);
//! let service = Arc::new(LogService::builder(database).table_prefix("app_").build()?);
//! service.create_database_tables()?;
//!
//! let mut hooks = ProcessHooks::new();
//! service.install(&mut hooks);
//! hooks.install_panic_hook();
//!
//! log_custom!(service, "started with {} workers", 4);
//! for (id, record) in service.get_log(&LogQuery::default())? {
//! 	println!("{id}: {} {}", record.severity_name, record.message);
//! }
//! # Ok::<(), logbook::Error>(())
//! ```

pub use logbook_core as core;
pub use logbook_core::{
	DateFormat, DisplayBlock, DisplayFormat, EventKind, Limit, LogEvent, LogQuery, LogRecord, OrderColumn,
	OrderDirection, RuntimeError, TableName,
	interface::{Database, DisplaySink, HookRegistry},
};
pub use logbook_service::{
	LogConfig, LogOutcome, LogService, LogServiceBuilder, ProcessHooks, SeverityFilter, SharedNotes, log_custom,
	log_runtime, report,
	sink::{ConsoleSink, WriterSink},
};
pub use logbook_sqlite::{Sqlite, SqliteConfig};
pub use logbook_type::{Error, Result, Severity};
