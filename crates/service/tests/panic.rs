// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{panic, sync::Arc};

use logbook_service::{LogQuery, LogService, ProcessHooks, Severity};
use logbook_sqlite::Sqlite;
use logbook_testing::MemorySink;

fn crash(worker: u32) {
	panic!("worker {} crashed", worker);
}

#[test]
fn test_panic_is_logged_at_shutdown() {
	let sink = MemorySink::new();
	let service = Arc::new(
		LogService::builder(Arc::new(Sqlite::in_memory().unwrap())).with_sink(sink.clone()).build().unwrap(),
	);
	service.create_database_tables().unwrap();

	let mut hooks = ProcessHooks::new();
	assert!(service.install(&mut hooks));
	hooks.install_panic_hook();

	let result = panic::catch_unwind(|| crash(3));
	assert!(result.is_err());

	let fatal = hooks.last_fatal().unwrap();
	assert_eq!(fatal.message, "worker 3 crashed");
	assert_eq!(fatal.file.as_deref(), Some(file!()));

	assert!(sink.is_empty());
	drop(hooks);

	let log = service.get_log(&LogQuery::default()).unwrap();
	assert_eq!(log.len(), 1);
	let record = log.values().next().unwrap();
	assert_eq!(record.severity, Severity::Error);
	assert_eq!(record.message, "worker 3 crashed");
	assert_eq!(record.file.as_deref(), Some(file!()));
	assert_eq!(record.line, fatal.line);
	assert_eq!(sink.len(), 1);
}
