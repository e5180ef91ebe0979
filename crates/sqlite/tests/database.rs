// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use logbook_core::{
	interface::Database,
	value::{Row, Value},
};
use logbook_sqlite::{Sqlite, SqliteConfig};
use logbook_testing::tempdir::temp_dir;
use logbook_type::Error;

const CREATE: &str = "CREATE TABLE entry (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL, size INTEGER)";

#[test]
fn test_execute_and_insert() {
	let db = Sqlite::in_memory().unwrap();
	assert!(db.execute(CREATE).unwrap());

	let affected = db
		.execute_with(
			"INSERT INTO entry (name, size) VALUES (:name, :size)",
			&[(":name", Value::from("a")), (":size", Value::from(None::<u32>))],
		)
		.unwrap();
	assert_eq!(affected, 1);
}

#[test]
fn test_query_returns_named_columns_in_order() {
	let db = Sqlite::in_memory().unwrap();
	db.execute(CREATE).unwrap();
	for (name, size) in [("a", 1i64), ("b", 2i64)] {
		db.execute_with(
			"INSERT INTO entry (name, size) VALUES (:name, :size)",
			&[(":name", Value::from(name)), (":size", Value::from(size))],
		)
		.unwrap();
	}

	let rows = db.query("SELECT * FROM entry ORDER BY id DESC LIMIT :limit", &[(":limit", Value::from(1u32))]).unwrap();
	assert_eq!(rows, vec![Row::new().with("id", 2i64).with("name", "b").with("size", 2i64)]);
	assert_eq!(rows[0].columns().collect::<Vec<_>>(), vec!["id", "name", "size"]);
}

#[test]
fn test_null_round_trip() {
	let db = Sqlite::in_memory().unwrap();
	db.execute(CREATE).unwrap();
	db.execute_with("INSERT INTO entry (name) VALUES (:name)", &[(":name", Value::from("a"))]).unwrap();

	let rows = db.query("SELECT size FROM entry", &[]).unwrap();
	assert_eq!(rows[0].get("size"), Some(&Value::Null));
}

#[test]
fn test_errors_surface_as_storage_errors() {
	let db = Sqlite::in_memory().unwrap();
	db.execute(CREATE).unwrap();

	let err = db.execute(CREATE).unwrap_err();
	assert!(matches!(err, Error::Storage { .. }));
	assert_eq!(err.code(), "LOG_009");

	let err = db.query("SELECT * FROM missing", &[]).unwrap_err();
	assert!(matches!(err, Error::Storage { .. }));
}

#[test]
fn test_file_database_survives_reopen() {
	temp_dir(|path| {
		{
			let db = Sqlite::new(SqliteConfig::fast(path)).unwrap();
			db.execute(CREATE).unwrap();
			db.execute_with("INSERT INTO entry (name) VALUES (:name)", &[(":name", Value::from("kept"))]).unwrap();
		}

		assert!(path.join("log.db").exists());

		let db = Sqlite::new(SqliteConfig::new(path)).unwrap();
		let rows = db.query("SELECT name FROM entry", &[]).unwrap();
		assert_eq!(rows[0].required_text("name").unwrap(), "kept");
		Ok::<(), std::io::Error>(())
	})
	.unwrap();
}

#[test]
fn test_clones_share_connection() {
	let db = Sqlite::in_memory().unwrap();
	let clone = db.clone();
	db.execute(CREATE).unwrap();
	assert!(clone.query("SELECT * FROM entry", &[]).unwrap().is_empty());
}
