// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQLite connection utilities.

use logbook_type::{Error, Result};
use rusqlite::Connection;

use crate::{DbPath, OpenFlags, SqliteConfig};

pub(crate) fn storage_error(error: rusqlite::Error) -> Error {
	Error::storage(error.to_string())
}

pub(crate) fn connect(path: &DbPath, flags: rusqlite::OpenFlags) -> Result<Connection> {
	fn connection_failed(path: String, error: String) -> Error {
		Error::storage(format!("Failed to connect to database at {}: {}", path, error))
	}

	match path {
		DbPath::File(path) => {
			let path_str = path.to_string_lossy();
			let flags = if path_str.starts_with("file:") {
				flags | rusqlite::OpenFlags::SQLITE_OPEN_URI
			} else {
				flags
			};
			Connection::open_with_flags(path, flags)
				.map_err(|e| connection_failed(path.display().to_string(), e.to_string()))
		}
		DbPath::Memory => Connection::open_in_memory_with_flags(flags)
			.map_err(|e| connection_failed(":memory:".to_string(), e.to_string())),
	}
}

/// Resolve the database path, creating directories as needed.
pub(crate) fn resolve_db_path(db_path: DbPath) -> DbPath {
	match db_path {
		DbPath::Memory => DbPath::Memory,
		DbPath::File(config_path) => {
			if config_path.to_string_lossy().starts_with("file:") {
				DbPath::File(config_path)
			} else if config_path.extension().is_none() {
				std::fs::create_dir_all(&config_path).ok();
				DbPath::File(config_path.join("log.db"))
			} else {
				if let Some(parent) = config_path.parent() {
					std::fs::create_dir_all(parent).ok();
				}
				DbPath::File(config_path)
			}
		}
	}
}

pub(crate) fn convert_flags(flags: &OpenFlags) -> rusqlite::OpenFlags {
	let mut rusqlite_flags = rusqlite::OpenFlags::empty();

	if flags.read_write {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE;
	}
	if flags.create {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_CREATE;
	}
	if flags.full_mutex {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_FULL_MUTEX;
	}
	if flags.no_mutex {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX;
	}
	if flags.uri {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_URI;
	}

	rusqlite_flags
}

pub(crate) fn apply_pragmas(conn: &Connection, config: &SqliteConfig) -> Result<()> {
	// journal_mode answers with the mode actually in effect
	let mode: String = conn
		.pragma_update_and_check(None, "journal_mode", config.journal_mode.as_str(), |row| row.get(0))
		.map_err(storage_error)?;
	tracing::trace!(requested = config.journal_mode.as_str(), effective = %mode, "journal mode set");

	conn.pragma_update(None, "synchronous", config.synchronous_mode.as_str()).map_err(storage_error)?;
	Ok(())
}
