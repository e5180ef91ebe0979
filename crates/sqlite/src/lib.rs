// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQLite implementation of the log database.

mod config;
mod connection;
mod database;

use std::{ops::Deref, sync::Arc};

pub use config::*;
use logbook_type::Result;
use parking_lot::{Mutex, MutexGuard};
use rusqlite::Connection;

#[derive(Clone)]
pub struct Sqlite(Arc<SqliteInner>);

pub struct SqliteInner {
	conn: Mutex<Connection>,
}

impl Deref for Sqlite {
	type Target = SqliteInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Sqlite {
	/// Open the database described by `config` and apply its pragmas.
	pub fn new(config: SqliteConfig) -> Result<Self> {
		let path = connection::resolve_db_path(config.path.clone());
		let conn = connection::connect(&path, connection::convert_flags(&config.flags))?;
		connection::apply_pragmas(&conn, &config)?;

		tracing::debug!(path = %path, "opened sqlite log database");

		Ok(Self(Arc::new(SqliteInner {
			conn: Mutex::new(conn),
		})))
	}

	/// A private in-memory database.
	pub fn in_memory() -> Result<Self> {
		Self::new(SqliteConfig::in_memory())
	}

	fn get_conn(&self) -> MutexGuard<'_, Connection> {
		self.conn.lock()
	}
}
