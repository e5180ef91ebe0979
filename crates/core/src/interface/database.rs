// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use logbook_type::Result;

use crate::value::{Row, Value};

/// Relational store the log service writes to.
///
/// Parameters are named (`:level`) and bound by the implementation; only
/// validated identifiers and fixed keywords are ever part of `sql`.
pub trait Database: Send + Sync {
	/// Run a statement without parameters. `Ok(false)` means the store
	/// reported failure without raising an error.
	fn execute(&self, sql: &str) -> Result<bool>;

	/// Prepare, bind and run a statement, returning the affected row count.
	fn execute_with(&self, sql: &str, params: &[(&str, Value)]) -> Result<usize>;

	/// Prepare, bind and run a query, fetching every row.
	fn query(&self, sql: &str, params: &[(&str, Value)]) -> Result<Vec<Row>>;
}
