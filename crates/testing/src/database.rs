// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use logbook_core::{
	interface::Database,
	value::{Row, Value},
};
use logbook_type::{Error, Result};
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
	pub sql: String,
	pub params: Vec<(String, Value)>,
}

#[derive(Debug)]
struct State {
	calls: Vec<Call>,
	execute_result: bool,
	affected_rows: usize,
	rows: Vec<Row>,
	error: Option<String>,
}

/// Database fake recording every statement it receives.
///
/// By default statements succeed, inserts affect one row and queries return
/// nothing. Clones share the same state.
#[derive(Debug, Clone)]
pub struct RecordingDatabase(Arc<Mutex<State>>);

impl Default for RecordingDatabase {
	fn default() -> Self {
		Self(Arc::new(Mutex::new(State {
			calls: Vec::new(),
			execute_result: true,
			affected_rows: 1,
			rows: Vec::new(),
			error: None,
		})))
	}
}

impl RecordingDatabase {
	pub fn new() -> Self {
		Self::default()
	}

	/// Answer `execute` with `result`.
	pub fn with_execute_result(self, result: bool) -> Self {
		self.0.lock().execute_result = result;
		self
	}

	/// Report `rows` affected rows for every parameterized statement.
	pub fn with_affected_rows(self, rows: usize) -> Self {
		self.0.lock().affected_rows = rows;
		self
	}

	/// Answer every query with `rows`.
	pub fn with_rows(self, rows: Vec<Row>) -> Self {
		self.0.lock().rows = rows;
		self
	}

	/// Fail every call with a storage error.
	pub fn failing(self, message: impl Into<String>) -> Self {
		self.0.lock().error = Some(message.into());
		self
	}

	pub fn calls(&self) -> Vec<Call> {
		self.0.lock().calls.clone()
	}

	pub fn call_count(&self) -> usize {
		self.0.lock().calls.len()
	}

	fn record(&self, sql: &str, params: &[(&str, Value)]) -> Result<parking_lot::MutexGuard<'_, State>> {
		let mut state = self.0.lock();
		state.calls.push(Call {
			sql: sql.to_string(),
			params: params.iter().map(|(name, value)| (name.to_string(), value.clone())).collect(),
		});
		if let Some(message) = &state.error {
			return Err(Error::storage(message.clone()));
		}
		Ok(state)
	}
}

impl Database for RecordingDatabase {
	fn execute(&self, sql: &str) -> Result<bool> {
		Ok(self.record(sql, &[])?.execute_result)
	}

	fn execute_with(&self, sql: &str, params: &[(&str, Value)]) -> Result<usize> {
		Ok(self.record(sql, params)?.affected_rows)
	}

	fn query(&self, sql: &str, params: &[(&str, Value)]) -> Result<Vec<Row>> {
		Ok(self.record(sql, params)?.rows.clone())
	}
}
