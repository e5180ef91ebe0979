// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Values exchanged with the database collaborator.

use indexmap::IndexMap;
use logbook_type::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Null,
	Integer(i64),
	Real(f64),
	Text(String),
	Blob(Vec<u8>),
}

impl Value {
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	fn kind(&self) -> &'static str {
		match self {
			Value::Null => "NULL",
			Value::Integer(_) => "INTEGER",
			Value::Real(_) => "REAL",
			Value::Text(_) => "TEXT",
			Value::Blob(_) => "BLOB",
		}
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Integer(value)
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Value::Integer(value as i64)
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Text(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Text(value.to_string())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Value::Null)
	}
}

/// One result row, columns in select order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row(IndexMap<String, Value>);

impl Row {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(column, value);
		self
	}

	pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
		self.0.insert(column.into(), value.into());
	}

	pub fn get(&self, column: &str) -> Option<&Value> {
		self.0.get(column)
	}

	pub fn columns(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// A nullable integer column; an absent column reads as NULL.
	pub fn integer(&self, column: &str) -> Result<Option<i64>> {
		match self.0.get(column) {
			None | Some(Value::Null) => Ok(None),
			Some(Value::Integer(value)) => Ok(Some(*value)),
			Some(other) => Err(Error::invalid_row(format!(
				"column '{}' holds {} where INTEGER was expected",
				column,
				other.kind()
			))),
		}
	}

	/// A nullable text column; an absent column reads as NULL.
	pub fn text(&self, column: &str) -> Result<Option<&str>> {
		match self.0.get(column) {
			None | Some(Value::Null) => Ok(None),
			Some(Value::Text(value)) => Ok(Some(value.as_str())),
			Some(other) => Err(Error::invalid_row(format!(
				"column '{}' holds {} where TEXT was expected",
				column,
				other.kind()
			))),
		}
	}

	pub fn required_integer(&self, column: &str) -> Result<i64> {
		self.integer(column)?.ok_or_else(|| Error::invalid_row(format!("column '{}' is NULL", column)))
	}

	pub fn required_text(&self, column: &str) -> Result<&str> {
		self.text(column)?.ok_or_else(|| Error::invalid_row(format!("column '{}' is NULL", column)))
	}
}

impl FromIterator<(String, Value)> for Row {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}
