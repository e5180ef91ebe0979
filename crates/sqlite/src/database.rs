// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use logbook_core::{
	interface::Database,
	value::{Row, Value},
};
use logbook_type::{Error, Result};
use rusqlite::{
	ToSql,
	types::{Value as SqlValue, ValueRef},
};

use crate::{Sqlite, connection::storage_error};

impl Database for Sqlite {
	fn execute(&self, sql: &str) -> Result<bool> {
		let conn = self.get_conn();
		conn.execute_batch(sql).map_err(storage_error)?;
		Ok(true)
	}

	fn execute_with(&self, sql: &str, params: &[(&str, Value)]) -> Result<usize> {
		let conn = self.get_conn();
		let mut stmt = conn.prepare_cached(sql).map_err(storage_error)?;

		let values = to_sql_values(params);
		let bound: Vec<(&str, &dyn ToSql)> = values.iter().map(|(name, value)| (*name, value as &dyn ToSql)).collect();

		stmt.execute(bound.as_slice()).map_err(storage_error)
	}

	fn query(&self, sql: &str, params: &[(&str, Value)]) -> Result<Vec<Row>> {
		let conn = self.get_conn();
		let mut stmt = conn.prepare_cached(sql).map_err(storage_error)?;
		let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

		let values = to_sql_values(params);
		let bound: Vec<(&str, &dyn ToSql)> = values.iter().map(|(name, value)| (*name, value as &dyn ToSql)).collect();

		let mut rows = stmt.query(bound.as_slice()).map_err(storage_error)?;
		let mut result = Vec::new();
		while let Some(row) = rows.next().map_err(storage_error)? {
			let mut decoded = Row::new();
			for (idx, column) in columns.iter().enumerate() {
				let value = from_sql_value(column, row.get_ref(idx).map_err(storage_error)?)?;
				decoded.insert(column.clone(), value);
			}
			result.push(decoded);
		}

		Ok(result)
	}
}

fn to_sql_values<'a>(params: &[(&'a str, Value)]) -> Vec<(&'a str, SqlValue)> {
	params
		.iter()
		.map(|(name, value)| {
			let value = match value {
				Value::Null => SqlValue::Null,
				Value::Integer(v) => SqlValue::Integer(*v),
				Value::Real(v) => SqlValue::Real(*v),
				Value::Text(v) => SqlValue::Text(v.clone()),
				Value::Blob(v) => SqlValue::Blob(v.clone()),
			};
			(*name, value)
		})
		.collect()
}

fn from_sql_value(column: &str, value: ValueRef<'_>) -> Result<Value> {
	Ok(match value {
		ValueRef::Null => Value::Null,
		ValueRef::Integer(v) => Value::Integer(v),
		ValueRef::Real(v) => Value::Real(v),
		ValueRef::Text(bytes) => Value::Text(
			String::from_utf8(bytes.to_vec())
				.map_err(|_| Error::invalid_row(format!("column '{}' is not valid UTF-8", column)))?,
		),
		ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
	})
}
