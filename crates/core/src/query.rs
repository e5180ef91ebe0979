// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Ordering and limiting of log listings.
//!
//! Columns and directions are closed sets so they can be written into the
//! statement text; limit and offset are bound as parameters.

use std::{fmt, str::FromStr};

use logbook_type::{Error, Result};

use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderColumn {
	Id,
	Level,
	Message,
	File,
	Line,
	Notes,
	#[default]
	Date,
}

impl OrderColumn {
	pub fn as_str(&self) -> &'static str {
		match self {
			OrderColumn::Id => "id",
			OrderColumn::Level => "level",
			OrderColumn::Message => "message",
			OrderColumn::File => "file",
			OrderColumn::Line => "line",
			OrderColumn::Notes => "notes",
			OrderColumn::Date => "date",
		}
	}
}

impl FromStr for OrderColumn {
	type Err = Error;

	fn from_str(column: &str) -> Result<Self> {
		match column.trim().to_ascii_lowercase().as_str() {
			"id" => Ok(OrderColumn::Id),
			"level" => Ok(OrderColumn::Level),
			"message" => Ok(OrderColumn::Message),
			"file" => Ok(OrderColumn::File),
			"line" => Ok(OrderColumn::Line),
			"notes" => Ok(OrderColumn::Notes),
			"date" => Ok(OrderColumn::Date),
			_ => Err(Error::InvalidOrderColumn {
				column: column.to_string(),
			}),
		}
	}
}

impl fmt::Display for OrderColumn {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
	Asc,
	#[default]
	Desc,
}

impl OrderDirection {
	pub fn as_str(&self) -> &'static str {
		match self {
			OrderDirection::Asc => "ASC",
			OrderDirection::Desc => "DESC",
		}
	}
}

impl FromStr for OrderDirection {
	type Err = Error;

	fn from_str(direction: &str) -> Result<Self> {
		match direction.trim().to_ascii_uppercase().as_str() {
			"ASC" => Ok(OrderDirection::Asc),
			"DESC" => Ok(OrderDirection::Desc),
			_ => Err(Error::InvalidOrderDirection {
				direction: direction.to_string(),
			}),
		}
	}
}

impl fmt::Display for OrderDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
	pub count: u32,
	pub offset: Option<u32>,
}

impl Limit {
	pub fn new(count: u32) -> Self {
		Self {
			count,
			offset: None,
		}
	}

	pub fn with_offset(mut self, offset: u32) -> Self {
		self.offset = Some(offset);
		self
	}
}

/// Accepts `"10"`, `"LIMIT 10"`, `"LIMIT 20, 10"` (offset, count) and
/// `"LIMIT 10 OFFSET 20"`.
impl FromStr for Limit {
	type Err = Error;

	fn from_str(limit: &str) -> Result<Self> {
		let invalid = || Error::InvalidLimit {
			limit: limit.to_string(),
		};
		let number = |text: &str| text.trim().parse::<u32>().map_err(|_| invalid());

		let mut text = limit.trim();
		if text.get(..5).is_some_and(|head| head.eq_ignore_ascii_case("limit")) {
			text = text[5..].trim_start();
		}

		if let Some((offset, count)) = text.split_once(',') {
			return Ok(Limit::new(number(count)?).with_offset(number(offset)?));
		}

		let words: Vec<&str> = text.split_whitespace().collect();
		match words.as_slice() {
			[count] => Ok(Limit::new(number(*count)?)),
			[count, keyword, offset] if keyword.eq_ignore_ascii_case("offset") => {
				Ok(Limit::new(number(*count)?).with_offset(number(*offset)?))
			}
			_ => Err(invalid()),
		}
	}
}

/// Parameters of a log listing. Defaults to newest first, unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogQuery {
	pub order_column: OrderColumn,
	pub order_direction: OrderDirection,
	pub limit: Option<Limit>,
}

impl LogQuery {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse the textual order/limit arguments of a listing request.
	pub fn parse(order_column: &str, order_direction: &str, limit: &str) -> Result<Self> {
		let limit = if limit.trim().is_empty() {
			None
		} else {
			Some(limit.parse()?)
		};

		Ok(Self {
			order_column: order_column.parse()?,
			order_direction: order_direction.parse()?,
			limit,
		})
	}

	pub fn order_by(mut self, column: OrderColumn, direction: OrderDirection) -> Self {
		self.order_column = column;
		self.order_direction = direction;
		self
	}

	pub fn limit(mut self, limit: Limit) -> Self {
		self.limit = Some(limit);
		self
	}

	/// `ORDER BY ... LIMIT ...` tail of the listing statement, with the
	/// parameters it refers to. Ties are broken by `id` in the same direction.
	pub fn clause(&self) -> (String, Vec<(&'static str, Value)>) {
		let direction = self.order_direction.as_str();
		let mut clause = format!("ORDER BY {} {}", self.order_column.as_str(), direction);
		if self.order_column != OrderColumn::Id {
			clause.push_str(&format!(", id {}", direction));
		}

		let mut params = Vec::new();
		if let Some(limit) = self.limit {
			clause.push_str(" LIMIT :limit");
			params.push((":limit", Value::from(limit.count)));
			if let Some(offset) = limit.offset {
				clause.push_str(" OFFSET :offset");
				params.push((":offset", Value::from(offset)));
			}
		}

		(clause, params)
	}
}
