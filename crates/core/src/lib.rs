// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Log event model, persisted records and the collaborator interfaces of the
//! log service.

pub mod date;
pub mod display;
pub mod event;
pub mod interface;
pub mod query;
pub mod record;
pub mod table;
pub mod value;

pub use date::DateFormat;
pub use display::{DisplayBlock, DisplayFormat, EventKind};
pub use event::{LogEvent, RuntimeError};
pub use logbook_type::{Error, Result, Severity};
pub use query::{Limit, LogQuery, OrderColumn, OrderDirection};
pub use record::LogRecord;
pub use table::TableName;
pub use value::{Row, Value};
